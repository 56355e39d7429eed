//! Reset-token generation.

use anyhow::{Context, Result};
use base64::Engine;
use rand::{rngs::OsRng, RngCore};

const RESET_TOKEN_BYTES: usize = 32;

/// Create a new opaque reset token.
///
/// The raw value is only embedded in the reset link sent to the user; the
/// entry store keeps it verbatim in `_auth_reset_token` until it is consumed
/// or overwritten.
pub(crate) fn generate_reset_token() -> Result<String> {
    let mut bytes = [0u8; RESET_TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .context("failed to generate reset token")?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{generate_reset_token, RESET_TOKEN_BYTES};
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    #[test]
    fn token_decodes_to_expected_length() {
        let token = generate_reset_token().unwrap();
        let decoded = URL_SAFE_NO_PAD.decode(token.as_bytes()).unwrap();
        assert_eq!(decoded.len(), RESET_TOKEN_BYTES);
    }

    #[test]
    fn tokens_are_unique() {
        let first = generate_reset_token().unwrap();
        let second = generate_reset_token().unwrap();
        assert_ne!(first, second);
    }
}
