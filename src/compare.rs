//! Constant-time byte comparison for secret material.

/// Compare two byte sequences without leaking the mismatch position.
///
/// Empty input or a length mismatch returns `false` immediately; length is
/// not treated as secret. Equal-length inputs are compared by accumulating
/// the XOR of every byte pair, so the running time does not depend on where
/// the sequences first differ.
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (left, right) in a.iter().zip(b.iter()) {
        diff |= left ^ right;
    }
    diff == 0
}
