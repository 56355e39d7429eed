//! Tagged outcomes of the auth operations.

use crate::entry::Entry;

/// Result of one auth operation, covering success and every anticipated
/// failure.
///
/// Several distinct causes deliberately collapse into one variant: an
/// unknown id signs in as [`AuthOutcome::WrongCredentials`] just like a
/// wrong password, and an expired token is indistinguishable from an unknown
/// one. Differentiated responses would hand probers an oracle.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthOutcome {
    SignedIn(Entry),
    WrongCredentials,
    ResetInstructionsSent {
        password_field: String,
        entry: Entry,
    },
    WrongId {
        id_field: String,
    },
    PasswordReset {
        password_field: String,
        entry: Entry,
    },
    InvalidToken,
    PasswordTooShort,
}

impl AuthOutcome {
    /// Render the symbolic tag for this outcome.
    ///
    /// Tags embed the configured field names (`wrong_email`,
    /// `password_reset`, ...), so callers that wire field names per entry
    /// type get a matching error taxonomy.
    #[must_use]
    pub fn tag(&self) -> String {
        match self {
            Self::SignedIn(_) => "signed_in".to_string(),
            Self::WrongCredentials => "wrong_credentials".to_string(),
            Self::ResetInstructionsSent { password_field, .. } => {
                format!("reset_{password_field}_instructions_sent")
            }
            Self::WrongId { id_field } => format!("wrong_{id_field}"),
            Self::PasswordReset { password_field, .. } => format!("{password_field}_reset"),
            Self::InvalidToken => "invalid_token".to_string(),
            Self::PasswordTooShort => "password_too_short".to_string(),
        }
    }

    /// The entry carried by a successful outcome, if any.
    #[must_use]
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Self::SignedIn(entry)
            | Self::ResetInstructionsSent { entry, .. }
            | Self::PasswordReset { entry, .. } => Some(entry),
            _ => None,
        }
    }
}
