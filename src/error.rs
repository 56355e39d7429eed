use thiserror::Error;

use crate::entry::RESET_SENT_AT_FIELD;

/// Faults that cross the public API boundary.
///
/// Expected failure modes (wrong credentials, unknown id, invalid or expired
/// token, password too short) are never errors; they are reported as
/// [`AuthOutcome`](crate::AuthOutcome) variants. Only unexpected failures in
/// a collaborator or malformed stored data surface here, and the service
/// never retries on behalf of the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("entry store failure")]
    Store(#[source] anyhow::Error),
    #[error("notifier failure")]
    Notify(#[source] anyhow::Error),
    #[error("secret hashing failure")]
    Hash(#[source] anyhow::Error),
    #[error("reset token generation failure")]
    Token(#[source] anyhow::Error),
    #[error("malformed timestamp in field {field}")]
    Timestamp {
        field: &'static str,
        #[source]
        source: chrono::ParseError,
    },
    #[error("entry is missing field {0}")]
    MissingField(&'static str),
}

impl Error {
    pub(crate) fn malformed_sent_at(source: chrono::ParseError) -> Self {
        Self::Timestamp {
            field: RESET_SENT_AT_FIELD,
            source,
        }
    }
}
