//! # entry-auth (Credential Verification & Password Reset)
//!
//! `entry-auth` verifies hashed secrets and drives a time-bounded,
//! single-use password-reset workflow for identity-bearing records
//! ("entries") living in an external datastore. The datastore, email
//! delivery, HTTP routing and templating are collaborators behind narrow
//! traits ([`EntryStore`], [`Notifier`], [`SecretHasher`]); this crate owns
//! only the verification logic and the reset-token state machine.
//!
//! ## Operations
//!
//! [`AuthService`] exposes four operations, each returning a tagged
//! [`AuthOutcome`] for every anticipated failure instead of an error:
//!
//! - **`sign_in`** — recompute the candidate hash with the stored salt and
//!   compare it in constant time. Unknown ids and wrong passwords are
//!   indistinguishable to callers.
//! - **`forgot_password`** — issue a CSPRNG reset token, persist the
//!   token/timestamp pair atomically, then email reset instructions with
//!   the assembled link.
//! - **`reset_password`** — consume a token within its lifetime, install a
//!   freshly salted hash and clear the pair in one write. Unknown and
//!   expired tokens report the same outcome.
//! - **`find_authenticated_resource`** — passthrough lookup on the store.
//!
//! ## Security posture
//!
//! - Hash comparison never short-circuits on the first differing byte
//!   ([`constant_time_eq`]), so timing does not leak mismatch positions.
//! - Reset tokens come from the operating system CSPRNG, expire after a
//!   configurable lifetime (lazily, at reset time) and are single-use.
//! - Plaintext passwords are carried in [`secrecy::SecretString`] and stay
//!   out of `Debug` output and log lines.
//!
//! ## Concurrency
//!
//! The service is stateless between calls and holds no locks; per-entry
//! atomicity and lookup-then-update serialization are the store's contract
//! (see [`EntryStore`]).

mod compare;
mod config;
mod entry;
mod error;
mod hasher;
mod notify;
mod options;
mod outcome;
mod service;
mod store;
mod token;

pub use compare::constant_time_eq;
pub use config::AuthConfig;
pub use entry::{Entry, FieldValues, RESET_SENT_AT_FIELD, RESET_TOKEN_FIELD};
pub use error::Error;
pub use hasher::{Argon2Hasher, SecretHasher};
pub use notify::{EmailOptions, LogNotifier, Notifier};
pub use options::{AuthOptions, Context};
pub use outcome::AuthOutcome;
pub use service::AuthService;
pub use store::EntryStore;
