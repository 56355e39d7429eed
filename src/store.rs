//! Entry store collaborator trait.

use anyhow::Result;

use crate::entry::{Entry, FieldValues};

/// External datastore holding the identity records.
///
/// All durable state lives behind this trait; the auth service is stateless
/// between calls. Implementations own two correctness guarantees the reset
/// flow depends on:
///
/// - `update_decorated_entry` must be atomic per entry, so the reset-token
///   pair is set or cleared as a unit.
/// - A lookup-then-update sequence must not race another one for the same
///   entry, otherwise two concurrent reset attempts could both consume a
///   token that is meant to be single-use.
///
/// Result ordering of [`EntryStore::all`] is a store-level product decision;
/// the service always takes the first match.
pub trait EntryStore: Send + Sync {
    /// Fetch a single entry by its store identifier.
    fn find(&self, entry_type: &str, id: &str) -> Result<Option<Entry>>;

    /// Fetch all entries of a type whose fields equal every predicate pair.
    fn all(&self, entry_type: &str, predicate: &FieldValues) -> Result<Vec<Entry>>;

    /// Partially update an entry; null values clear the named field.
    ///
    /// The store may decorate the result with computed or derived fields;
    /// callers treat this as an opaque write-then-return.
    fn update_decorated_entry(
        &self,
        entry_type: &str,
        entry: &Entry,
        updates: FieldValues,
    ) -> Result<Entry>;
}
