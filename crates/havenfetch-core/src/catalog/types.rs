//! Types used by the catalog.

/// Outcome of inserting one asset name.
///
/// A uniqueness violation is not an error; it is the normal signal that the
/// name was cataloged by an earlier run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The name was new and a row was created.
    Inserted,
    /// A row with this name already exists; nothing was written.
    AlreadyExists,
}
