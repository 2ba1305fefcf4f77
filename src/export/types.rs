//! Export types.

/// What happened when saving results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The file was written.
    Saved {
        /// Number of records written
        records: usize,
    },
    /// There was nothing to write, so no file was touched (CSV only).
    NothingToSave,
}
