//! Error handling.
//!
//! Errors are split by how the run reacts to them:
//! - **Initialization and input errors** are fatal and end the run
//! - **Lookup failures** are retried, then captured as error records
//! - **Export errors** are reported without changing the exit code

mod types;

// Re-export public API
pub use types::{
    describe_reqwest_error, ExportError, InitializationError, InputError, LookupFailure,
};
