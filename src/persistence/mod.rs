//! Save-file persistence.

pub mod codec;

pub use codec::PersistenceCodec;

/// File name used when the caller does not choose one.
pub const DEFAULT_SAVE_FILE: &str = "saveData.txt";
