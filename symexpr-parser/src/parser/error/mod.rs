pub mod kind;

/// A parsing error, pointing at the regions of the source code it originated from.
pub use symexpr_error::Error;
