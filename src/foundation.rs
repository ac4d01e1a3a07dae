/// Shared primitive types: canvas dimensions, the logical grid extent, and
/// kurbo geometry re-exports.
pub mod core;
/// Error taxonomy and result alias used across the crate.
pub mod error;
