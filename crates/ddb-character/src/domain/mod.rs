//! Domain Layer
//!
//! Character records, their derived views, prompt composition and errors.
//! No I/O happens here.

pub mod errors;
pub mod prompt;
pub mod record;
pub mod views;

// Re-exports for convenience
pub use errors::*;
pub use record::*;
pub use views::*;
