//! Ports (Interfaces)
//!
//! Abstract interfaces the character client uses to reach external services.
//! Implementations live in `services`.

mod text_generator;

pub use text_generator::*;
