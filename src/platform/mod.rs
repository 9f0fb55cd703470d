//! Platform abstraction layer
//!
//! Turns browser/native input events into the single abstract "activate"
//! signal the simulation consumes.

pub mod input;

pub use input::{ActivateLatch, RawInput};
