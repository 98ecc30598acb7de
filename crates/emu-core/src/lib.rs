//! Core traits and types for instruction-level emulation.
//!
//! CPUs execute against a [`Bus`] and account their work in [`Cycles`].
//! Components expose their internal state through [`Observable`].

mod bus;
mod cycles;
mod observable;

pub use bus::{Bus, SimpleBus};
pub use cycles::Cycles;
pub use observable::{Observable, Value};
