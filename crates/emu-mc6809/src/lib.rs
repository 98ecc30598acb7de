//! Headless 6809 machine.
//!
//! Wires a [`cpu_mc6809::Cpu6809`] to a flat 64 KB RAM, and runs it in
//! bounded bursts between polls of a control channel. State can be
//! captured and restored as a [`Snapshot`].

mod config;
mod control;
mod machine;
mod snapshot;

pub use config::MachineConfig;
pub use control::{ChannelControl, Command, ControlChannel, NoControl};
pub use machine::Machine;
pub use snapshot::{CpuState, Snapshot};
