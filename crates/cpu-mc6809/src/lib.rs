//! Motorola 6809 CPU core.
//!
//! Instruction-level emulation of the 6809 (big-endian): each call to
//! [`Cpu6809::step`] executes one complete instruction against a
//! [`emu_core::Bus`] and accounts its cycle cost. Page-1 (`$10`) and
//! page-2 (`$11`) opcode prefixes are resolved during fetch.
//!
//! Interrupt delivery is not implemented; the opcodes reserved for it
//! (CWAI, SYNC, SWI, SWI2, SWI3, RTI, RESET) decode but trap as
//! [`CpuError::Unimplemented`].

mod addressing;
mod arith;
mod branches;
mod cpu;
mod error;
mod execute;
pub mod flags;
mod logic;
pub mod opcodes;
pub mod registers;
mod shifts;
pub mod signed;
mod transfer;

pub use addressing::AddrMode;
pub use cpu::{Cpu6809, CpuConfig, MachineProfile, Operands};
pub use error::CpuError;
pub use flags::{Cond, Status, C, E, F, H, I, N, V, Z};
pub use opcodes::{Descriptor, Op, WriteBack};
pub use registers::{IndexReg, RegId, Registers, Stack, Width};
