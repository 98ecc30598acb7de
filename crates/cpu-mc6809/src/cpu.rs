//! The 6809 CPU and its fetch–decode–execute step.

use emu_core::{Bus, Cycles, Observable, Value};

use crate::addressing::AddrMode;
use crate::error::CpuError;
use crate::flags;
use crate::opcodes::{self, Descriptor, WriteBack};
use crate::registers::{RegId, Registers, Stack, Width};

/// Machine profile selecting reset-time CC semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MachineProfile {
    /// Dragon 32 / CoCo style: reset masks FIRQ and IRQ (F=1, I=1).
    #[default]
    Dragon32,
    /// SBC09 monitor board: reset clears CC entirely.
    Sbc09,
}

/// CPU configuration.
#[derive(Debug, Clone, Copy)]
pub struct CpuConfig {
    /// Address of the big-endian reset vector.
    pub reset_vector: u16,
    /// Reset-time CC behavior.
    pub profile: MachineProfile,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            reset_vector: 0xFFFE,
            profile: MachineProfile::default(),
        }
    }
}

/// Operands handed to an instruction handler.
///
/// The descriptor decides which fields are populated: an effective
/// address, a memory (or immediate) value, and the target register.
#[derive(Debug, Clone, Copy)]
pub struct Operands {
    pub opcode: u16,
    pub ea: Option<u16>,
    pub m: Option<u16>,
    pub register: Option<RegId>,
}

impl Operands {
    /// The effective address. The opcode table guarantees presence for
    /// every handler that asks.
    pub(crate) fn ea(&self) -> u16 {
        self.ea.expect("descriptor provides ea")
    }

    /// The memory or immediate operand.
    pub(crate) fn m(&self) -> u16 {
        self.m.expect("descriptor provides m")
    }

    /// The target register.
    pub(crate) fn reg(&self) -> RegId {
        self.register.expect("descriptor provides register")
    }
}

/// Motorola 6809 CPU.
#[derive(Debug, Clone)]
pub struct Cpu6809 {
    /// Programmer-visible registers.
    pub regs: Registers,
    config: CpuConfig,
    cycles: Cycles,
    /// Address of the opcode byte of the instruction being executed
    /// (the prefix byte for page-1/page-2 instructions).
    last_op_address: u16,
}

impl Cpu6809 {
    /// Create a new CPU in power-on state. Call [`Cpu6809::reset`] before
    /// stepping.
    #[must_use]
    pub fn new(config: CpuConfig) -> Self {
        Self {
            regs: Registers::new(),
            config,
            cycles: Cycles::ZERO,
            last_op_address: 0,
        }
    }

    /// Total elapsed cycles.
    #[must_use]
    pub const fn cycles(&self) -> Cycles {
        self.cycles
    }

    pub(crate) fn add_cycles(&mut self, cycles: Cycles) {
        self.cycles += cycles;
    }

    /// Restore the cycle counter (snapshot restore).
    pub fn set_cycles(&mut self, cycles: Cycles) {
        self.cycles = cycles;
    }

    /// Address of the most recently dispatched instruction.
    #[must_use]
    pub const fn last_op_address(&self) -> u16 {
        self.last_op_address
    }

    /// The configuration the CPU was built with.
    #[must_use]
    pub const fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Reset: apply the profile's CC preset, then load PC from the
    /// big-endian word at the reset vector. Other registers and the
    /// cycle counter persist.
    pub fn reset<B: Bus>(&mut self, bus: &mut B) {
        self.last_op_address = 0;
        match self.config.profile {
            MachineProfile::Sbc09 => self.regs.cc = 0,
            MachineProfile::Dragon32 => self.regs.cc |= flags::F | flags::I,
        }
        self.regs.pc = bus.read_word(self.config.reset_vector);
    }

    // === Instruction stream ===

    /// Fetch a byte at PC and advance PC.
    pub(crate) fn fetch_byte<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch a big-endian word at PC and advance PC by 2.
    pub(crate) fn fetch_word<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let value = bus.read_word(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(2);
        value
    }

    // === Stack primitives (shared by S and U) ===

    pub(crate) fn push_byte<B: Bus>(&mut self, bus: &mut B, stack: Stack, value: u8) {
        let sp = self.regs.stack(stack).wrapping_sub(1);
        self.regs.set_stack(stack, sp);
        bus.write(sp, value);
    }

    /// Push big-endian: high byte lands at the lower address.
    pub(crate) fn push_word<B: Bus>(&mut self, bus: &mut B, stack: Stack, value: u16) {
        let sp = self.regs.stack(stack).wrapping_sub(2);
        self.regs.set_stack(stack, sp);
        bus.write_word(sp, value);
    }

    pub(crate) fn pull_byte<B: Bus>(&mut self, bus: &mut B, stack: Stack) -> u8 {
        let sp = self.regs.stack(stack);
        let value = bus.read(sp);
        self.regs.set_stack(stack, sp.wrapping_add(1));
        value
    }

    pub(crate) fn pull_word<B: Bus>(&mut self, bus: &mut B, stack: Stack) -> u16 {
        let sp = self.regs.stack(stack);
        let value = bus.read_word(sp);
        self.regs.set_stack(stack, sp.wrapping_add(2));
        value
    }

    // === Step ===

    /// Execute one complete instruction.
    ///
    /// Returns the cycles consumed. On error no cycles are accounted and
    /// the CPU state reflects the partial fetch (PC past the opcode).
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u64, CpuError> {
        let start = self.cycles;
        let op_address = self.regs.pc;

        let mut opcode = u16::from(self.fetch_byte(bus));
        if opcode == 0x10 || opcode == 0x11 {
            opcode = opcode << 8 | u16::from(self.fetch_byte(bus));
        }
        self.last_op_address = op_address;

        let Some(desc) = opcodes::lookup(opcode) else {
            #[cfg(debug_assertions)]
            eprintln!("  MC6809 illegal opcode ${opcode:02X} at ${op_address:04X}");
            return Err(CpuError::IllegalOpcode {
                address: op_address,
                opcode,
            });
        };

        let operands = self.fetch_operands(bus, desc, opcode);
        let result = self.execute(bus, desc, &operands)?;

        if let Some((ea, value)) = result {
            match desc.writes {
                WriteBack::Byte => bus.write(ea, value as u8),
                WriteBack::Word => bus.write_word(ea, value),
                WriteBack::None => debug_assert!(false, "{} returned a write", desc.mnemonic),
            }
        }

        self.cycles += Cycles::new(u64::from(desc.cycles));
        Ok((self.cycles - start).get())
    }

    /// Produce the operands the descriptor asks for, reading further
    /// instruction-stream bytes and memory as needed.
    fn fetch_operands<B: Bus>(&mut self, bus: &mut B, desc: &Descriptor, opcode: u16) -> Operands {
        let mut ea = None;
        let mut m = None;

        match desc.mode {
            AddrMode::Inherent => {}
            AddrMode::Immediate => {
                m = Some(match desc.width {
                    Width::Byte => u16::from(self.fetch_byte(bus)),
                    Width::Word => self.fetch_word(bus),
                });
            }
            AddrMode::Direct | AddrMode::Indexed | AddrMode::Extended => {
                let addr = match desc.mode {
                    AddrMode::Direct => self.ea_direct(bus),
                    AddrMode::Indexed => self.ea_indexed(bus),
                    _ => self.ea_extended(bus),
                };
                if desc.needs_ea {
                    ea = Some(addr);
                }
                if desc.reads_m {
                    m = Some(match desc.width {
                        Width::Byte => u16::from(bus.read(addr)),
                        Width::Word => bus.read_word(addr),
                    });
                }
            }
            AddrMode::Relative => ea = Some(self.ea_relative(bus)),
            AddrMode::RelativeWord => ea = Some(self.ea_relative_word(bus)),
        }

        Operands {
            opcode,
            ea,
            m,
            register: desc.register,
        }
    }
}

const QUERY_PATHS: &[&str] = &[
    "a", "b", "d", "x", "y", "u", "s", "pc", "dp", "cc",
    "flags.e", "flags.f", "flags.h", "flags.i",
    "flags.n", "flags.z", "flags.v", "flags.c",
    "cycles", "last_op_address",
];

impl Observable for Cpu6809 {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "a" => Some(self.regs.a.into()),
            "b" => Some(self.regs.b.into()),
            "d" => Some(self.regs.d().into()),
            "x" => Some(self.regs.x.into()),
            "y" => Some(self.regs.y.into()),
            "u" => Some(self.regs.u.into()),
            "s" => Some(self.regs.s.into()),
            "pc" => Some(self.regs.pc.into()),
            "dp" => Some(self.regs.dp.into()),
            "cc" => Some(self.regs.cc.into()),
            "flags.e" => Some((self.regs.cc & flags::E != 0).into()),
            "flags.f" => Some((self.regs.cc & flags::F != 0).into()),
            "flags.h" => Some((self.regs.cc & flags::H != 0).into()),
            "flags.i" => Some((self.regs.cc & flags::I != 0).into()),
            "flags.n" => Some((self.regs.cc & flags::N != 0).into()),
            "flags.z" => Some((self.regs.cc & flags::Z != 0).into()),
            "flags.v" => Some((self.regs.cc & flags::V != 0).into()),
            "flags.c" => Some((self.regs.cc & flags::C != 0).into()),
            "cycles" => Some(self.cycles.get().into()),
            "last_op_address" => Some(self.last_op_address.into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        QUERY_PATHS
    }
}
