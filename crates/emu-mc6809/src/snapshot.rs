//! Save state (snapshot) support.
//!
//! Captures the complete machine state for regression tests, debugging
//! and reproducible bug reports. A snapshot is an atomic view: the CPU
//! is between instructions when it is taken.

use cpu_mc6809::{Cpu6809, Status};
use emu_core::{Cycles, SimpleBus};

/// CPU register state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub b: u8,
    pub x: u16,
    pub y: u16,
    pub u: u16,
    pub s: u16,
    pub pc: u16,
    pub dp: u8,
    pub cc: u8,
}

/// Complete machine state snapshot.
#[derive(Clone)]
pub struct Snapshot {
    /// CPU registers.
    pub cpu: CpuState,
    /// Elapsed cycles at capture time.
    pub cycles: u64,
    /// Full RAM contents.
    pub ram: Box<[u8; 0x10000]>,
}

impl Snapshot {
    /// Capture the current machine state.
    #[must_use]
    pub fn capture(cpu: &Cpu6809, bus: &SimpleBus) -> Self {
        Self {
            cpu: CpuState {
                a: cpu.regs.a,
                b: cpu.regs.b,
                x: cpu.regs.x,
                y: cpu.regs.y,
                u: cpu.regs.u,
                s: cpu.regs.s,
                pc: cpu.regs.pc,
                dp: cpu.regs.dp,
                cc: cpu.regs.cc,
            },
            cycles: cpu.cycles().get(),
            ram: Box::new(*bus.ram()),
        }
    }

    /// Restore this state into a machine.
    pub fn apply(&self, cpu: &mut Cpu6809, bus: &mut SimpleBus) {
        cpu.regs.a = self.cpu.a;
        cpu.regs.b = self.cpu.b;
        cpu.regs.x = self.cpu.x;
        cpu.regs.y = self.cpu.y;
        cpu.regs.u = self.cpu.u;
        cpu.regs.s = self.cpu.s;
        cpu.regs.pc = self.cpu.pc;
        cpu.regs.dp = self.cpu.dp;
        cpu.regs.cc = self.cpu.cc;
        cpu.set_cycles(Cycles::new(self.cycles));
        bus.set_ram(&self.ram);
    }

    /// Read memory from the snapshot.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.ram[usize::from(address)]
    }

    /// Read a range of memory from the snapshot.
    #[must_use]
    pub fn peek_range(&self, start: u16, len: u16) -> &[u8] {
        let start = usize::from(start);
        let end = (start + usize::from(len)).min(0x10000);
        &self.ram[start..end]
    }

    /// One-line CPU state dump for diagnostics.
    #[must_use]
    pub fn dump_cpu(&self) -> String {
        format!(
            "A={:02X} B={:02X} X={:04X} Y={:04X} U={:04X} S={:04X} PC={:04X} DP={:02X} CC={:02X} [{}]",
            self.cpu.a,
            self.cpu.b,
            self.cpu.x,
            self.cpu.y,
            self.cpu.u,
            self.cpu.s,
            self.cpu.pc,
            self.cpu.dp,
            self.cpu.cc,
            Status::as_string(self.cpu.cc),
        )
    }
}

#[cfg(test)]
mod tests {
    use cpu_mc6809::CpuConfig;

    use super::*;
    use crate::config::MachineConfig;
    use crate::machine::Machine;

    #[test]
    fn snapshot_round_trip() {
        let mut machine = Machine::new(MachineConfig {
            cpu: CpuConfig::default(),
            burst_count: 1,
            max_cpu_cycles: None,
        });
        machine.load(0x4000, &[0x86, 0x5A, 0x1F, 0x89]); // LDA #$5A; TFR A,B
        machine.cpu_mut().regs.pc = 0x4000;
        machine.step().expect("LDA");
        machine.step().expect("TFR");

        let snap = machine.snapshot();
        assert_eq!(snap.cpu.a, 0x5A);
        assert_eq!(snap.cpu.b, 0x5A);
        assert_eq!(snap.peek(0x4000), 0x86);
        assert_eq!(snap.peek_range(0x4000, 4), &[0x86, 0x5A, 0x1F, 0x89]);

        // Trash the machine, then restore
        machine.cpu_mut().regs.set_d(0x0000);
        machine.cpu_mut().regs.pc = 0x0000;
        machine.poke(0x4000, 0xFF);
        machine.restore(&snap);

        assert_eq!(machine.cpu().regs.a, 0x5A);
        assert_eq!(machine.cpu().regs.pc, 0x4004);
        assert_eq!(machine.peek(0x4000), 0x86);
        assert_eq!(machine.cpu().cycles().get(), snap.cycles);
    }

    #[test]
    fn dump_cpu_shows_flag_letters() {
        let mut machine = Machine::new(MachineConfig::default());
        machine.cpu_mut().regs.cc = 0x05; // Z and C
        let dump = machine.snapshot().dump_cpu();
        assert!(dump.contains(".....Z.C"), "{dump}");
    }
}
