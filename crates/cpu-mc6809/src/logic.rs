//! Logical and test instructions: AND, OR, EOR, BIT, COM, CLR, TST,
//! ANDCC, ORCC.

use crate::cpu::{Cpu6809, Operands};
use crate::flags::{Status, C, N, V, Z};

impl Cpu6809 {
    /// ANDA / ANDB. Flags N, Z; V cleared.
    pub(crate) fn op_and(&mut self, ops: &Operands) {
        let reg = ops.reg();
        let r = self.regs.value(reg) as u8 & ops.m() as u8;
        self.regs.set_value(reg, u16::from(r));
        self.regs.cc = Status::update_nz8(self.regs.cc, r) & !V;
    }

    /// ORA / ORB. Flags N, Z; V cleared.
    pub(crate) fn op_or(&mut self, ops: &Operands) {
        let reg = ops.reg();
        let r = self.regs.value(reg) as u8 | ops.m() as u8;
        self.regs.set_value(reg, u16::from(r));
        self.regs.cc = Status::update_nz8(self.regs.cc, r) & !V;
    }

    /// EORA / EORB. Flags N, Z; V cleared.
    pub(crate) fn op_eor(&mut self, ops: &Operands) {
        let reg = ops.reg();
        let r = self.regs.value(reg) as u8 ^ ops.m() as u8;
        self.regs.set_value(reg, u16::from(r));
        self.regs.cc = Status::update_nz8(self.regs.cc, r) & !V;
    }

    /// BITA / BITB: AND without writeback.
    pub(crate) fn op_bit(&mut self, ops: &Operands) {
        let r = self.regs.value(ops.reg()) as u8 & ops.m() as u8;
        self.regs.cc = Status::update_nz8(self.regs.cc, r) & !V;
    }

    /// COM core: N, Z from result; V cleared, C forced set.
    fn com8(&mut self, m: u8) -> u8 {
        let r = !m;
        self.regs.cc = (Status::update_nz8(self.regs.cc, r) & !V) | C;
        r
    }

    /// COM: ones complement, register or memory form.
    pub(crate) fn op_com(&mut self, ops: &Operands) -> Option<(u16, u16)> {
        if let Some(reg) = ops.register {
            let m = self.regs.value(reg) as u8;
            let r = self.com8(m);
            self.regs.set_value(reg, u16::from(r));
            None
        } else {
            let r = self.com8(ops.m() as u8);
            Some((ops.ea(), u16::from(r)))
        }
    }

    /// CLR: force zero. N, V, C cleared; Z set. The memory form stores
    /// without reading the old value.
    pub(crate) fn op_clr(&mut self, ops: &Operands) -> Option<(u16, u16)> {
        self.regs.cc = (self.regs.cc & !(N | V | C)) | Z;
        if let Some(reg) = ops.register {
            self.regs.set_value(reg, 0);
            None
        } else {
            Some((ops.ea(), 0))
        }
    }

    /// TST: set N, Z from the operand; V cleared; H, C unchanged.
    pub(crate) fn op_tst(&mut self, ops: &Operands) {
        let value = if let Some(reg) = ops.register {
            self.regs.value(reg) as u8
        } else {
            ops.m() as u8
        };
        self.regs.cc = Status::update_nz8(self.regs.cc, value) & !V;
    }

    /// ANDCC: clear CC bits from the immediate mask.
    pub(crate) fn op_andcc(&mut self, ops: &Operands) {
        self.regs.cc &= ops.m() as u8;
    }

    /// ORCC: set CC bits from the immediate mask.
    pub(crate) fn op_orcc(&mut self, ops: &Operands) {
        self.regs.cc |= ops.m() as u8;
    }
}

#[cfg(test)]
mod tests {
    use emu_core::{Bus, SimpleBus};

    use crate::cpu::{Cpu6809, CpuConfig};
    use crate::flags::{C, F, I, N, V, Z};

    fn run(cpu: &mut Cpu6809, bus: &mut SimpleBus, program: &[u8]) {
        cpu.regs.pc = 0x4000;
        bus.load(0x4000, program);
        let end = 0x4000 + program.len() as u16;
        while cpu.regs.pc != end {
            cpu.step(bus).expect("step");
        }
    }

    #[test]
    fn and_or_eor_update_nz_and_clear_v() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        cpu.regs.a = 0xF0;
        cpu.regs.cc = V;
        run(&mut cpu, &mut bus, &[0x84, 0x0F]); // ANDA #$0F
        assert_eq!(cpu.regs.a, 0x00);
        assert_eq!(cpu.regs.cc & Z, Z);
        assert_eq!(cpu.regs.cc & V, 0);

        cpu.regs.b = 0x0F;
        run(&mut cpu, &mut bus, &[0xCA, 0x80]); // ORB #$80
        assert_eq!(cpu.regs.b, 0x8F);
        assert_eq!(cpu.regs.cc & N, N);

        run(&mut cpu, &mut bus, &[0xC8, 0x8F]); // EORB #$8F
        assert_eq!(cpu.regs.b, 0x00);
        assert_eq!(cpu.regs.cc & Z, Z);
    }

    #[test]
    fn bit_tests_without_store() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        cpu.regs.a = 0x80;
        run(&mut cpu, &mut bus, &[0x85, 0x80]); // BITA #$80
        assert_eq!(cpu.regs.a, 0x80);
        assert_eq!(cpu.regs.cc & N, N);
        assert_eq!(cpu.regs.cc & Z, 0);
    }

    #[test]
    fn com_restores_after_two_applications() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        for value in [0x00u8, 0x55, 0xAA, 0xFF] {
            cpu.regs.a = value;
            run(&mut cpu, &mut bus, &[0x43]); // COMA
            assert_eq!(cpu.regs.a, !value);
            assert_eq!(cpu.regs.cc & C, C);
            run(&mut cpu, &mut bus, &[0x43]);
            assert_eq!(cpu.regs.a, value);
        }
    }

    #[test]
    fn com_memory_writes_back() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        bus.write(0x5000, 0x0F);
        run(&mut cpu, &mut bus, &[0x73, 0x50, 0x00]); // COM $5000
        assert_eq!(bus.peek(0x5000), 0xF0);
        assert_eq!(cpu.regs.cc & N, N);
    }

    #[test]
    fn clr_forces_flags() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        cpu.regs.cc = N | V | C;
        cpu.regs.a = 0x55;
        run(&mut cpu, &mut bus, &[0x4F]); // CLRA
        assert_eq!(cpu.regs.a, 0);
        assert_eq!(cpu.regs.cc & (N | V | C), 0);
        assert_eq!(cpu.regs.cc & Z, Z);

        bus.write(0x5000, 0xAA);
        run(&mut cpu, &mut bus, &[0x7F, 0x50, 0x00]); // CLR $5000
        assert_eq!(bus.peek(0x5000), 0x00);
    }

    #[test]
    fn tst_preserves_carry() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        cpu.regs.cc = C | V;
        cpu.regs.b = 0x80;
        run(&mut cpu, &mut bus, &[0x5D]); // TSTB
        assert_eq!(cpu.regs.cc & N, N);
        assert_eq!(cpu.regs.cc & C, C);
        assert_eq!(cpu.regs.cc & V, 0);
    }

    #[test]
    fn cc_masks() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        cpu.regs.cc = 0x00;
        run(&mut cpu, &mut bus, &[0x1A, 0x50]); // ORCC #$50
        assert_eq!(cpu.regs.cc, F | I);
        run(&mut cpu, &mut bus, &[0x1C, 0xEF]); // ANDCC #$EF
        assert_eq!(cpu.regs.cc, F);
    }
}
