//! Arithmetic instructions: ADD, ADC, SUB, SBC, CMP, NEG, INC, DEC,
//! MUL, DAA, SEX, ABX.

use crate::cpu::{Cpu6809, Operands};
use crate::flags::{Status, C, H, V, Z};

impl Cpu6809 {
    /// ADDA / ADDB. Flags HNZVC.
    pub(crate) fn op_add8(&mut self, ops: &Operands) {
        let reg = ops.reg();
        let a = self.regs.value(reg) as u8;
        let m = ops.m() as u8;
        let r = u16::from(a) + u16::from(m);
        self.regs.set_value(reg, r & 0xFF);
        self.regs.cc = Status::add8(self.regs.cc, a, m, r);
    }

    /// ADDD. Flags NZVC; H unaffected.
    pub(crate) fn op_add16(&mut self, ops: &Operands) {
        let reg = ops.reg();
        let a = self.regs.value(reg);
        let m = ops.m();
        let r = u32::from(a) + u32::from(m);
        self.regs.set_value(reg, r as u16);
        self.regs.cc = Status::add16(self.regs.cc, a, m, r);
    }

    /// ADCA / ADCB: add with carry-in. Flags HNZVC.
    pub(crate) fn op_adc(&mut self, ops: &Operands) {
        let reg = ops.reg();
        let a = self.regs.value(reg) as u8;
        let m = ops.m() as u8;
        let carry = u16::from(self.regs.cc & C);
        let r = u16::from(a) + u16::from(m) + carry;
        self.regs.set_value(reg, r & 0xFF);
        self.regs.cc = Status::add8(self.regs.cc, a, m, r);
    }

    /// SUBA / SUBB. Flags NZVC; H undefined (left unchanged).
    pub(crate) fn op_sub8(&mut self, ops: &Operands) {
        let reg = ops.reg();
        let a = self.regs.value(reg) as u8;
        let m = ops.m() as u8;
        let r = u16::from(a).wrapping_sub(u16::from(m));
        self.regs.set_value(reg, r & 0xFF);
        self.regs.cc = Status::sub8(self.regs.cc, a, m, r);
    }

    /// SUBD. Flags NZVC.
    pub(crate) fn op_sub16(&mut self, ops: &Operands) {
        let reg = ops.reg();
        let a = self.regs.value(reg);
        let m = ops.m();
        let r = u32::from(a).wrapping_sub(u32::from(m));
        self.regs.set_value(reg, r as u16);
        self.regs.cc = Status::sub16(self.regs.cc, a, m, r);
    }

    /// SBCA / SBCB: subtract with borrow-in. Flags NZVC; H unchanged.
    pub(crate) fn op_sbc(&mut self, ops: &Operands) {
        let reg = ops.reg();
        let a = self.regs.value(reg) as u8;
        let m = ops.m() as u8;
        let borrow = u16::from(self.regs.cc & C);
        let r = u16::from(a).wrapping_sub(u16::from(m)).wrapping_sub(borrow);
        self.regs.set_value(reg, r & 0xFF);
        self.regs.cc = Status::sub8(self.regs.cc, a, m, r);
    }

    /// CMPA / CMPB: SUB without writeback.
    pub(crate) fn op_cmp8(&mut self, ops: &Operands) {
        let a = self.regs.value(ops.reg()) as u8;
        let m = ops.m() as u8;
        let r = u16::from(a).wrapping_sub(u16::from(m));
        self.regs.cc = Status::sub8(self.regs.cc, a, m, r);
    }

    /// CMPD / CMPX / CMPY / CMPU / CMPS.
    pub(crate) fn op_cmp16(&mut self, ops: &Operands) {
        let a = self.regs.value(ops.reg());
        let m = ops.m();
        let r = u32::from(a).wrapping_sub(u32::from(m));
        self.regs.cc = Status::sub16(self.regs.cc, a, m, r);
    }

    /// NEG core: computed as `0 - m`, so V is set exactly for
    /// `m == 0x80` and C is clear exactly for `m == 0`. H undefined
    /// (left unchanged).
    fn neg8(&mut self, m: u8) -> u16 {
        let r = 0u16.wrapping_sub(u16::from(m));
        self.regs.cc = Status::sub8(self.regs.cc, 0, m, r);
        r & 0xFF
    }

    /// NEG: twos complement, register or memory form.
    pub(crate) fn op_neg(&mut self, ops: &Operands) -> Option<(u16, u16)> {
        if let Some(reg) = ops.register {
            let m = self.regs.value(reg) as u8;
            let r = self.neg8(m);
            self.regs.set_value(reg, r);
            None
        } else {
            let r = self.neg8(ops.m() as u8);
            Some((ops.ea(), r))
        }
    }

    /// INC: add one; C untouched, V set exactly on 0x7F -> 0x80.
    pub(crate) fn op_inc(&mut self, ops: &Operands) -> Option<(u16, u16)> {
        if let Some(reg) = ops.register {
            let r = (self.regs.value(reg) as u8).wrapping_add(1);
            self.regs.cc = Status::inc8(self.regs.cc, r);
            self.regs.set_value(reg, u16::from(r));
            None
        } else {
            let r = (ops.m() as u8).wrapping_add(1);
            self.regs.cc = Status::inc8(self.regs.cc, r);
            Some((ops.ea(), u16::from(r)))
        }
    }

    /// DEC: subtract one; C untouched, V set exactly on 0x80 -> 0x7F.
    pub(crate) fn op_dec(&mut self, ops: &Operands) -> Option<(u16, u16)> {
        if let Some(reg) = ops.register {
            let r = (self.regs.value(reg) as u8).wrapping_sub(1);
            self.regs.cc = Status::dec8(self.regs.cc, r);
            self.regs.set_value(reg, u16::from(r));
            None
        } else {
            let r = (ops.m() as u8).wrapping_sub(1);
            self.regs.cc = Status::dec8(self.regs.cc, r);
            Some((ops.ea(), u16::from(r)))
        }
    }

    /// MUL: D = A * B unsigned. Z from D, C = bit 7 of D.
    pub(crate) fn op_mul(&mut self) {
        let r = u16::from(self.regs.a) * u16::from(self.regs.b);
        self.regs.set_d(r);
        let cc = Status::set_if(self.regs.cc, Z, r == 0);
        self.regs.cc = Status::set_if(cc, C, r & 0x80 != 0);
    }

    /// DAA: decimal adjust A after a BCD addition.
    ///
    /// C is never cleared; it is set when the adjustment itself carries.
    /// V is cleared.
    pub(crate) fn op_daa(&mut self) {
        let a = self.regs.a;
        let lsn = a & 0x0F;
        let msn = a & 0xF0;

        let mut correction = 0u8;
        if lsn > 0x09 || self.regs.cc & H != 0 {
            correction |= 0x06;
        }
        if msn > 0x90 || self.regs.cc & C != 0 || (msn > 0x80 && lsn > 0x09) {
            correction |= 0x60;
        }

        let r = u16::from(a) + u16::from(correction);
        self.regs.a = r as u8;

        let mut cc = Status::update_nz8(self.regs.cc, r as u8);
        cc &= !V;
        if r > 0xFF {
            cc |= C;
        }
        self.regs.cc = cc;
    }

    /// SEX: sign-extend B into D. N, Z from D; V cleared.
    pub(crate) fn op_sex(&mut self) {
        self.regs.a = if self.regs.b & 0x80 != 0 { 0xFF } else { 0x00 };
        let cc = Status::update_nz16(self.regs.cc, self.regs.d());
        self.regs.cc = cc & !V;
    }

    /// ABX: X += B unsigned. No flags.
    pub(crate) fn op_abx(&mut self) {
        self.regs.x = self.regs.x.wrapping_add(u16::from(self.regs.b));
    }
}

#[cfg(test)]
mod tests {
    use emu_core::SimpleBus;

    use crate::cpu::{Cpu6809, CpuConfig};
    use crate::flags::{C, H, N, V, Z};

    fn run(cpu: &mut Cpu6809, bus: &mut SimpleBus, program: &[u8]) {
        cpu.regs.pc = 0x4000;
        bus.load(0x4000, program);
        let end = 0x4000 + program.len() as u16;
        while cpu.regs.pc != end {
            cpu.step(bus).expect("step");
        }
    }

    #[test]
    fn adda_half_carry() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        cpu.regs.a = 0x0F;
        run(&mut cpu, &mut bus, &[0x8B, 0x01]); // ADDA #1
        assert_eq!(cpu.regs.a, 0x10);
        assert_eq!(cpu.regs.cc & H, H);
        assert_eq!(cpu.regs.cc & C, 0);
    }

    #[test]
    fn adc_includes_carry() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        cpu.regs.a = 0x10;
        cpu.regs.cc = C;
        run(&mut cpu, &mut bus, &[0x89, 0x01]); // ADCA #1
        assert_eq!(cpu.regs.a, 0x12);
        assert_eq!(cpu.regs.cc & C, 0);
    }

    #[test]
    fn sbc_includes_borrow() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        cpu.regs.b = 0x10;
        cpu.regs.cc = C;
        run(&mut cpu, &mut bus, &[0xC2, 0x01]); // SBCB #1
        assert_eq!(cpu.regs.b, 0x0E);
        assert_eq!(cpu.regs.cc & C, 0);
    }

    #[test]
    fn subd_word_arithmetic() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        cpu.regs.set_d(0x1000);
        run(&mut cpu, &mut bus, &[0x83, 0x20, 0x00]); // SUBD #$2000
        assert_eq!(cpu.regs.d(), 0xF000);
        assert_eq!(cpu.regs.cc & C, C);
        assert_eq!(cpu.regs.cc & N, N);
    }

    #[test]
    fn cmp_leaves_register_alone() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        cpu.regs.a = 0x42;
        run(&mut cpu, &mut bus, &[0x81, 0x42]); // CMPA #$42
        assert_eq!(cpu.regs.a, 0x42);
        assert_eq!(cpu.regs.cc & Z, Z);

        cpu.regs.x = 0x1234;
        run(&mut cpu, &mut bus, &[0x8C, 0x12, 0x34]); // CMPX #$1234
        assert_eq!(cpu.regs.x, 0x1234);
        assert_eq!(cpu.regs.cc & Z, Z);
    }

    #[test]
    fn neg_edge_cases() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();

        cpu.regs.a = 0x80;
        run(&mut cpu, &mut bus, &[0x40]); // NEGA
        assert_eq!(cpu.regs.a, 0x80);
        assert_eq!(cpu.regs.cc & V, V);
        assert_eq!(cpu.regs.cc & C, C);

        cpu.regs.a = 0x00;
        run(&mut cpu, &mut bus, &[0x40]);
        assert_eq!(cpu.regs.a, 0x00);
        assert_eq!(cpu.regs.cc & C, 0);
        assert_eq!(cpu.regs.cc & Z, Z);
    }

    #[test]
    fn inc_dec_do_not_touch_carry() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        cpu.regs.cc = C;
        cpu.regs.a = 0x7F;
        run(&mut cpu, &mut bus, &[0x4C]); // INCA
        assert_eq!(cpu.regs.a, 0x80);
        assert_eq!(cpu.regs.cc & V, V);
        assert_eq!(cpu.regs.cc & C, C);

        cpu.regs.b = 0x80;
        run(&mut cpu, &mut bus, &[0x5A]); // DECB
        assert_eq!(cpu.regs.b, 0x7F);
        assert_eq!(cpu.regs.cc & V, V);
        assert_eq!(cpu.regs.cc & C, C);
    }

    #[test]
    fn mul_sets_z_and_c() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        cpu.regs.a = 0x0C;
        cpu.regs.b = 0x0B;
        run(&mut cpu, &mut bus, &[0x3D]); // MUL
        assert_eq!(cpu.regs.d(), 0x0084);
        assert_eq!(cpu.regs.cc & C, C); // bit 7 of the low byte
        assert_eq!(cpu.regs.cc & Z, 0);

        cpu.regs.a = 0x00;
        cpu.regs.b = 0x55;
        run(&mut cpu, &mut bus, &[0x3D]);
        assert_eq!(cpu.regs.d(), 0x0000);
        assert_eq!(cpu.regs.cc & Z, Z);
    }

    #[test]
    fn daa_adjusts_bcd_sum() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        // 0x19 + 0x28 = 0x41 binary; DAA corrects to 0x47
        cpu.regs.a = 0x19;
        run(&mut cpu, &mut bus, &[0x8B, 0x28, 0x19]); // ADDA #$28; DAA
        assert_eq!(cpu.regs.a, 0x47);
        assert_eq!(cpu.regs.cc & C, 0);

        // 0x90 + 0x90 = 0x120: carry out, DAA keeps C set
        cpu.regs.a = 0x90;
        run(&mut cpu, &mut bus, &[0x8B, 0x90, 0x19]); // ADDA #$90; DAA
        assert_eq!(cpu.regs.a, 0x80);
        assert_eq!(cpu.regs.cc & C, C);
    }

    #[test]
    fn sex_extends_sign() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        cpu.regs.a = 0x55;
        cpu.regs.b = 0x7F;
        run(&mut cpu, &mut bus, &[0x1D]); // SEX
        assert_eq!(cpu.regs.d(), 0x007F);
        assert_eq!(cpu.regs.cc & N, 0);

        cpu.regs.b = 0x80;
        run(&mut cpu, &mut bus, &[0x1D]);
        assert_eq!(cpu.regs.d(), 0xFF80);
        assert_eq!(cpu.regs.cc & N, N);
    }

    #[test]
    fn abx_is_unsigned_and_flagless() {
        let mut cpu = Cpu6809::new(CpuConfig::default());
        let mut bus = SimpleBus::new();
        cpu.regs.x = 0xFFF0;
        cpu.regs.b = 0xFF; // unsigned 255, not -1
        cpu.regs.cc = 0;
        run(&mut cpu, &mut bus, &[0x3A]); // ABX
        assert_eq!(cpu.regs.x, 0x00EF);
        assert_eq!(cpu.regs.cc, 0);
    }
}
