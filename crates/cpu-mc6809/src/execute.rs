//! Opcode dispatch into the instruction-family handlers.

use emu_core::Bus;

use crate::cpu::{Cpu6809, Operands};
use crate::error::CpuError;
use crate::opcodes::{Descriptor, Op};

impl Cpu6809 {
    /// Run the handler for a decoded instruction.
    ///
    /// Memory-writing instructions return `(ea, value)`; the step
    /// function performs the store at the descriptor's width.
    pub(crate) fn execute<B: Bus>(
        &mut self,
        bus: &mut B,
        desc: &Descriptor,
        ops: &Operands,
    ) -> Result<Option<(u16, u16)>, CpuError> {
        match desc.op {
            // Arithmetic
            Op::Add8 => self.op_add8(ops),
            Op::Add16 => self.op_add16(ops),
            Op::Adc => self.op_adc(ops),
            Op::Sub8 => self.op_sub8(ops),
            Op::Sub16 => self.op_sub16(ops),
            Op::Sbc => self.op_sbc(ops),
            Op::Cmp8 => self.op_cmp8(ops),
            Op::Cmp16 => self.op_cmp16(ops),
            Op::Neg => return Ok(self.op_neg(ops)),
            Op::Inc => return Ok(self.op_inc(ops)),
            Op::Dec => return Ok(self.op_dec(ops)),
            Op::Mul => self.op_mul(),
            Op::Daa => self.op_daa(),
            Op::Sex => self.op_sex(),
            Op::Abx => self.op_abx(),

            // Logic and tests
            Op::And => self.op_and(ops),
            Op::Or => self.op_or(ops),
            Op::Eor => self.op_eor(ops),
            Op::Bit => self.op_bit(ops),
            Op::Com => return Ok(self.op_com(ops)),
            Op::Clr => return Ok(self.op_clr(ops)),
            Op::Tst => self.op_tst(ops),
            Op::AndCc => self.op_andcc(ops),
            Op::OrCc => self.op_orcc(ops),

            // Shifts and rotates
            Op::Lsl => return Ok(self.op_lsl(ops)),
            Op::Lsr => return Ok(self.op_lsr(ops)),
            Op::Asr => return Ok(self.op_asr(ops)),
            Op::Rol => return Ok(self.op_rol(ops)),
            Op::Ror => return Ok(self.op_ror(ops)),

            // Flow control
            Op::Branch(cond) => self.op_branch(cond, ops),
            Op::Jmp => self.op_jmp(ops),
            Op::Jsr => self.op_jsr(bus, ops),
            Op::Rts => self.op_rts(bus),
            Op::Nop => {}

            // Loads, stores, register traffic
            Op::Ld8 => self.op_ld8(ops),
            Op::Ld16 => self.op_ld16(ops),
            Op::St8 => return Ok(Some(self.op_st8(ops))),
            Op::St16 => return Ok(Some(self.op_st16(ops))),
            Op::Lea => self.op_lea(ops),
            Op::Tfr => self.op_tfr(ops),
            Op::Exg => self.op_exg(ops),
            Op::Psh => self.op_psh(bus, ops),
            Op::Pul => self.op_pul(bus, ops),

            Op::Trap => {
                return Err(CpuError::Unimplemented {
                    address: self.last_op_address(),
                    opcode: ops.opcode,
                    mnemonic: desc.mnemonic,
                });
            }
        }
        Ok(None)
    }
}
