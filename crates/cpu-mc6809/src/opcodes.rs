//! Opcode descriptor tables.
//!
//! Three const-built 256-entry tables cover the primary opcode page and
//! the two prefixed pages (`$10xx`, `$11xx`). Each entry carries the
//! static metadata the dispatcher needs: addressing mode, operand width,
//! whether the handler wants an effective address and/or a memory value,
//! the write-back width, the target register, and the base cycle cost.
//!
//! Cycle costs are the MC6809 data-sheet column for the addressing mode;
//! indexed post-byte surcharges are added by the addressing engine.

use crate::addressing::AddrMode;
use crate::flags::Cond;
use crate::registers::{RegId, Width};

/// Instruction families dispatched by `execute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Abx,
    Adc,
    Add8,
    Add16,
    And,
    AndCc,
    Asr,
    Bit,
    Branch(Cond),
    Clr,
    Cmp8,
    Cmp16,
    Com,
    Daa,
    Dec,
    Eor,
    Exg,
    Inc,
    Jmp,
    Jsr,
    Ld8,
    Ld16,
    Lea,
    Lsl,
    Lsr,
    Mul,
    Neg,
    Nop,
    Or,
    OrCc,
    Psh,
    Pul,
    Rol,
    Ror,
    Rts,
    Sbc,
    Sex,
    St8,
    St16,
    Sub8,
    Sub16,
    Tfr,
    /// Interrupt-machinery opcode: accepted by the decoder, faults as
    /// unimplemented when executed.
    Trap,
    Tst,
}

/// Memory write-back performed by the dispatcher after the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteBack {
    None,
    Byte,
    Word,
}

/// Static metadata for one opcode.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    pub mnemonic: &'static str,
    pub op: Op,
    pub mode: AddrMode,
    pub width: Width,
    pub needs_ea: bool,
    pub reads_m: bool,
    pub writes: WriteBack,
    pub register: Option<RegId>,
    pub cycles: u8,
}

const fn entry(
    mnemonic: &'static str,
    op: Op,
    mode: AddrMode,
    width: Width,
    needs_ea: bool,
    reads_m: bool,
    writes: WriteBack,
    register: Option<RegId>,
    cycles: u8,
) -> Option<Descriptor> {
    Some(Descriptor {
        mnemonic,
        op,
        mode,
        width,
        needs_ea,
        reads_m,
        writes,
        register,
        cycles,
    })
}

/// Inherent instruction with no operand.
const fn inherent(mnemonic: &'static str, op: Op, cycles: u8) -> Option<Descriptor> {
    entry(mnemonic, op, AddrMode::Inherent, Width::Byte, false, false, WriteBack::None, None, cycles)
}

/// Inherent instruction targeting an accumulator (NEGA, CLRB, ...).
const fn inherent_reg(mnemonic: &'static str, op: Op, reg: RegId) -> Option<Descriptor> {
    entry(mnemonic, op, AddrMode::Inherent, Width::Byte, false, false, WriteBack::None, Some(reg), 2)
}

/// Read-modify-write memory instruction (NEG, COM, ..., INC).
const fn rmw(mnemonic: &'static str, op: Op, mode: AddrMode, cycles: u8) -> Option<Descriptor> {
    entry(mnemonic, op, mode, Width::Byte, true, true, WriteBack::Byte, None, cycles)
}

/// 8-bit ALU instruction reading M into an accumulator.
const fn alu8(
    mnemonic: &'static str,
    op: Op,
    reg: RegId,
    mode: AddrMode,
    cycles: u8,
) -> Option<Descriptor> {
    entry(mnemonic, op, mode, Width::Byte, false, true, WriteBack::None, Some(reg), cycles)
}

/// 16-bit ALU instruction reading M into a 16-bit register.
const fn alu16(
    mnemonic: &'static str,
    op: Op,
    reg: RegId,
    mode: AddrMode,
    cycles: u8,
) -> Option<Descriptor> {
    entry(mnemonic, op, mode, Width::Word, false, true, WriteBack::None, Some(reg), cycles)
}

/// 8-bit store: register to memory.
const fn st8(mnemonic: &'static str, reg: RegId, mode: AddrMode, cycles: u8) -> Option<Descriptor> {
    entry(mnemonic, Op::St8, mode, Width::Byte, true, false, WriteBack::Byte, Some(reg), cycles)
}

/// 16-bit store: register to memory.
const fn st16(mnemonic: &'static str, reg: RegId, mode: AddrMode, cycles: u8) -> Option<Descriptor> {
    entry(mnemonic, Op::St16, mode, Width::Word, true, false, WriteBack::Word, Some(reg), cycles)
}

/// Short conditional branch.
const fn branch(mnemonic: &'static str, cond: Cond) -> Option<Descriptor> {
    entry(mnemonic, Op::Branch(cond), AddrMode::Relative, Width::Byte, true, false, WriteBack::None, None, 3)
}

/// Long conditional branch (page-1 prefixed).
const fn lbranch(mnemonic: &'static str, cond: Cond) -> Option<Descriptor> {
    entry(mnemonic, Op::Branch(cond), AddrMode::RelativeWord, Width::Word, true, false, WriteBack::None, None, 5)
}

/// Immediate instruction reading one post-byte (TFR, EXG, PSH, ...).
const fn postbyte(
    mnemonic: &'static str,
    op: Op,
    register: Option<RegId>,
    cycles: u8,
) -> Option<Descriptor> {
    entry(mnemonic, op, AddrMode::Immediate, Width::Byte, false, true, WriteBack::None, register, cycles)
}

/// Unimplemented interrupt-machinery opcode.
const fn trap(mnemonic: &'static str, mode: AddrMode, reads_m: bool, cycles: u8) -> Option<Descriptor> {
    entry(mnemonic, Op::Trap, mode, Width::Byte, false, reads_m, WriteBack::None, None, cycles)
}

const NONE: Option<Descriptor> = None;

const fn build_page0() -> [Option<Descriptor>; 256] {
    use AddrMode::{Direct, Extended, Immediate, Indexed, Inherent, Relative, RelativeWord};
    use RegId::{A, B, Cc, D, S, U, X, Y};

    let mut t = [NONE; 256];

    // Memory read-modify-write group
    t[0x00] = rmw("NEG", Op::Neg, Direct, 6);
    t[0x03] = rmw("COM", Op::Com, Direct, 6);
    t[0x04] = rmw("LSR", Op::Lsr, Direct, 6);
    t[0x06] = rmw("ROR", Op::Ror, Direct, 6);
    t[0x07] = rmw("ASR", Op::Asr, Direct, 6);
    t[0x08] = rmw("LSL", Op::Lsl, Direct, 6);
    t[0x09] = rmw("ROL", Op::Rol, Direct, 6);
    t[0x0A] = rmw("DEC", Op::Dec, Direct, 6);
    t[0x0C] = rmw("INC", Op::Inc, Direct, 6);
    t[0x0D] = entry("TST", Op::Tst, Direct, Width::Byte, false, true, WriteBack::None, None, 6);
    t[0x0E] = entry("JMP", Op::Jmp, Direct, Width::Byte, true, false, WriteBack::None, None, 3);
    // CLR writes without reading the old value first
    t[0x0F] = entry("CLR", Op::Clr, Direct, Width::Byte, true, false, WriteBack::Byte, None, 6);

    t[0x60] = rmw("NEG", Op::Neg, Indexed, 6);
    t[0x63] = rmw("COM", Op::Com, Indexed, 6);
    t[0x64] = rmw("LSR", Op::Lsr, Indexed, 6);
    t[0x66] = rmw("ROR", Op::Ror, Indexed, 6);
    t[0x67] = rmw("ASR", Op::Asr, Indexed, 6);
    t[0x68] = rmw("LSL", Op::Lsl, Indexed, 6);
    t[0x69] = rmw("ROL", Op::Rol, Indexed, 6);
    t[0x6A] = rmw("DEC", Op::Dec, Indexed, 6);
    t[0x6C] = rmw("INC", Op::Inc, Indexed, 6);
    t[0x6D] = entry("TST", Op::Tst, Indexed, Width::Byte, false, true, WriteBack::None, None, 6);
    t[0x6E] = entry("JMP", Op::Jmp, Indexed, Width::Byte, true, false, WriteBack::None, None, 3);
    t[0x6F] = entry("CLR", Op::Clr, Indexed, Width::Byte, true, false, WriteBack::Byte, None, 6);

    t[0x70] = rmw("NEG", Op::Neg, Extended, 7);
    t[0x73] = rmw("COM", Op::Com, Extended, 7);
    t[0x74] = rmw("LSR", Op::Lsr, Extended, 7);
    t[0x76] = rmw("ROR", Op::Ror, Extended, 7);
    t[0x77] = rmw("ASR", Op::Asr, Extended, 7);
    t[0x78] = rmw("LSL", Op::Lsl, Extended, 7);
    t[0x79] = rmw("ROL", Op::Rol, Extended, 7);
    t[0x7A] = rmw("DEC", Op::Dec, Extended, 7);
    t[0x7C] = rmw("INC", Op::Inc, Extended, 7);
    t[0x7D] = entry("TST", Op::Tst, Extended, Width::Byte, false, true, WriteBack::None, None, 7);
    t[0x7E] = entry("JMP", Op::Jmp, Extended, Width::Byte, true, false, WriteBack::None, None, 4);
    t[0x7F] = entry("CLR", Op::Clr, Extended, Width::Byte, true, false, WriteBack::Byte, None, 7);

    // Inherent control / arithmetic
    t[0x12] = inherent("NOP", Op::Nop, 2);
    t[0x13] = trap("SYNC", Inherent, false, 4);
    t[0x16] = entry("LBRA", Op::Branch(Cond::Always), RelativeWord, Width::Word, true, false, WriteBack::None, None, 5);
    t[0x17] = entry("LBSR", Op::Jsr, RelativeWord, Width::Word, true, false, WriteBack::None, None, 9);
    t[0x19] = inherent("DAA", Op::Daa, 2);
    t[0x1A] = postbyte("ORCC", Op::OrCc, Some(Cc), 3);
    t[0x1C] = postbyte("ANDCC", Op::AndCc, Some(Cc), 3);
    t[0x1D] = inherent("SEX", Op::Sex, 2);
    t[0x1E] = postbyte("EXG", Op::Exg, None, 8);
    t[0x1F] = postbyte("TFR", Op::Tfr, None, 6);

    // Short branches
    t[0x20] = branch("BRA", Cond::Always);
    t[0x21] = branch("BRN", Cond::Never);
    t[0x22] = branch("BHI", Cond::Hi);
    t[0x23] = branch("BLS", Cond::Ls);
    t[0x24] = branch("BHS", Cond::Hs);
    t[0x25] = branch("BLO", Cond::Lo);
    t[0x26] = branch("BNE", Cond::Ne);
    t[0x27] = branch("BEQ", Cond::Eq);
    t[0x28] = branch("BVC", Cond::Vc);
    t[0x29] = branch("BVS", Cond::Vs);
    t[0x2A] = branch("BPL", Cond::Pl);
    t[0x2B] = branch("BMI", Cond::Mi);
    t[0x2C] = branch("BGE", Cond::Ge);
    t[0x2D] = branch("BLT", Cond::Lt);
    t[0x2E] = branch("BGT", Cond::Gt);
    t[0x2F] = branch("BLE", Cond::Le);

    // Effective-address loads and stack traffic
    t[0x30] = entry("LEAX", Op::Lea, Indexed, Width::Word, true, false, WriteBack::None, Some(X), 4);
    t[0x31] = entry("LEAY", Op::Lea, Indexed, Width::Word, true, false, WriteBack::None, Some(Y), 4);
    t[0x32] = entry("LEAS", Op::Lea, Indexed, Width::Word, true, false, WriteBack::None, Some(S), 4);
    t[0x33] = entry("LEAU", Op::Lea, Indexed, Width::Word, true, false, WriteBack::None, Some(U), 4);
    t[0x34] = postbyte("PSHS", Op::Psh, Some(S), 5);
    t[0x35] = postbyte("PULS", Op::Pul, Some(S), 5);
    t[0x36] = postbyte("PSHU", Op::Psh, Some(U), 5);
    t[0x37] = postbyte("PULU", Op::Pul, Some(U), 5);
    t[0x39] = inherent("RTS", Op::Rts, 5);
    t[0x3A] = inherent("ABX", Op::Abx, 3);
    t[0x3B] = trap("RTI", Inherent, false, 6);
    t[0x3C] = trap("CWAI", Immediate, true, 20);
    t[0x3D] = inherent("MUL", Op::Mul, 11);
    t[0x3E] = trap("RESET", Inherent, false, 19);
    t[0x3F] = trap("SWI", Inherent, false, 19);

    // Accumulator read-modify-write group
    t[0x40] = inherent_reg("NEGA", Op::Neg, A);
    t[0x43] = inherent_reg("COMA", Op::Com, A);
    t[0x44] = inherent_reg("LSRA", Op::Lsr, A);
    t[0x46] = inherent_reg("RORA", Op::Ror, A);
    t[0x47] = inherent_reg("ASRA", Op::Asr, A);
    t[0x48] = inherent_reg("LSLA", Op::Lsl, A);
    t[0x49] = inherent_reg("ROLA", Op::Rol, A);
    t[0x4A] = inherent_reg("DECA", Op::Dec, A);
    t[0x4C] = inherent_reg("INCA", Op::Inc, A);
    t[0x4D] = inherent_reg("TSTA", Op::Tst, A);
    t[0x4F] = inherent_reg("CLRA", Op::Clr, A);

    t[0x50] = inherent_reg("NEGB", Op::Neg, B);
    t[0x53] = inherent_reg("COMB", Op::Com, B);
    t[0x54] = inherent_reg("LSRB", Op::Lsr, B);
    t[0x56] = inherent_reg("RORB", Op::Ror, B);
    t[0x57] = inherent_reg("ASRB", Op::Asr, B);
    t[0x58] = inherent_reg("LSLB", Op::Lsl, B);
    t[0x59] = inherent_reg("ROLB", Op::Rol, B);
    t[0x5A] = inherent_reg("DECB", Op::Dec, B);
    t[0x5C] = inherent_reg("INCB", Op::Inc, B);
    t[0x5D] = inherent_reg("TSTB", Op::Tst, B);
    t[0x5F] = inherent_reg("CLRB", Op::Clr, B);

    // Accumulator A column
    t[0x80] = alu8("SUBA", Op::Sub8, A, Immediate, 2);
    t[0x81] = alu8("CMPA", Op::Cmp8, A, Immediate, 2);
    t[0x82] = alu8("SBCA", Op::Sbc, A, Immediate, 2);
    t[0x83] = alu16("SUBD", Op::Sub16, D, Immediate, 4);
    t[0x84] = alu8("ANDA", Op::And, A, Immediate, 2);
    t[0x85] = alu8("BITA", Op::Bit, A, Immediate, 2);
    t[0x86] = alu8("LDA", Op::Ld8, A, Immediate, 2);
    t[0x88] = alu8("EORA", Op::Eor, A, Immediate, 2);
    t[0x89] = alu8("ADCA", Op::Adc, A, Immediate, 2);
    t[0x8A] = alu8("ORA", Op::Or, A, Immediate, 2);
    t[0x8B] = alu8("ADDA", Op::Add8, A, Immediate, 2);
    t[0x8C] = alu16("CMPX", Op::Cmp16, X, Immediate, 4);
    t[0x8D] = entry("BSR", Op::Jsr, Relative, Width::Byte, true, false, WriteBack::None, None, 7);
    t[0x8E] = alu16("LDX", Op::Ld16, X, Immediate, 3);

    t[0x90] = alu8("SUBA", Op::Sub8, A, Direct, 4);
    t[0x91] = alu8("CMPA", Op::Cmp8, A, Direct, 4);
    t[0x92] = alu8("SBCA", Op::Sbc, A, Direct, 4);
    t[0x93] = alu16("SUBD", Op::Sub16, D, Direct, 6);
    t[0x94] = alu8("ANDA", Op::And, A, Direct, 4);
    t[0x95] = alu8("BITA", Op::Bit, A, Direct, 4);
    t[0x96] = alu8("LDA", Op::Ld8, A, Direct, 4);
    t[0x97] = st8("STA", A, Direct, 4);
    t[0x98] = alu8("EORA", Op::Eor, A, Direct, 4);
    t[0x99] = alu8("ADCA", Op::Adc, A, Direct, 4);
    t[0x9A] = alu8("ORA", Op::Or, A, Direct, 4);
    t[0x9B] = alu8("ADDA", Op::Add8, A, Direct, 4);
    t[0x9C] = alu16("CMPX", Op::Cmp16, X, Direct, 6);
    t[0x9D] = entry("JSR", Op::Jsr, Direct, Width::Byte, true, false, WriteBack::None, None, 7);
    t[0x9E] = alu16("LDX", Op::Ld16, X, Direct, 5);
    t[0x9F] = st16("STX", X, Direct, 5);

    t[0xA0] = alu8("SUBA", Op::Sub8, A, Indexed, 4);
    t[0xA1] = alu8("CMPA", Op::Cmp8, A, Indexed, 4);
    t[0xA2] = alu8("SBCA", Op::Sbc, A, Indexed, 4);
    t[0xA3] = alu16("SUBD", Op::Sub16, D, Indexed, 6);
    t[0xA4] = alu8("ANDA", Op::And, A, Indexed, 4);
    t[0xA5] = alu8("BITA", Op::Bit, A, Indexed, 4);
    t[0xA6] = alu8("LDA", Op::Ld8, A, Indexed, 4);
    t[0xA7] = st8("STA", A, Indexed, 4);
    t[0xA8] = alu8("EORA", Op::Eor, A, Indexed, 4);
    t[0xA9] = alu8("ADCA", Op::Adc, A, Indexed, 4);
    t[0xAA] = alu8("ORA", Op::Or, A, Indexed, 4);
    t[0xAB] = alu8("ADDA", Op::Add8, A, Indexed, 4);
    t[0xAC] = alu16("CMPX", Op::Cmp16, X, Indexed, 6);
    t[0xAD] = entry("JSR", Op::Jsr, Indexed, Width::Byte, true, false, WriteBack::None, None, 7);
    t[0xAE] = alu16("LDX", Op::Ld16, X, Indexed, 5);
    t[0xAF] = st16("STX", X, Indexed, 5);

    t[0xB0] = alu8("SUBA", Op::Sub8, A, Extended, 5);
    t[0xB1] = alu8("CMPA", Op::Cmp8, A, Extended, 5);
    t[0xB2] = alu8("SBCA", Op::Sbc, A, Extended, 5);
    t[0xB3] = alu16("SUBD", Op::Sub16, D, Extended, 7);
    t[0xB4] = alu8("ANDA", Op::And, A, Extended, 5);
    t[0xB5] = alu8("BITA", Op::Bit, A, Extended, 5);
    t[0xB6] = alu8("LDA", Op::Ld8, A, Extended, 5);
    t[0xB7] = st8("STA", A, Extended, 5);
    t[0xB8] = alu8("EORA", Op::Eor, A, Extended, 5);
    t[0xB9] = alu8("ADCA", Op::Adc, A, Extended, 5);
    t[0xBA] = alu8("ORA", Op::Or, A, Extended, 5);
    t[0xBB] = alu8("ADDA", Op::Add8, A, Extended, 5);
    t[0xBC] = alu16("CMPX", Op::Cmp16, X, Extended, 7);
    t[0xBD] = entry("JSR", Op::Jsr, Extended, Width::Byte, true, false, WriteBack::None, None, 8);
    t[0xBE] = alu16("LDX", Op::Ld16, X, Extended, 6);
    t[0xBF] = st16("STX", X, Extended, 6);

    // Accumulator B column
    t[0xC0] = alu8("SUBB", Op::Sub8, B, Immediate, 2);
    t[0xC1] = alu8("CMPB", Op::Cmp8, B, Immediate, 2);
    t[0xC2] = alu8("SBCB", Op::Sbc, B, Immediate, 2);
    t[0xC3] = alu16("ADDD", Op::Add16, D, Immediate, 4);
    t[0xC4] = alu8("ANDB", Op::And, B, Immediate, 2);
    t[0xC5] = alu8("BITB", Op::Bit, B, Immediate, 2);
    t[0xC6] = alu8("LDB", Op::Ld8, B, Immediate, 2);
    t[0xC8] = alu8("EORB", Op::Eor, B, Immediate, 2);
    t[0xC9] = alu8("ADCB", Op::Adc, B, Immediate, 2);
    t[0xCA] = alu8("ORB", Op::Or, B, Immediate, 2);
    t[0xCB] = alu8("ADDB", Op::Add8, B, Immediate, 2);
    t[0xCC] = alu16("LDD", Op::Ld16, D, Immediate, 3);
    t[0xCE] = alu16("LDU", Op::Ld16, U, Immediate, 3);

    t[0xD0] = alu8("SUBB", Op::Sub8, B, Direct, 4);
    t[0xD1] = alu8("CMPB", Op::Cmp8, B, Direct, 4);
    t[0xD2] = alu8("SBCB", Op::Sbc, B, Direct, 4);
    t[0xD3] = alu16("ADDD", Op::Add16, D, Direct, 6);
    t[0xD4] = alu8("ANDB", Op::And, B, Direct, 4);
    t[0xD5] = alu8("BITB", Op::Bit, B, Direct, 4);
    t[0xD6] = alu8("LDB", Op::Ld8, B, Direct, 4);
    t[0xD7] = st8("STB", B, Direct, 4);
    t[0xD8] = alu8("EORB", Op::Eor, B, Direct, 4);
    t[0xD9] = alu8("ADCB", Op::Adc, B, Direct, 4);
    t[0xDA] = alu8("ORB", Op::Or, B, Direct, 4);
    t[0xDB] = alu8("ADDB", Op::Add8, B, Direct, 4);
    t[0xDC] = alu16("LDD", Op::Ld16, D, Direct, 5);
    t[0xDD] = st16("STD", D, Direct, 5);
    t[0xDE] = alu16("LDU", Op::Ld16, U, Direct, 5);
    t[0xDF] = st16("STU", U, Direct, 5);

    t[0xE0] = alu8("SUBB", Op::Sub8, B, Indexed, 4);
    t[0xE1] = alu8("CMPB", Op::Cmp8, B, Indexed, 4);
    t[0xE2] = alu8("SBCB", Op::Sbc, B, Indexed, 4);
    t[0xE3] = alu16("ADDD", Op::Add16, D, Indexed, 6);
    t[0xE4] = alu8("ANDB", Op::And, B, Indexed, 4);
    t[0xE5] = alu8("BITB", Op::Bit, B, Indexed, 4);
    t[0xE6] = alu8("LDB", Op::Ld8, B, Indexed, 4);
    t[0xE7] = st8("STB", B, Indexed, 4);
    t[0xE8] = alu8("EORB", Op::Eor, B, Indexed, 4);
    t[0xE9] = alu8("ADCB", Op::Adc, B, Indexed, 4);
    t[0xEA] = alu8("ORB", Op::Or, B, Indexed, 4);
    t[0xEB] = alu8("ADDB", Op::Add8, B, Indexed, 4);
    t[0xEC] = alu16("LDD", Op::Ld16, D, Indexed, 5);
    t[0xED] = st16("STD", D, Indexed, 5);
    t[0xEE] = alu16("LDU", Op::Ld16, U, Indexed, 5);
    t[0xEF] = st16("STU", U, Indexed, 5);

    t[0xF0] = alu8("SUBB", Op::Sub8, B, Extended, 5);
    t[0xF1] = alu8("CMPB", Op::Cmp8, B, Extended, 5);
    t[0xF2] = alu8("SBCB", Op::Sbc, B, Extended, 5);
    t[0xF3] = alu16("ADDD", Op::Add16, D, Extended, 7);
    t[0xF4] = alu8("ANDB", Op::And, B, Extended, 5);
    t[0xF5] = alu8("BITB", Op::Bit, B, Extended, 5);
    t[0xF6] = alu8("LDB", Op::Ld8, B, Extended, 5);
    t[0xF7] = st8("STB", B, Extended, 5);
    t[0xF8] = alu8("EORB", Op::Eor, B, Extended, 5);
    t[0xF9] = alu8("ADCB", Op::Adc, B, Extended, 5);
    t[0xFA] = alu8("ORB", Op::Or, B, Extended, 5);
    t[0xFB] = alu8("ADDB", Op::Add8, B, Extended, 5);
    t[0xFC] = alu16("LDD", Op::Ld16, D, Extended, 6);
    t[0xFD] = st16("STD", D, Extended, 6);
    t[0xFE] = alu16("LDU", Op::Ld16, U, Extended, 6);
    t[0xFF] = st16("STU", U, Extended, 6);

    t
}

const fn build_page1() -> [Option<Descriptor>; 256] {
    use AddrMode::{Direct, Extended, Immediate, Indexed, Inherent};
    use RegId::{D, S, Y};

    let mut t = [NONE; 256];

    t[0x21] = lbranch("LBRN", Cond::Never);
    t[0x22] = lbranch("LBHI", Cond::Hi);
    t[0x23] = lbranch("LBLS", Cond::Ls);
    t[0x24] = lbranch("LBHS", Cond::Hs);
    t[0x25] = lbranch("LBLO", Cond::Lo);
    t[0x26] = lbranch("LBNE", Cond::Ne);
    t[0x27] = lbranch("LBEQ", Cond::Eq);
    t[0x28] = lbranch("LBVC", Cond::Vc);
    t[0x29] = lbranch("LBVS", Cond::Vs);
    t[0x2A] = lbranch("LBPL", Cond::Pl);
    t[0x2B] = lbranch("LBMI", Cond::Mi);
    t[0x2C] = lbranch("LBGE", Cond::Ge);
    t[0x2D] = lbranch("LBLT", Cond::Lt);
    t[0x2E] = lbranch("LBGT", Cond::Gt);
    t[0x2F] = lbranch("LBLE", Cond::Le);

    t[0x3F] = trap("SWI2", Inherent, false, 20);

    t[0x83] = alu16("CMPD", Op::Cmp16, D, Immediate, 5);
    t[0x93] = alu16("CMPD", Op::Cmp16, D, Direct, 7);
    t[0xA3] = alu16("CMPD", Op::Cmp16, D, Indexed, 7);
    t[0xB3] = alu16("CMPD", Op::Cmp16, D, Extended, 8);

    t[0x8C] = alu16("CMPY", Op::Cmp16, Y, Immediate, 5);
    t[0x9C] = alu16("CMPY", Op::Cmp16, Y, Direct, 7);
    t[0xAC] = alu16("CMPY", Op::Cmp16, Y, Indexed, 7);
    t[0xBC] = alu16("CMPY", Op::Cmp16, Y, Extended, 8);

    t[0x8E] = alu16("LDY", Op::Ld16, Y, Immediate, 4);
    t[0x9E] = alu16("LDY", Op::Ld16, Y, Direct, 6);
    t[0xAE] = alu16("LDY", Op::Ld16, Y, Indexed, 6);
    t[0xBE] = alu16("LDY", Op::Ld16, Y, Extended, 7);

    t[0x9F] = st16("STY", Y, Direct, 6);
    t[0xAF] = st16("STY", Y, Indexed, 6);
    t[0xBF] = st16("STY", Y, Extended, 7);

    t[0xCE] = alu16("LDS", Op::Ld16, S, Immediate, 4);
    t[0xDE] = alu16("LDS", Op::Ld16, S, Direct, 6);
    t[0xEE] = alu16("LDS", Op::Ld16, S, Indexed, 6);
    t[0xFE] = alu16("LDS", Op::Ld16, S, Extended, 7);

    t[0xDF] = st16("STS", S, Direct, 6);
    t[0xEF] = st16("STS", S, Indexed, 6);
    t[0xFF] = st16("STS", S, Extended, 7);

    t
}

const fn build_page2() -> [Option<Descriptor>; 256] {
    use AddrMode::{Direct, Extended, Immediate, Indexed, Inherent};
    use RegId::{S, U};

    let mut t = [NONE; 256];

    t[0x3F] = trap("SWI3", Inherent, false, 20);

    t[0x83] = alu16("CMPU", Op::Cmp16, U, Immediate, 5);
    t[0x93] = alu16("CMPU", Op::Cmp16, U, Direct, 7);
    t[0xA3] = alu16("CMPU", Op::Cmp16, U, Indexed, 7);
    t[0xB3] = alu16("CMPU", Op::Cmp16, U, Extended, 8);

    t[0x8C] = alu16("CMPS", Op::Cmp16, S, Immediate, 5);
    t[0x9C] = alu16("CMPS", Op::Cmp16, S, Direct, 7);
    t[0xAC] = alu16("CMPS", Op::Cmp16, S, Indexed, 7);
    t[0xBC] = alu16("CMPS", Op::Cmp16, S, Extended, 8);

    t
}

/// Primary opcode page.
pub static PAGE0: [Option<Descriptor>; 256] = build_page0();
/// Page-1 (`$10` prefix) opcodes.
pub static PAGE1: [Option<Descriptor>; 256] = build_page1();
/// Page-2 (`$11` prefix) opcodes.
pub static PAGE2: [Option<Descriptor>; 256] = build_page2();

/// Look up the descriptor for a (possibly prefixed) opcode.
#[must_use]
pub fn lookup(opcode: u16) -> Option<&'static Descriptor> {
    let table = match opcode >> 8 {
        0x00 => &PAGE0,
        0x10 => &PAGE1,
        0x11 => &PAGE2,
        _ => return None,
    };
    table[usize::from(opcode as u8)].as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page0_population() {
        let count = PAGE0.iter().filter(|d| d.is_some()).count();
        // 6809 primary page: 224 defined opcodes minus the two page
        // prefixes, which are resolved during fetch rather than decoded.
        assert_eq!(count, 222);
        assert!(lookup(0x10).is_none());
        assert!(lookup(0x11).is_none());
    }

    #[test]
    fn writing_descriptors_are_consistent() {
        for page in [&PAGE0, &PAGE1, &PAGE2] {
            for desc in page.iter().flatten() {
                if desc.writes != WriteBack::None {
                    assert!(desc.needs_ea, "{} writes without EA", desc.mnemonic);
                }
                if desc.mode == AddrMode::Inherent {
                    assert!(!desc.needs_ea && !desc.reads_m, "{}", desc.mnemonic);
                }
            }
        }
    }

    #[test]
    fn prefixed_lookup() {
        let lbeq = lookup(0x1027).expect("LBEQ");
        assert_eq!(lbeq.mnemonic, "LBEQ");
        assert_eq!(lbeq.op, Op::Branch(Cond::Eq));

        let cmps = lookup(0x118C).expect("CMPS");
        assert_eq!(cmps.mnemonic, "CMPS");
        assert_eq!(cmps.register, Some(RegId::S));

        assert!(lookup(0x1000).is_none());
        assert!(lookup(0x2000).is_none());
    }

    #[test]
    fn representative_entries() {
        let lda = lookup(0x86).expect("LDA imm");
        assert_eq!(lda.cycles, 2);
        assert!(lda.reads_m && !lda.needs_ea);

        let sta = lookup(0xB7).expect("STA ext");
        assert_eq!(sta.writes, WriteBack::Byte);
        assert_eq!(sta.cycles, 5);

        let std = lookup(0xED).expect("STD idx");
        assert_eq!(std.writes, WriteBack::Word);
        assert_eq!(std.register, Some(RegId::D));

        let neg = lookup(0x00).expect("NEG dir");
        assert!(neg.needs_ea && neg.reads_m);
        assert_eq!(neg.writes, WriteBack::Byte);

        let clr = lookup(0x6F).expect("CLR idx");
        assert!(!clr.reads_m, "CLR does not read the old value");

        let swi = lookup(0x3F).expect("SWI");
        assert_eq!(swi.op, Op::Trap);
    }
}
