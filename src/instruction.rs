use log::trace;

use crate::error::Chip8Error;
use crate::opcode::Opcode;
use crate::operations;
use crate::state::State;

/// A fully decoded opcode, one variant per operation.
///
/// Decoding is total: anything that matches no known pattern becomes
/// `Unknown`, which executes as a plain program counter advance. ROMs embed
/// sprite and table data in executable regions, so an unrecognized word must
/// never be treated as a fault.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0; clear the frame buffer
    Cls,
    /// 00EE; return from a subroutine
    Ret,
    /// 1nnn; jump to nnn
    Jump(u16),
    /// 2nnn; call the subroutine at nnn
    Call(u16),
    /// 3xnn; skip the next instruction if Vx == nn
    SkipEqImm(u8, u8),
    /// 4xnn; skip the next instruction if Vx != nn
    SkipNeImm(u8, u8),
    /// 5xy0; skip the next instruction if Vx == Vy
    SkipEqReg(u8, u8),
    /// 6xnn; Vx = nn
    LoadImm(u8, u8),
    /// 7xnn; Vx += nn without touching VF
    AddImm(u8, u8),
    /// 8xy0; Vx = Vy
    Move(u8, u8),
    /// 8xy1; Vx |= Vy
    Or(u8, u8),
    /// 8xy2; Vx &= Vy
    And(u8, u8),
    /// 8xy3; Vx ^= Vy
    Xor(u8, u8),
    /// 8xy4; Vx += Vy with VF = carry
    Add(u8, u8),
    /// 8xy5; Vx -= Vy with VF = not borrow
    Sub(u8, u8),
    /// 8xy6; Vx >>= 1 with VF = the bit shifted out
    ShiftRight(u8),
    /// 8xy7; Vx = Vy - Vx with VF = not borrow
    SubNeg(u8, u8),
    /// 8xyE; Vx <<= 1 with VF = the bit shifted out
    ShiftLeft(u8),
    /// 9xy0; skip the next instruction if Vx != Vy
    SkipNeReg(u8, u8),
    /// Annn; I = nnn
    LoadIndex(u16),
    /// Bnnn; jump to nnn + V0
    JumpOffset(u16),
    /// Cxnn; Vx = random byte & nn
    Random(u8, u8),
    /// Dxyn; XOR the n-row sprite at I onto the frame buffer at (Vx, Vy)
    Draw(u8, u8, u8),
    /// Ex9E; skip the next instruction if key Vx is pressed
    SkipPressed(u8),
    /// ExA1; skip the next instruction if key Vx is not pressed
    SkipReleased(u8),
    /// Fx07; Vx = delay timer
    ReadDelay(u8),
    /// Fx0A; halt until a key is pressed, then Vx = that key
    WaitKey(u8),
    /// Fx15; delay timer = Vx
    SetDelay(u8),
    /// Fx18; sound timer = Vx
    SetSound(u8),
    /// Fx1E; I += Vx
    AddIndex(u8),
    /// Fx29; I = the font glyph address for digit Vx
    LoadGlyph(u8),
    /// Fx33; memory[I..I+3] = the decimal digits of Vx
    Bcd(u8),
    /// Fx55; memory[I..=I+x] = V0..=Vx
    StoreRegisters(u8),
    /// Fx65; V0..=Vx = memory[I..=I+x]
    LoadRegisters(u8),
    /// anything else; executes as a no-op
    Unknown(u16),
}

impl Instruction {
    /// Selects the Instruction for a given Opcode
    pub fn decode(op: Opcode) -> Self {
        match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Cls,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Ret,
            (0x1, ..) => Instruction::Jump(op.nnn()),
            (0x2, ..) => Instruction::Call(op.nnn()),
            (0x3, ..) => Instruction::SkipEqImm(op.x(), op.nn()),
            (0x4, ..) => Instruction::SkipNeImm(op.x(), op.nn()),
            (0x5, .., 0x0) => Instruction::SkipEqReg(op.x(), op.y()),
            (0x6, ..) => Instruction::LoadImm(op.x(), op.nn()),
            (0x7, ..) => Instruction::AddImm(op.x(), op.nn()),
            (0x8, .., 0x0) => Instruction::Move(op.x(), op.y()),
            (0x8, .., 0x1) => Instruction::Or(op.x(), op.y()),
            (0x8, .., 0x2) => Instruction::And(op.x(), op.y()),
            (0x8, .., 0x3) => Instruction::Xor(op.x(), op.y()),
            (0x8, .., 0x4) => Instruction::Add(op.x(), op.y()),
            (0x8, .., 0x5) => Instruction::Sub(op.x(), op.y()),
            (0x8, .., 0x6) => Instruction::ShiftRight(op.x()),
            (0x8, .., 0x7) => Instruction::SubNeg(op.x(), op.y()),
            (0x8, .., 0xE) => Instruction::ShiftLeft(op.x()),
            (0x9, .., 0x0) => Instruction::SkipNeReg(op.x(), op.y()),
            (0xA, ..) => Instruction::LoadIndex(op.nnn()),
            (0xB, ..) => Instruction::JumpOffset(op.nnn()),
            (0xC, ..) => Instruction::Random(op.x(), op.nn()),
            (0xD, ..) => Instruction::Draw(op.x(), op.y(), op.n()),
            (0xE, _, 0x9, 0xE) => Instruction::SkipPressed(op.x()),
            (0xE, _, 0xA, 0x1) => Instruction::SkipReleased(op.x()),
            (0xF, _, 0x0, 0x7) => Instruction::ReadDelay(op.x()),
            (0xF, _, 0x0, 0xA) => Instruction::WaitKey(op.x()),
            (0xF, _, 0x1, 0x5) => Instruction::SetDelay(op.x()),
            (0xF, _, 0x1, 0x8) => Instruction::SetSound(op.x()),
            (0xF, _, 0x1, 0xE) => Instruction::AddIndex(op.x()),
            (0xF, _, 0x2, 0x9) => Instruction::LoadGlyph(op.x()),
            (0xF, _, 0x3, 0x3) => Instruction::Bcd(op.x()),
            (0xF, _, 0x5, 0x5) => Instruction::StoreRegisters(op.x()),
            (0xF, _, 0x6, 0x5) => Instruction::LoadRegisters(op.x()),
            _ => Instruction::Unknown(op.0),
        }
    }

    /// Applies the instruction to a state, producing the next state.
    ///
    /// The program counter is advanced past the instruction before the
    /// operation runs; jumps, calls, returns, skips, and an unsatisfied key
    /// wait then override it. A fatal fault leaves the input state untouched
    /// since this is a pure transition on a copy.
    pub fn execute(
        self,
        state: &State,
        pressed_keys: &[bool; 16],
    ) -> Result<State, Chip8Error> {
        let state = State {
            pc: state.pc.wrapping_add(2),
            ..*state
        };

        let next = match self {
            Instruction::Cls => operations::cls(&state),
            Instruction::Ret => operations::ret(&state)?,
            Instruction::Jump(nnn) => operations::jump(nnn, &state),
            Instruction::Call(nnn) => operations::call(nnn, &state)?,
            Instruction::SkipEqImm(x, nn) => operations::skip_eq_imm(x, nn, &state),
            Instruction::SkipNeImm(x, nn) => operations::skip_ne_imm(x, nn, &state),
            Instruction::SkipEqReg(x, y) => operations::skip_eq_reg(x, y, &state),
            Instruction::LoadImm(x, nn) => operations::load_imm(x, nn, &state),
            Instruction::AddImm(x, nn) => operations::add_imm(x, nn, &state),
            Instruction::Move(x, y) => operations::mv(x, y, &state),
            Instruction::Or(x, y) => operations::or(x, y, &state),
            Instruction::And(x, y) => operations::and(x, y, &state),
            Instruction::Xor(x, y) => operations::xor(x, y, &state),
            Instruction::Add(x, y) => operations::add(x, y, &state),
            Instruction::Sub(x, y) => operations::sub(x, y, &state),
            Instruction::ShiftRight(x) => operations::shift_right(x, &state),
            Instruction::SubNeg(x, y) => operations::sub_neg(x, y, &state),
            Instruction::ShiftLeft(x) => operations::shift_left(x, &state),
            Instruction::SkipNeReg(x, y) => operations::skip_ne_reg(x, y, &state),
            Instruction::LoadIndex(nnn) => operations::load_index(nnn, &state),
            Instruction::JumpOffset(nnn) => operations::jump_offset(nnn, &state),
            Instruction::Random(x, nn) => operations::random(x, nn, &state),
            Instruction::Draw(x, y, n) => operations::draw(x, y, n, &state),
            Instruction::SkipPressed(x) => operations::skip_pressed(x, &state, pressed_keys),
            Instruction::SkipReleased(x) => operations::skip_released(x, &state, pressed_keys),
            Instruction::ReadDelay(x) => operations::read_delay(x, &state),
            Instruction::WaitKey(x) => operations::wait_key(x, &state, pressed_keys),
            Instruction::SetDelay(x) => operations::set_delay(x, &state),
            Instruction::SetSound(x) => operations::set_sound(x, &state),
            Instruction::AddIndex(x) => operations::add_index(x, &state),
            Instruction::LoadGlyph(x) => operations::load_glyph(x, &state),
            Instruction::Bcd(x) => operations::bcd(x, &state),
            Instruction::StoreRegisters(x) => operations::store_registers(x, &state),
            Instruction::LoadRegisters(x) => operations::load_registers(x, &state),
            Instruction::Unknown(word) => {
                trace!("skipping unrecognized opcode {:04X}", word);
                state
            }
        };
        Ok(next)
    }
}
