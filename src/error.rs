use thiserror::Error;

/// Fatal machine faults.
///
/// Unknown opcodes are not represented here: ROMs routinely embed data in
/// executable regions, so an unrecognized instruction is skipped rather than
/// reported. Every variant here leaves the machine state untouched; the
/// driver decides whether to halt or reset.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Chip8Error {
    #[error("ROM is {size} bytes but only {max} bytes of program memory exist")]
    RomTooLarge { size: usize, max: usize },

    #[error("call at {pc:#06X} exceeds the maximum stack depth")]
    StackOverflow { pc: u16 },

    #[error("return at {pc:#06X} with an empty call stack")]
    StackUnderflow { pc: u16 },
}
