pub use chip8::Chip8;
pub use constants::{CLOCK_SPEED, CPU_CYCLES_PER_TIMER_TICK};
pub use error::Chip8Error;

mod chip8;
pub mod constants;
pub mod error;
mod instruction;
mod opcode;
mod operations;
pub mod state;
