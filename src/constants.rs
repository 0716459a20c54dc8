/// Horizontal pixel count of the Chip-8 display
pub const DISPLAY_WIDTH: usize = 64;

/// Vertical pixel count of the Chip-8 display
pub const DISPLAY_HEIGHT: usize = 32;

/// Total addressable memory in bytes
pub const MEMORY_SIZE: usize = 4096;

/// Address at which ROMs are loaded and execution begins
pub const PROGRAM_START: u16 = 0x200;

/// Maximum number of return addresses the call stack can hold
pub const STACK_DEPTH: usize = 16;

/// Nanoseconds per CPU cycle; approximates a 500Hz clock
pub const CLOCK_SPEED: u64 = 2_000_000;

/// CPU cycles per timer decrement; approximates the 60Hz timer clock
pub const CPU_CYCLES_PER_TIMER_TICK: u8 = 8;

/// The built-in hexadecimal font.
///
/// One 5-byte glyph per digit 0..F, resident at 0x000..0x050 so that Fx29 can
/// resolve the glyph for Vx as `Vx * 5`. Each byte is one 8-pixel sprite row
/// with only the high nibble populated.
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
