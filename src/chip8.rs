use log::{debug, trace};

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, MEMORY_SIZE, PROGRAM_START};
use crate::error::Chip8Error;
use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns the full machine state plus the key snapshot and exposes the narrow
/// surface collaborators drive it through:
/// - `reset` / `load_rom` for the driver to initialize a program
/// - `step` to run one fetch-decode-execute cycle
/// - `tick_timers` for the driver to decrement the timers at its own fixed
///   cadence, independent of how many instructions ran in between
/// - `set_key` for the input collaborator
/// - `pixel` / `frame` / `consume_draw_flag` / `sound_active` for the
///   rendering collaborator
///
/// Nothing inside is shared by reference; reads hand out copies and writes go
/// through the mutators above.
pub struct Chip8 {
    state: State,
    pressed_keys: [bool; 16],
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
            pressed_keys: [false; 16],
        }
    }

    /// Restores power-on state: cleared registers, timers, frame buffer, and
    /// keys, the font sprite sheet in low memory, and the program counter at
    /// the program start address. Any loaded ROM is discarded.
    pub fn reset(&mut self) {
        self.state = State::new();
        self.pressed_keys = [false; 16];
    }

    /// Copies a ROM into memory at the program start address.
    ///
    /// The ROM is rejected outright if it doesn't fit in program memory;
    /// nothing is written on failure.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), Chip8Error> {
        let max = MEMORY_SIZE - PROGRAM_START as usize;
        if rom.len() > max {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max,
            });
        }
        let start = PROGRAM_START as usize;
        self.state.memory[start..start + rom.len()].copy_from_slice(rom);
        debug!("loaded {} byte ROM at {:#05X}", rom.len(), PROGRAM_START);
        Ok(())
    }

    /// Runs a single fetch-decode-execute cycle.
    ///
    /// The new state is committed only when execution succeeds; a fatal fault
    /// leaves the machine exactly as it was so the driver can inspect it.
    pub fn step(&mut self) -> Result<(), Chip8Error> {
        let op = self.fetch();
        trace!(
            "{:04X} pc{:04X} i{:04X} v{:02X?}",
            op.0,
            self.state.pc,
            self.state.i,
            self.state.v
        );
        self.state = Instruction::decode(op).execute(&self.state, &self.pressed_keys)?;
        Ok(())
    }

    /// Decrements both timers, saturating at zero.
    ///
    /// The caller owns the cadence; the hardware rate is 60Hz regardless of
    /// the CPU clock.
    pub fn tick_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Records the pressed state of a key (0x0..=0xF).
    ///
    /// The next `step` observes whatever the key vector holds at that point;
    /// this is a snapshot write, not an event queue.
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        self.pressed_keys[(key & 0xF) as usize] = pressed;
    }

    /// Whether the pixel at (x, y) is lit; coordinates wrap around the grid
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.state.frame_buffer[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    /// A copy of the frame buffer for the renderer
    pub fn frame(&self) -> FrameBuffer {
        self.state.frame_buffer
    }

    /// Returns whether the frame buffer changed since the last call, clearing
    /// the flag on the way out. Call once per rendered frame.
    pub fn consume_draw_flag(&mut self) -> bool {
        let dirty = self.state.draw_flag;
        self.state.draw_flag = false;
        dirty
    }

    /// Whether the sound timer is running; the driver decides what a beep
    /// sounds like
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two
    /// subsequent bytes.
    fn fetch(&self) -> Opcode {
        let pc = self.state.pc as usize % MEMORY_SIZE;
        Opcode::from_bytes(self.state.memory[pc], self.state.memory[(pc + 1) % MEMORY_SIZE])
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
