use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use display::Display;
use vip8::{Chip8, CLOCK_SPEED, CPU_CYCLES_PER_TIMER_TICK};

use crate::keymap::keymap;

pub fn run(rom: PathBuf) -> Result<(), Box<dyn Error>> {
    let mut chip8 = Chip8::new();

    // Load ROM
    let bytes = fs::read(&rom)?;
    chip8.load_rom(&bytes)?;
    info!("loaded {}", rom.display());

    // Get SDL2 context
    let sdl = sdl2::init()?;
    let mut display = Display::new(&sdl)?;
    let mut events = sdl.event_pump()?;

    // Set initial timing
    let cycle_time = Duration::from_nanos(CLOCK_SPEED);
    let mut last_cycle = Instant::now();

    // Whether or not the default clock speed should be respected
    let mut fast_forward = false;
    // CPU cycles left before the next 60Hz timer tick
    let mut cycles_until_tick = CPU_CYCLES_PER_TIMER_TICK;

    'event: loop {
        // If the interpreter reports a dirty frame, render it
        if chip8.consume_draw_flag() {
            display.render(&chip8.frame())?;
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.set_key(kc, true),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.set_key(kc, false),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state; a fatal machine fault stops execution but leaves the
        // last frame on screen
        if let Err(fault) = chip8.step() {
            error!("halting: {}", fault);
            break;
        }

        // The timers run at a fixed 60Hz independent of the CPU clock, here
        // approximated by dividing the paced CPU cycle count
        cycles_until_tick -= 1;
        if cycles_until_tick == 0 {
            chip8.tick_timers();
            cycles_until_tick = CPU_CYCLES_PER_TIMER_TICK;
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = current_time;
    }

    Ok(())
}
