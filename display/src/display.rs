use sdl2::pixels::PixelFormatEnum;

use vip8::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use vip8::state::FrameBuffer;

const SCALE: usize = 10;

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels, held by the
/// interpreter as a 2d array of booleans.
/// The display only gets a call to `render` when the interpreter reports a
/// dirty frame.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "Vip-8",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display {
            canvas,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        })
    }

    /// Formats a frame buffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 texture is a 1D array of ints that represent concatenated rows
    /// of RGB pixels.
    ///
    /// This creates a black and white rendering by:
    /// - Flattening the 2D frame buffer into a 1D array by concatenating its
    ///   rows
    /// - Triplicating each element of that 1D array to represent the RGB
    ///   values of each pixel
    /// - Mapping lit pixels to full 0-255 intensity
    ///
    /// # Arguments
    /// * `frame` a frame buffer snapshot
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|&lit| std::iter::repeat(if lit { 255 } else { 0 }).take(3))
            .collect()
    }

    /// Formats the frame buffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a frame buffer snapshot
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(|e| e.to_string())?;

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&Display::frame_to_sdl_texture(frame));
            })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_sdl_texture() {
        let mut frame: FrameBuffer = [[false; 64]; 32];
        frame[0][0..2].copy_from_slice(&[false, true]);
        frame[1][0..2].copy_from_slice(&[true, false]);
        let frame = Display::frame_to_sdl_texture(&frame);

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(frame, expected);
    }
}
