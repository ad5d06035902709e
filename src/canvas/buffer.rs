use crate::foundation::color::{Rgb565, Rgb888};
use crate::foundation::error::{PanelError, PanelResult};

/// Default panel width (one 128x64 HUB75 module).
pub const DISPLAY_WIDTH: u32 = 128;
/// Default panel height.
pub const DISPLAY_HEIGHT: u32 = 64;
/// Largest canvas edge accepted by [`FrameBuffer::new`].
pub const MAX_CANVAS_EDGE: u32 = 512;

/// Addressable pixel grid the animations draw into.
///
/// Coordinates are signed so callers can hand over unclamped positions: writes outside
/// `[0, width) x [0, height)` are ignored and reads there return black.
pub trait PixelCanvas {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
    /// Write one pixel in the back buffer.
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb888);
    /// Read one pixel from the back buffer, at the canvas storage precision.
    fn get_pixel(&self, x: i32, y: i32) -> Rgb888;
    /// Publish the back buffer (flip).
    fn present(&mut self);

    /// Return `true` when `(x, y)` lies inside the canvas.
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Set every pixel to `color`.
    fn fill(&mut self, color: Rgb888) {
        let (w, h) = (self.width() as i32, self.height() as i32);
        for y in 0..h {
            for x in 0..w {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Set every pixel to black.
    fn clear(&mut self) {
        self.fill(Rgb888::BLACK);
    }
}

/// A presented frame as straight RGBA8 pixels (alpha is always opaque).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some(Rgb888::new(self.data[idx], self.data[idx + 1], self.data[idx + 2]))
    }

    /// Count of pixels that are not black.
    pub fn lit_pixels(&self) -> usize {
        self.data
            .chunks_exact(4)
            .filter(|px| px[0] != 0 || px[1] != 0 || px[2] != 0)
            .count()
    }
}

/// In-memory RGB565 canvas with a back buffer for drawing and a front buffer for display.
///
/// Both buffers are allocated once in the constructor.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    back: Vec<Rgb565>,
    front: Vec<Rgb565>,
    presented: u64,
}

impl FrameBuffer {
    /// Create a validated canvas of `width x height` pixels.
    pub fn new(width: u32, height: u32) -> PanelResult<Self> {
        if width == 0 || height == 0 {
            return Err(PanelError::validation("canvas dimensions must be > 0"));
        }
        if width > MAX_CANVAS_EDGE || height > MAX_CANVAS_EDGE {
            return Err(PanelError::validation(format!(
                "canvas dimensions must be <= {MAX_CANVAS_EDGE}, got {width}x{height}"
            )));
        }
        Ok(Self::blank(width, height))
    }

    /// Canvas matching the default 128x64 panel.
    pub fn panel() -> Self {
        Self::blank(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }

    // Callers have already checked the dimensions.
    fn blank(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            back: vec![Rgb565::default(); len],
            front: vec![Rgb565::default(); len],
            presented: 0,
        }
    }

    /// Number of completed [`PixelCanvas::present`] calls.
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// Copy of the front buffer as RGBA8.
    pub fn snapshot(&self) -> FrameRGBA {
        let mut data = Vec::with_capacity(self.front.len() * 4);
        for &px in &self.front {
            let c = Rgb888::from(px);
            data.extend_from_slice(&[c.r, c.g, c.b, 255]);
        }
        FrameRGBA {
            width: self.width,
            height: self.height,
            data,
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::panel()
    }
}

impl PixelCanvas for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb888) {
        if let Some(i) = self.index(x, y) {
            self.back[i] = Rgb565::from(color);
        }
    }

    fn get_pixel(&self, x: i32, y: i32) -> Rgb888 {
        self.index(x, y)
            .map(|i| Rgb888::from(self.back[i]))
            .unwrap_or(Rgb888::BLACK)
    }

    fn present(&mut self) {
        self.front.copy_from_slice(&self.back);
        self.presented = self.presented.saturating_add(1);
    }

    fn fill(&mut self, color: Rgb888) {
        self.back.fill(Rgb565::from(color));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/buffer.rs"]
mod tests;
