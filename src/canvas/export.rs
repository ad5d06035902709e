use std::path::Path;

use crate::canvas::buffer::FrameRGBA;
use crate::foundation::error::{PanelError, PanelResult};

/// Largest integer upscale factor accepted by [`upscale_nearest`].
pub const MAX_SCALE: u32 = 16;

/// Nearest-neighbour upscale so single LEDs stay crisp in previews.
pub fn upscale_nearest(frame: &FrameRGBA, scale: u32) -> PanelResult<FrameRGBA> {
    if scale == 0 || scale > MAX_SCALE {
        return Err(PanelError::validation(format!(
            "scale must be in 1..={MAX_SCALE}, got {scale}"
        )));
    }
    if scale == 1 {
        return Ok(frame.clone());
    }
    let width = frame.width * scale;
    let height = frame.height * scale;
    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for y in 0..height {
        let src_row = (y / scale) as usize * frame.width as usize;
        for x in 0..width {
            let idx = (src_row + (x / scale) as usize) * 4;
            data.extend_from_slice(&frame.data[idx..idx + 4]);
        }
    }
    Ok(FrameRGBA {
        width,
        height,
        data,
    })
}

/// Write `frame` as an RGBA8 PNG.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> PanelResult<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| PanelError::export(format!("write png '{}': {e}", path.display())))
}
