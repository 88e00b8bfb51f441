use std::io::Cursor;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::canvas::Canvas;

/// Errors that can occur while exporting the surface as an image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("pixel buffer does not match canvas dimensions")]
    BufferMismatch,
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Encodes the surface losslessly as PNG and returns the bytes.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, ExportError> {
    let image = RgbaImage::from_raw(
        canvas.width() as u32,
        canvas.height() as u32,
        canvas.to_rgba_bytes(),
    )
    .ok_or(ExportError::BufferMismatch)?;

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

pub fn save_png(canvas: &Canvas, path: &Path) -> Result<(), ExportError> {
    let bytes = encode_png(canvas)?;
    std::fs::write(path, bytes)?;
    log::info!("saved drawing to {}", path.display());
    Ok(())
}

/// Default filename for a saved drawing, e.g. `drawing-1756450000.png`.
pub fn default_file_name() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("drawing-{secs}.png")
}
