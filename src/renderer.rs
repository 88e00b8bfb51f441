use egui::{ColorImage, Context, TextureHandle, TextureOptions};

use crate::canvas::Canvas;

/// Owns the GPU texture for the raster and re-uploads it only when the
/// surface actually changed.
pub struct CanvasRenderer {
    texture: Option<TextureHandle>,
    dirty: bool,
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self {
            texture: None,
            dirty: false,
        }
    }

    /// Flags the surface as changed so the next frame re-uploads it.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// The texture for the current surface, uploading it if needed.
    pub fn texture(&mut self, ctx: &Context, canvas: &Canvas) -> &TextureHandle {
        let needs_upload = self.dirty;
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture("canvas", color_image(canvas), TextureOptions::NEAREST)
        });
        if needs_upload {
            texture.set(color_image(canvas), TextureOptions::NEAREST);
        }
        self.dirty = false;
        texture
    }
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn color_image(canvas: &Canvas) -> ColorImage {
    ColorImage::from_rgba_unmultiplied(
        [canvas.width(), canvas.height()],
        &canvas.to_rgba_bytes(),
    )
}
