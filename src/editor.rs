use std::time::{Duration, Instant};

use egui::Color32;

use crate::brush::Brush;
use crate::canvas::Canvas;
use crate::export::{self, ExportError};
use crate::history::SnapshotHistory;

pub const DEFAULT_WIDTH: usize = 800;
pub const DEFAULT_HEIGHT: usize = 500;
pub const HISTORY_CAPACITY: usize = 50;

/// Outcome of an undo request. Running out of history is a benign status,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoStatus {
    Undone,
    NothingToUndo,
}

/// Whether a stroke is in flight. `Drawing` remembers the last point visited
/// so each pointer move extends the stroke by one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrokeState {
    Idle,
    Drawing { last: (i32, i32) },
}

/// The drawing core: owns the raster surface, the brush, and the snapshot
/// history. All operations are synchronous and infallible except PNG export.
///
/// Coordinates are surface-local pixels; the shell is responsible for mapping
/// screen positions before calling in. A completed stroke (pointer up, or the
/// pointer leaving the surface) commits one snapshot to the history.
pub struct CanvasEditor {
    canvas: Canvas,
    brush: Brush,
    history: SnapshotHistory,
    state: StrokeState,
    stroke_count: u32,
    started_at: Instant,
}

impl CanvasEditor {
    pub fn new(width: usize, height: usize, background: Color32) -> Self {
        Self::with_capacity(width, height, background, HISTORY_CAPACITY)
    }

    pub fn with_capacity(
        width: usize,
        height: usize,
        background: Color32,
        history_capacity: usize,
    ) -> Self {
        let canvas = Canvas::new(width, height, background);
        let history = SnapshotHistory::new(history_capacity, canvas.snapshot());
        Self {
            canvas,
            brush: Brush::default(),
            history,
            state: StrokeState::Idle,
            stroke_count: 0,
            started_at: Instant::now(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    /// Completed strokes since startup or the last clear.
    pub fn stroke_count(&self) -> u32 {
        self.stroke_count
    }

    /// Session time since startup or the last clear.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Drawing { .. })
    }

    /// Begins a stroke at (x, y). Paints nothing yet; the first move does.
    /// A second down while already drawing just re-anchors the stroke.
    pub fn pointer_down(&mut self, x: i32, y: i32) {
        self.state = StrokeState::Drawing { last: (x, y) };
    }

    /// Extends the active stroke with a segment from the last point to
    /// (x, y). Ignored while idle.
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        if let StrokeState::Drawing { last } = self.state {
            self.canvas
                .stroke_segment(last, (x, y), self.brush.size(), self.brush.color());
            self.state = StrokeState::Drawing { last: (x, y) };
        }
    }

    /// Finalizes the active stroke and commits a snapshot. Ignored while idle.
    pub fn pointer_up(&mut self) {
        self.finish_stroke();
    }

    /// The pointer leaving the surface ends the stroke exactly like a
    /// pointer up, so a stroke can never get stuck in flight.
    pub fn pointer_leave(&mut self) {
        self.finish_stroke();
    }

    fn finish_stroke(&mut self) {
        if !self.is_drawing() {
            return;
        }
        self.state = StrokeState::Idle;
        self.history.record(self.canvas.snapshot());
        self.stroke_count += 1;
        log::debug!(
            "stroke {} committed, history {}/{}",
            self.stroke_count,
            self.history.step() + 1,
            self.history.len()
        );
    }

    /// Clamped to the valid range; takes effect on the next stroke.
    pub fn set_brush_size(&mut self, size: i32) {
        self.brush.set_size(size);
    }

    pub fn adjust_brush_size(&mut self, delta: i32) {
        self.brush.adjust_size(delta);
    }

    pub fn set_color(&mut self, color: Color32) {
        self.brush.set_color(color);
    }

    /// Wipes the surface and reseeds the history with the blank state as its
    /// only entry, so a clear cannot be undone. Also resets the stroke
    /// counter and the session clock. Confirmation is the caller's job.
    pub fn clear(&mut self) {
        let background = self.canvas.background();
        self.canvas.fill(background);
        self.state = StrokeState::Idle;
        self.history.reset(self.canvas.snapshot());
        self.stroke_count = 0;
        self.started_at = Instant::now();
        log::info!("canvas cleared");
    }

    /// Steps back one snapshot and repaints the surface from it. At the
    /// bottom of the history the surface is left untouched.
    pub fn undo(&mut self) -> UndoStatus {
        match self.history.undo() {
            Some(snapshot) => {
                self.canvas.restore(&snapshot);
                UndoStatus::Undone
            }
            None => UndoStatus::NothingToUndo,
        }
    }

    /// Encodes the current surface as PNG bytes. Has no effect on editor
    /// state.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        export::encode_png(&self.canvas)
    }
}

impl Default for CanvasEditor {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, Color32::WHITE)
    }
}
