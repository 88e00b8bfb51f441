use egui::Color32;

use crate::brush;
use crate::editor::{CanvasEditor, UndoStatus};

/// The discrete tool commands the shell drives the editor through. Pointer
/// events go through the editor's `pointer_*` methods instead; these are the
/// one-shot actions bound to buttons and keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    IncreaseSize,
    DecreaseSize,
    SetSize(i32),
    SetColor(Color32),
    Clear,
    Undo,
}

/// What a command did, for surfacing in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    SizeSet(i32),
    ColorSet(Color32),
    Cleared,
    Undone,
    NothingToUndo,
    /// The surface was exported and written out. Saving needs a file sink
    /// the editor does not own, so the shell reports this outcome itself
    /// after the save dialog instead of going through `Command::apply`.
    Saved,
}

impl Command {
    pub fn apply(self, editor: &mut CanvasEditor) -> CommandOutcome {
        match self {
            Command::IncreaseSize => {
                editor.adjust_brush_size(brush::SIZE_STEP);
                CommandOutcome::SizeSet(editor.brush().size())
            }
            Command::DecreaseSize => {
                editor.adjust_brush_size(-brush::SIZE_STEP);
                CommandOutcome::SizeSet(editor.brush().size())
            }
            Command::SetSize(size) => {
                editor.set_brush_size(size);
                CommandOutcome::SizeSet(editor.brush().size())
            }
            Command::SetColor(color) => {
                editor.set_color(color);
                CommandOutcome::ColorSet(color)
            }
            Command::Clear => {
                editor.clear();
                CommandOutcome::Cleared
            }
            Command::Undo => match editor.undo() {
                UndoStatus::Undone => CommandOutcome::Undone,
                UndoStatus::NothingToUndo => CommandOutcome::NothingToUndo,
            },
        }
    }
}

impl CommandOutcome {
    /// True if the command repainted the surface and the texture needs a
    /// re-upload.
    pub fn changed_raster(&self) -> bool {
        matches!(self, CommandOutcome::Cleared | CommandOutcome::Undone)
    }

    /// Short status-line message reporting what happened.
    pub fn message(&self) -> String {
        match self {
            CommandOutcome::SizeSet(size) => format!("Brush size: {size}px"),
            CommandOutcome::ColorSet(_) => "Color changed".to_owned(),
            CommandOutcome::Cleared => "Canvas cleared!".to_owned(),
            CommandOutcome::Undone => "Undone!".to_owned(),
            CommandOutcome::NothingToUndo => "Nothing to undo!".to_owned(),
            CommandOutcome::Saved => "Drawing saved!".to_owned(),
        }
    }
}
