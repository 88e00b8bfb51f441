use egui::{Color32, Key, Modifiers};

use crate::brush::PRESET_COLORS;
use crate::command::{Command, CommandOutcome};
use crate::editor::CanvasEditor;
use crate::export;
use crate::input::{InputEvent, InputHandler};
use crate::panels;
use crate::renderer::CanvasRenderer;

/// We derive Deserialize/Serialize so brush settings survive a restart.
/// The raster and its history are session-local and skipped.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct InkpadApp {
    #[serde(skip)]
    editor: CanvasEditor,
    #[serde(skip)]
    renderer: CanvasRenderer,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    confirm_clear: bool,
    #[serde(skip)]
    status: Option<String>,
    brush_size: i32,
    brush_color: [u8; 3],
}

impl Default for InkpadApp {
    fn default() -> Self {
        let editor = CanvasEditor::default();
        let brush_size = editor.brush().size();
        let color = editor.brush().color();
        Self {
            editor,
            renderer: CanvasRenderer::new(),
            input: InputHandler::new(),
            confirm_clear: false,
            status: None,
            brush_size,
            brush_color: [color.r(), color.g(), color.b()],
        }
    }
}

impl InkpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.editor.set_brush_size(app.brush_size);
        app.editor.set_color(Color32::from_rgb(
            app.brush_color[0],
            app.brush_color[1],
            app.brush_color[2],
        ));
        app
    }

    pub fn editor(&self) -> &CanvasEditor {
        &self.editor
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Applies a tool command and records its outcome in the status line.
    pub fn apply(&mut self, command: Command) {
        let outcome = command.apply(&mut self.editor);
        log::debug!("{command:?} -> {outcome:?}");
        self.report(outcome);
    }

    fn report(&mut self, outcome: CommandOutcome) {
        if outcome.changed_raster() {
            self.renderer.mark_dirty();
        }
        self.status = Some(outcome.message());
    }

    /// Opens the confirm modal; clearing is destructive and not undoable.
    pub fn request_clear(&mut self) {
        self.confirm_clear = true;
    }

    /// Asks for a target file and saves the current surface as PNG.
    pub fn export_drawing(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(export::default_file_name())
            .save_file()
        else {
            return;
        };
        match export::save_png(self.editor.canvas(), &path) {
            Ok(()) => self.report(CommandOutcome::Saved),
            Err(err) => {
                log::error!("failed to save drawing: {err}");
                self.status = Some(format!("Save failed: {err}"));
            }
        }
    }

    /// Feeds this frame's pointer events to the editor in arrival order.
    /// `canvas_hovered` is the canvas response's hover state, which egui
    /// clears whenever another area (such as a window) owns the pointer.
    pub fn route_pointer_events(&mut self, ctx: &egui::Context, canvas_hovered: bool) {
        for event in self.input.process_input(ctx) {
            self.handle_pointer_event(event, canvas_hovered);
        }
    }

    /// Applies a single pointer event. A stroke may only start while the
    /// canvas owns the pointer and no confirm dialog is pending; a stroke
    /// already in flight still sees its moves and its final up.
    pub fn handle_pointer_event(&mut self, event: InputEvent, canvas_hovered: bool) {
        if self.confirm_clear {
            return;
        }
        match event {
            InputEvent::PointerDown { location } if location.on_surface && canvas_hovered => {
                self.editor.pointer_down(location.x, location.y);
            }
            InputEvent::PointerMove { location } if self.editor.is_drawing() => {
                if location.on_surface {
                    self.editor.pointer_move(location.x, location.y);
                } else {
                    // Leaving the surface mid-stroke ends the stroke.
                    self.editor.pointer_leave();
                }
                self.renderer.mark_dirty();
            }
            InputEvent::PointerUp { .. } if self.editor.is_drawing() => {
                self.editor.pointer_up();
            }
            InputEvent::PointerLeft if self.editor.is_drawing() => {
                self.editor.pointer_leave();
            }
            _ => {}
        }
    }

    /// Draws the raster texture into the given screen rect.
    pub fn paint_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        let texture = self.renderer.texture(ctx, self.editor.canvas());
        let uv = egui::Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0));
        painter.image(texture.id(), rect, uv, Color32::WHITE);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::Z)) {
            self.apply(Command::Undo);
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::COMMAND, Key::S)) {
            self.export_drawing();
        }
        let grow = ctx.input_mut(|i| {
            i.consume_key(Modifiers::NONE, Key::Plus) || i.consume_key(Modifiers::NONE, Key::Equals)
        });
        if grow {
            self.apply(Command::IncreaseSize);
        }
        if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Minus)) {
            self.apply(Command::DecreaseSize);
        }

        const DIGITS: [Key; 9] = [
            Key::Num1,
            Key::Num2,
            Key::Num3,
            Key::Num4,
            Key::Num5,
            Key::Num6,
            Key::Num7,
            Key::Num8,
            Key::Num9,
        ];
        for (index, key) in DIGITS.iter().enumerate() {
            if ctx.input_mut(|i| i.consume_key(Modifiers::NONE, *key)) {
                self.apply(Command::SetColor(PRESET_COLORS[index]));
            }
        }
    }

    fn confirm_clear_modal(&mut self, ctx: &egui::Context) {
        if !self.confirm_clear {
            return;
        }
        egui::Window::new("Clear canvas?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("This wipes the drawing and its undo history.");
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        self.apply(Command::Clear);
                        self.confirm_clear = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirm_clear = false;
                    }
                });
            });
    }
}

impl eframe::App for InkpadApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.brush_size = self.editor.brush().size();
        let color = self.editor.brush().color();
        self.brush_color = [color.r(), color.g(), color.b()];
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        self.confirm_clear_modal(ctx);
        // Keep the session clock in the stats block ticking while idle.
        ctx.request_repaint_after(std::time::Duration::from_secs(1));
    }
}
