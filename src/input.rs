use egui::emath::RectTransform;
use egui::{Context, PointerButton, Pos2, Rect, Vec2};

/// A pointer position mapped into surface pixels.
#[derive(Debug, Clone, Copy)]
pub struct InputLocation {
    /// Surface-local pixel coordinates.
    pub x: i32,
    pub y: i32,
    /// Whether the pointer is over the canvas rect.
    pub on_surface: bool,
}

/// Pointer events in surface coordinates, ready for the editor. Emitted in
/// arrival order, so a move is never reordered around its bracketing
/// down/up.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    PointerDown { location: InputLocation },
    PointerMove { location: InputLocation },
    PointerUp { location: InputLocation },
    /// The pointer left the window entirely.
    PointerLeft,
}

/// Converts raw egui pointer input into surface-local `InputEvent`s.
pub struct InputHandler {
    last_hover: Option<Pos2>,
    canvas_rect: Rect,
    to_surface: RectTransform,
}

impl InputHandler {
    pub fn new() -> Self {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::splat(1.0));
        Self {
            last_hover: None,
            canvas_rect: rect,
            to_surface: RectTransform::identity(rect),
        }
    }

    /// Updates the mapping from screen space to surface pixels. Called every
    /// frame once the central panel has laid out the canvas.
    pub fn set_canvas_rect(&mut self, screen_rect: Rect, surface_size: (usize, usize)) {
        self.canvas_rect = screen_rect;
        self.to_surface = RectTransform::from_to(
            screen_rect,
            Rect::from_min_size(
                Pos2::ZERO,
                Vec2::new(surface_size.0 as f32, surface_size.1 as f32),
            ),
        );
    }

    fn locate(&self, pos: Pos2) -> InputLocation {
        let surface_pos = self.to_surface.transform_pos(pos);
        InputLocation {
            x: surface_pos.x as i32,
            y: surface_pos.y as i32,
            on_surface: self.canvas_rect.contains(pos),
        }
    }

    /// Drains this frame's pointer input into surface-local events. Only the
    /// primary button draws.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        ctx.input(|input| {
            if let Some(pos) = input.pointer.hover_pos() {
                if input.pointer.button_pressed(PointerButton::Primary) {
                    events.push(InputEvent::PointerDown {
                        location: self.locate(pos),
                    });
                }
                if Some(pos) != self.last_hover {
                    events.push(InputEvent::PointerMove {
                        location: self.locate(pos),
                    });
                }
                if input.pointer.button_released(PointerButton::Primary) {
                    events.push(InputEvent::PointerUp {
                        location: self.locate(pos),
                    });
                }
                self.last_hover = Some(pos);
            } else if self.last_hover.take().is_some() {
                events.push(InputEvent::PointerLeft);
            }
        });
        events
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
