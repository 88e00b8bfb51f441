use crate::InkpadApp;
use crate::brush;
use crate::command::Command;

/// Brush controls, preset swatches, actions, and the session stats block.
pub fn tools_panel(app: &mut InkpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Brush");

            ui.horizontal(|ui| {
                if ui.button("\u{2212}").clicked() {
                    app.apply(Command::DecreaseSize);
                }
                let mut size = app.editor().brush().size();
                let drag = ui.add(
                    egui::DragValue::new(&mut size)
                        .range(brush::MIN_SIZE..=brush::MAX_SIZE)
                        .suffix(" px"),
                );
                if drag.changed() {
                    app.apply(Command::SetSize(size));
                }
                if ui.button("+").clicked() {
                    app.apply(Command::IncreaseSize);
                }
            });

            let mut color = app.editor().brush().color();
            if ui.color_edit_button_srgba(&mut color).changed() {
                app.apply(Command::SetColor(color));
            }

            ui.separator();
            ui.label("Presets");
            ui.horizontal_wrapped(|ui| {
                for (index, &preset) in brush::PRESET_COLORS.iter().enumerate() {
                    let swatch = egui::Button::new("  ").fill(preset);
                    if ui
                        .add(swatch)
                        .on_hover_text(format!("Preset {}", index + 1))
                        .clicked()
                    {
                        app.apply(Command::SetColor(preset));
                    }
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                let can_undo = app.editor().history().can_undo();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.apply(Command::Undo);
                }
                if ui.button("Clear").clicked() {
                    app.request_clear();
                }
                if ui.button("Save PNG").clicked() {
                    app.export_drawing();
                }
            });

            ui.separator();
            ui.label("Session");
            let editor = app.editor();
            let secs = editor.elapsed().as_secs();
            ui.monospace(format!("Strokes  {}", editor.stroke_count()));
            ui.monospace(format!("Time     {}:{:02}", secs / 60, secs % 60));
            ui.monospace(format!(
                "History  {}/{}",
                editor.history().step() + 1,
                editor.history().len()
            ));

            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
}
