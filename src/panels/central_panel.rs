use crate::InkpadApp;

/// Letterboxes the canvas in the remaining space and routes pointer input.
pub fn central_panel(app: &mut InkpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let available = response.rect;

        let surface_size = (app.editor().canvas().width(), app.editor().canvas().height());
        let scale = fit_scale(surface_size, available.size());
        let canvas_rect = egui::Rect::from_center_size(
            available.center(),
            egui::Vec2::new(surface_size.0 as f32 * scale, surface_size.1 as f32 * scale),
        );

        app.input_mut().set_canvas_rect(canvas_rect, surface_size);
        // hovered() goes false while another area (e.g. the confirm window)
        // owns the pointer, so strokes cannot start through it.
        app.route_pointer_events(ctx, response.hovered());

        painter.rect_filled(available, 0.0, egui::Color32::from_gray(40));
        app.paint_canvas(ctx, &painter, canvas_rect);
    });
}

/// Scale that fits the surface into the panel. Upscaling snaps to a whole
/// multiple (at most 2x) so nearest-neighbour pixels stay uniform; below 1x
/// the fractional fit is kept so the surface stays fully visible.
pub fn fit_scale(surface_size: (usize, usize), available: egui::Vec2) -> f32 {
    let scale =
        (available.x / surface_size.0 as f32).min(available.y / surface_size.1 as f32);
    if scale >= 1.0 { scale.floor().min(2.0) } else { scale }
}
