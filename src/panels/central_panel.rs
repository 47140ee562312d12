use crate::app::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // The painter is clipped to the canvas, so strokes never spill onto the panels.
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let canvas_rect = response.rect;

        app.handle_canvas_input(ctx, canvas_rect);
        app.paint_canvas(&painter, canvas_rect);
    });
}
