use crate::SketchApp;

pub fn canvas_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                log::info!("Clear requested from UI");
                app.clear();
            }
            ui.label(format!("Strokes: {}", app.model().len()));
        });

        // The canvas fills whatever space is left
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        app.handle_canvas(&response);

        app.renderer().render(&painter, response.rect, app.model());
    });
}
