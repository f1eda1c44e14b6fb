use egui::{Color32, Sense, Slider};

use crate::SketchApp;
use crate::style::{LINE_WIDTH_RANGE, PALETTE};

const SWATCH_SIZE: f32 = 24.0;

pub fn style_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("style_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut width = app.style().width();
                if ui.add(Slider::new(&mut width, LINE_WIDTH_RANGE).text("Width")).changed() {
                    app.set_width(width);
                }

                ui.separator();

                let current = app.style().color();
                for entry in &PALETTE {
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(SWATCH_SIZE, SWATCH_SIZE),
                        Sense::click(),
                    );
                    let radius = SWATCH_SIZE / 2.0 - 2.0;
                    ui.painter().circle_filled(rect.center(), radius, entry.color);
                    if entry.color == current {
                        ui.painter().circle_stroke(
                            rect.center(),
                            radius,
                            egui::Stroke::new(2.0, Color32::WHITE),
                        );
                    }
                    if response.on_hover_text(entry.name).clicked() {
                        log::info!("Color selected from palette: {}", entry.name);
                        app.set_color(entry.color);
                    }
                }

                ui.separator();

                // Anything outside the palette
                let mut custom = current;
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut custom,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.set_color(custom);
                }
            });
        });
}
