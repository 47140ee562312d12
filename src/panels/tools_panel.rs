use egui::Color32;
use egui::color_picker::{self, Alpha};

use crate::app::SketchApp;
use crate::components::{ColorSwatch, ToolButton};
use crate::export::ExportFormat;
use crate::tools::Tool;
use crate::tools::settings::{COLOR_PALETTE, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, STROKE_WIDTH_PRESETS};

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.context().settings().current_tool();
            ui.horizontal(|ui| {
                for tool in Tool::ALL {
                    if ToolButton::new(tool, tool == active_tool).show(ui).clicked() {
                        app.context_mut().set_tool(tool);
                    }
                }
            });
            ui.separator();

            style_section(app, ui);
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.context().drawing().can_undo();
                let can_redo = app.context().drawing().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.context_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.context_mut().redo();
                }
                if ui.button("Clear").clicked() {
                    app.context_mut().clear();
                }
            });

            let drawing = app.context().drawing();
            ui.label(format!(
                "Elements: {}   History: {}/{}",
                drawing.elements().len(),
                drawing.history().current_index().map_or(0, |index| index + 1),
                drawing.history().len()
            ));
            ui.separator();

            export_section(app, ui, ctx);

            if let Some(status) = app.status() {
                ui.separator();
                ui.colored_label(status.color(), &status.text);
            }
        });
}

fn style_section(app: &mut SketchApp, ui: &mut egui::Ui) {
    let settings = app.context().settings().clone();

    ui.horizontal(|ui| {
        ui.label("Stroke:");
        let mut stroke_color = settings.stroke_color();
        if color_picker::color_edit_button_srgba(ui, &mut stroke_color, Alpha::Opaque).changed() {
            app.context_mut().set_stroke_color(stroke_color);
        }
    });
    ui.horizontal_wrapped(|ui| {
        for color in COLOR_PALETTE {
            if ColorSwatch::new(color, color == settings.stroke_color()).show(ui).clicked() {
                app.context_mut().set_stroke_color(color);
            }
        }
    });

    ui.horizontal(|ui| {
        let mut filled = settings.fill_color() != Color32::TRANSPARENT;
        if ui.checkbox(&mut filled, "Fill").changed() {
            let fill = if filled { app.last_fill_color() } else { Color32::TRANSPARENT };
            app.context_mut().set_fill_color(fill);
        }
        if filled {
            let mut fill_color = app.context().settings().fill_color();
            if color_picker::color_edit_button_srgba(ui, &mut fill_color, Alpha::Opaque).changed() {
                app.set_last_fill_color(fill_color);
                app.context_mut().set_fill_color(fill_color);
            }
        }
    });
    ui.horizontal_wrapped(|ui| {
        for color in COLOR_PALETTE {
            if ColorSwatch::new(color, color == settings.fill_color()).show(ui).clicked() {
                app.set_last_fill_color(color);
                app.context_mut().set_fill_color(color);
            }
        }
    });

    ui.horizontal(|ui| {
        ui.label("Width:");
        let mut width = settings.stroke_width();
        if ui
            .add(egui::Slider::new(&mut width, MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH))
            .changed()
        {
            app.context_mut().set_stroke_width(width);
        }
    });
    ui.horizontal(|ui| {
        for preset in STROKE_WIDTH_PRESETS {
            if ui
                .selectable_label(settings.stroke_width() == preset, format!("{preset}"))
                .clicked()
            {
                app.context_mut().set_stroke_width(preset);
            }
        }
    });
}

fn export_section(app: &mut SketchApp, ui: &mut egui::Ui, ctx: &egui::Context) {
    ui.strong("Export");
    let dialog = app.export_dialog_mut();

    ui.horizontal(|ui| {
        ui.label("Name:");
        ui.text_edit_singleline(&mut dialog.file_name);
    });

    egui::ComboBox::from_label("Format")
        .selected_text(dialog.format.extension())
        .show_ui(ui, |ui| {
            for format in ExportFormat::ALL {
                ui.selectable_value(&mut dialog.format, format, format.extension());
            }
        });

    ui.add_enabled_ui(dialog.format.uses_quality(), |ui| {
        ui.horizontal(|ui| {
            ui.label("Quality (0.1-1.0):");
            ui.text_edit_singleline(&mut dialog.quality_input);
        });
    });

    if ui.button("Export image").clicked() {
        app.request_export(ctx);
    }
}
