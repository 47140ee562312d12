use eframe::egui;

/// Round colour button, ringed when it holds the active colour
pub struct ColorSwatch {
    pub color: egui::Color32,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: egui::Color32, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = rect.width() / 2.0 - 1.0;
            ui.painter().circle_filled(rect.center(), radius, self.color);

            let outline = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
            } else if response.hovered() {
                egui::Stroke::new(1.0, egui::Color32::from_gray(120))
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(190))
            };
            ui.painter().circle_stroke(rect.center(), radius, outline);
        }

        let [r, g, b, _] = self.color.to_array();
        response.on_hover_text(format!("#{r:02x}{g:02x}{b:02x}"))
    }
}
