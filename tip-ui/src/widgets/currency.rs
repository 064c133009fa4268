use egui::{Response, TextEdit, Ui};

/// A labeled currency input field with a dollar-sign prefix.
pub fn currency_field(
    ui: &mut Ui,
    label: &str,
    value: &mut String,
    width: f32,
) -> Response {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add_space(10.0);
        ui.label("$");
        ui.add(
            TextEdit::singleline(value)
                .desired_width(width)
                .hint_text("0.00"),
        )
    })
    .inner
}
