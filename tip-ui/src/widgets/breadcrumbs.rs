use egui::Ui;

/// Renders a breadcrumb trail for screen navigation.
///
/// Every segment except the last is a link; the last one names the active
/// screen and is rendered as plain text. Returns the index of the clicked
/// segment, if any.
pub fn breadcrumb_trail(
    ui: &mut Ui,
    segments: &[&str],
) -> Option<usize> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for (i, segment) in segments.iter().enumerate() {
            if i + 1 == segments.len() {
                ui.label(*segment);
            } else {
                if ui.link(*segment).clicked() {
                    clicked = Some(i);
                }
                ui.label("/");
            }
        }
    });
    clicked
}
