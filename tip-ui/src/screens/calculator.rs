use egui::{RichText, Ui};
use rust_decimal::Decimal;
use tip_core::format::{CentsFormat, PercentFormat, format_cents, format_percent};

use crate::TITLE;
use crate::app::{Screen, TipApp};
use crate::changelog::current_version;
use crate::widgets::currency_field;

pub struct CalculatorScreen;

impl CalculatorScreen {
    /// Currency input field width.
    const INPUT_WIDTH: f32 = 120.0;
    /// Spacing between the table columns.
    const GRID_SPACING: [f32; 2] = [24.0, 6.0];

    pub fn show(
        app: &mut TipApp,
        ui: &mut Ui,
    ) {
        ui.horizontal(|ui| {
            ui.heading(TITLE);
            let version = RichText::new(format!("({})", current_version()))
                .italics()
                .weak();
            if ui.link(version).clicked() {
                app.screen = Screen::Changelog;
            }
        });
        ui.separator();

        let response = currency_field(ui, "Amount", &mut app.amount_input, Self::INPUT_WIDTH);
        if response.changed() {
            app.amount_input_changed();
        }

        ui.add_space(8.0);
        Self::tip_table(app, ui);
    }

    fn tip_table(
        app: &TipApp,
        ui: &mut Ui,
    ) {
        let dollars = CentsFormat { dollar_sign: true };
        let percent_format = PercentFormat::default();

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("tip_table")
                .num_columns(3)
                .striped(true)
                .spacing(Self::GRID_SPACING)
                .show(ui, |ui| {
                    ui.label(RichText::new("Percentage").strong());
                    ui.label(RichText::new("Tip").strong());
                    ui.label(RichText::new("Total").strong());
                    ui.end_row();

                    if app.tips.is_empty() {
                        // Placeholder row shown until an amount is entered.
                        ui.label("");
                        ui.label(format_cents(Decimal::ZERO, &dollars));
                        ui.label(format_cents(Decimal::ZERO, &dollars));
                        ui.end_row();
                        return;
                    }

                    for row in &app.tips {
                        let percent_cell = match row.percent() {
                            Some(p) => format!("{p}%"),
                            None => format_percent(row.ratio(app.amount), &percent_format),
                        };
                        let cell = |text: String| {
                            if row.is_percentage() {
                                RichText::new(text).strong()
                            } else {
                                RichText::new(text)
                            }
                        };
                        ui.label(cell(percent_cell));
                        ui.label(cell(format_cents(row.tip(), &dollars)));
                        ui.label(cell(format_cents(row.total(app.amount), &dollars)));
                        ui.end_row();
                    }
                });
        });
    }
}
