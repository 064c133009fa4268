use egui::{RichText, Ui};

use crate::app::{Screen, TipApp};
use crate::changelog::{CHANGELOG, Change, format_version};
use crate::widgets::breadcrumb_trail;

pub struct ChangelogScreen;

impl ChangelogScreen {
    /// Indent per nesting level of a change description.
    const INDENT: f32 = 16.0;
    /// Version heading text size.
    const VERSION_SIZE: f32 = 18.0;

    pub fn show(
        app: &mut TipApp,
        ui: &mut Ui,
    ) {
        if breadcrumb_trail(ui, &["Home", "Changelog"]) == Some(0) {
            app.screen = Screen::Calculator;
        }
        ui.separator();
        ui.heading("Changelog");
        ui.add_space(8.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for release in CHANGELOG {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format_version(release.version)).size(Self::VERSION_SIZE),
                    );
                    ui.label(RichText::new(release.timestamp).italics().weak());
                });
                for change in release.changes {
                    Self::change_lines(ui, change, 1);
                }
                ui.add_space(8.0);
            }
        });
    }

    fn change_lines(
        ui: &mut Ui,
        change: &Change,
        depth: usize,
    ) {
        ui.horizontal(|ui| {
            ui.add_space(Self::INDENT * depth as f32);
            ui.label(format!("• {}", change.text));
        });
        for child in change.children {
            Self::change_lines(ui, child, depth + 1);
        }
    }
}
