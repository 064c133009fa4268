use rust_decimal::Decimal;
use tip_core::format::{CentsFormat, extract_digits, format_cents};
use tip_core::{TipCalculator, TipRow};
use tracing::debug;

use crate::screens::{CalculatorScreen, ChangelogScreen};

/// Which screen is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Calculator,
    Changelog,
}

/// Top-level application state.
///
/// The tip rows are recomputed in full on every edit of the amount field;
/// there is no incremental state to keep in sync.
#[derive(Debug)]
pub struct TipApp {
    pub calculator: TipCalculator,
    /// Bill amount in cents, already clamped.
    pub amount: u64,
    /// Text shown in the amount field. Re-rendered as formatted cents
    /// after every edit, so the field always displays the sanitized
    /// amount.
    pub amount_input: String,
    pub tips: Vec<TipRow>,
    pub screen: Screen,
}

impl TipApp {
    pub fn new() -> Self {
        Self {
            calculator: TipCalculator::default(),
            amount: 0,
            amount_input: Self::render_amount(0),
            tips: Vec::new(),
            screen: Screen::default(),
        }
    }

    fn render_amount(amount: u64) -> String {
        format_cents(Decimal::from(amount), &CentsFormat::default())
    }

    /// Re-derives the amount and the tip rows from the text field after an
    /// edit, then re-renders the field.
    pub fn amount_input_changed(&mut self) {
        let digits = extract_digits(&self.amount_input, 0);
        self.amount = self.calculator.clamp_amount(digits);
        self.tips = self.calculator.compute(self.amount);
        self.amount_input = Self::render_amount(self.amount);
        debug!(
            amount = self.amount,
            rows = self.tips.len(),
            "recomputed tips"
        );
    }
}

impl Default for TipApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for TipApp {
    fn update(
        &mut self,
        ctx: &egui::Context,
        _frame: &mut eframe::Frame,
    ) {
        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Calculator => CalculatorScreen::show(self, ui),
            Screen::Changelog => ChangelogScreen::show(self, ui),
        });
    }
}
