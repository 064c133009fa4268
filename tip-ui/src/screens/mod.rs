mod calculator;
mod changelog;

pub use calculator::CalculatorScreen;
pub use changelog::ChangelogScreen;
