mod tip_row;

pub use tip_row::TipRow;
