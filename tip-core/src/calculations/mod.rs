//! Tip computation modules.
//!
//! This module provides the calculation logic for tip suggestions: the
//! engine that turns a bill amount into an ordered row set, plus the shared
//! rounding helpers it is built on.

pub mod common;
pub mod tips;

pub use tips::{TipCalculator, TipConfig, TipConfigError};
