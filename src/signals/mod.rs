//! Rule-based signal generation.

pub mod generator;

pub use generator::SignalGenerator;
