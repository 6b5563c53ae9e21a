//! Analytics engine for a fixed basket of commodities, ETFs, and equity
//! indices: technical indicators, rule-based trading signals, and periodic
//! returns, derived fresh from a caller-supplied price history.
//!
//! The core is a stateless transformation: it never fetches data or renders
//! UI. Data arrives through [`services::MarketDataProvider`] and leaves as
//! [`engine::AssetReport`] snapshots for the presentation collaborator.

pub mod catalog;
pub mod common;
pub mod config;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod returns;
pub mod services;
pub mod signals;

pub use engine::{AnalyticsEngine, AssetReport};
pub use error::{EngineError, Result};
