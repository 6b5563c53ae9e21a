//! Market data provider interface for the external data collaborator.
//!
//! The engine never issues network calls itself; a caller supplies an
//! implementation of this trait (HTTP client, CSV replay, fixture data).

use crate::models::PriceSeries;

pub trait MarketDataProvider {
    /// Daily price history for a symbol over roughly the last
    /// `lookback_days` calendar days. Implementations return whatever
    /// ordered history they have; the engine degrades gracefully when it
    /// is shorter than requested.
    fn price_history(
        &self,
        symbol: &str,
        lookback_days: usize,
    ) -> Result<PriceSeries, Box<dyn std::error::Error>>;
}
