use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// One daily observation: timestamp and closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }
}

/// An ordered closing-price history for one symbol.
///
/// Validated on construction: non-empty, timestamps strictly increasing.
/// The engine only ever reads a series; nothing mutates it after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(EngineError::InvalidInput("empty price series".to_string()));
        }
        for pair in points.windows(2) {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(EngineError::InvalidInput(format!(
                    "timestamps not strictly increasing at {}",
                    pair[1].timestamp
                )));
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        false // non-empty by construction
    }

    /// Closing prices in series order.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn latest(&self) -> &PricePoint {
        self.points.last().expect("non-empty by construction")
    }

    /// The observation `n` back from the latest, if the history reaches.
    pub fn nth_from_end(&self, n: usize) -> Option<&PricePoint> {
        self.points.len().checked_sub(n + 1).map(|i| &self.points[i])
    }

    pub fn first(&self) -> &PricePoint {
        self.points.first().expect("non-empty by construction")
    }
}
