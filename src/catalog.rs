//! Static asset catalog: symbol to display metadata.
//!
//! The engine consumes this only as an iteration key; display metadata is
//! for the presentation collaborator. The table is immutable and passed by
//! reference wherever it is needed.

use serde::{Deserialize, Serialize};

/// Asset class, used for grouping in summary tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    Commodity,
    Etf,
    EquityIndex,
}

/// Display metadata for one tracked symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetInfo {
    pub symbol: String,
    pub name: String,
    pub emoji: String,
    pub unit: String,
    pub category: AssetCategory,
}

/// Immutable list of tracked assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetCatalog {
    assets: Vec<AssetInfo>,
}

impl AssetCatalog {
    pub fn new(assets: Vec<AssetInfo>) -> Self {
        Self { assets }
    }

    /// The tracked basket: commodities, tech ETFs, and Asian equity indices.
    pub fn default_basket() -> Self {
        let entry = |symbol: &str, name: &str, emoji: &str, unit: &str, category| AssetInfo {
            symbol: symbol.to_string(),
            name: name.to_string(),
            emoji: emoji.to_string(),
            unit: unit.to_string(),
            category,
        };
        Self::new(vec![
            entry("GC=F", "Gold", "🥇", "USD/oz", AssetCategory::Commodity),
            entry("SI=F", "Silver", "🥈", "USD/oz", AssetCategory::Commodity),
            entry("HG=F", "Copper", "🔶", "USD/lb", AssetCategory::Commodity),
            entry("AIQ", "Global X AI & Tech ETF", "🤖", "USD/share", AssetCategory::Etf),
            entry("SMH", "VanEck Semiconductors", "💾", "USD/share", AssetCategory::Etf),
            entry("^KS11", "South Korea KOSPI", "🇰🇷", "KOSPI", AssetCategory::EquityIndex),
            entry("^TWII", "Taiwan Weighted", "🇹🇼", "TWII", AssetCategory::EquityIndex),
            entry("^JKSE", "Jakarta Stock Exchange", "🇮🇩", "IDX", AssetCategory::EquityIndex),
            entry("^NSEI", "India Nifty 50", "🇮🇳", "NSEI", AssetCategory::EquityIndex),
            entry("^STI", "Singapore Straits Times", "🇸🇬", "STI", AssetCategory::EquityIndex),
            entry("^KLSE", "Malaysia KLSE", "🇲🇾", "KLSE", AssetCategory::EquityIndex),
        ])
    }

    pub fn assets(&self) -> &[AssetInfo] {
        &self.assets
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(|a| a.symbol.as_str())
    }

    pub fn get(&self, symbol: &str) -> Option<&AssetInfo> {
        self.assets.iter().find(|a| a.symbol == symbol)
    }

    pub fn in_category(&self, category: AssetCategory) -> impl Iterator<Item = &AssetInfo> {
        self.assets.iter().filter(move |a| a.category == category)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
