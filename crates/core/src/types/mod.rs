//! Shared enum types for user preferences and view state

use serde::{Deserialize, Serialize};

/// Display currency. Catalog prices are stored in TRY (the canonical
/// currency); conversion to USD/EUR happens at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Try,
    Usd,
    Eur,
}

impl Currency {
    /// Currency symbol prefixed to formatted amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Try => "₺",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    /// Human-readable name (Turkish for TRY, as displayed in the UI)
    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Try => "Türk Lirası",
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Currency::Try => "🇹🇷",
            Currency::Usd => "🇺🇸",
            Currency::Eur => "🇪🇺",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Try
    }
}

/// Timeframe for percentage-change display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "7d")]
    D7,
    #[serde(rename = "30d")]
    D30,
    #[serde(rename = "1y")]
    Y1,
}

impl Timeframe {
    /// All timeframes in display order
    pub const ALL: [Timeframe; 5] = [
        Timeframe::H1,
        Timeframe::H24,
        Timeframe::D7,
        Timeframe::D30,
        Timeframe::Y1,
    ];

    /// Turkish label ("24 Saat")
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::H1 => "1 Saat",
            Timeframe::H24 => "24 Saat",
            Timeframe::D7 => "7 Gün",
            Timeframe::D30 => "30 Gün",
            Timeframe::Y1 => "1 Yıl",
        }
    }

    /// Short Turkish label ("24S")
    pub fn label_short(&self) -> &'static str {
        match self {
            Timeframe::H1 => "1S",
            Timeframe::H24 => "24S",
            Timeframe::D7 => "7G",
            Timeframe::D30 => "30G",
            Timeframe::Y1 => "1Y",
        }
    }
}

impl Default for Timeframe {
    fn default() -> Self {
        Timeframe::H24
    }
}

/// UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

/// Cookie consent choice. Absent until the user answers the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookieConsent {
    Accepted,
    Rejected,
}

/// A sentiment vote cast by the current user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Bullish,
    Bearish,
}

/// Sortable columns of the market table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Rank,
    Name,
    Price,
    /// Percentage change at the currently selected timeframe
    Change,
    MarketCap,
    Volume,
}

impl SortField {
    /// Direction applied when the user switches to this field.
    /// Rank reads best ascending; every other field starts descending.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            SortField::Rank => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }
}

impl Default for SortField {
    fn default() -> Self {
        SortField::Rank
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_serde_roundtrip() {
        let json = serde_json::to_string(&Timeframe::D7).unwrap();
        assert_eq!(json, "\"7d\"");
        let back: Timeframe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Timeframe::D7);
    }

    #[test]
    fn test_default_sort_directions() {
        assert_eq!(SortField::Rank.default_direction(), SortDirection::Ascending);
        assert_eq!(SortField::Price.default_direction(), SortDirection::Descending);
        assert_eq!(SortField::Change.default_direction(), SortDirection::Descending);
        assert_eq!(SortField::Name.default_direction(), SortDirection::Descending);
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(Currency::Try.symbol(), "₺");
        assert_eq!(Currency::default(), Currency::Try);
    }
}
