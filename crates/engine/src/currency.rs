//! Currency conversion and display formatting
//!
//! Catalog values are TRY. Conversion is a two-hop lookup through the USD
//! pivot using a static rate table; a live FX feed is intentionally not a
//! requirement. Formatting mirrors the locale conventions of the target
//! currency: tr-TR grouping for TRY, en-US for USD and EUR.

use kripto_core::Currency;

/// Exchange rates relative to USD
#[derive(Debug, Clone, Copy)]
pub struct ExchangeRates {
    /// TRY per 1 USD
    pub try_per_usd: f64,
    /// EUR per 1 USD
    pub eur_per_usd: f64,
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self {
            try_per_usd: 35.5,
            eur_per_usd: 0.92,
        }
    }
}

/// Converts and formats canonical-currency amounts for display
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyConverter {
    rates: ExchangeRates,
}

impl CurrencyConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rates(rates: ExchangeRates) -> Self {
        Self { rates }
    }

    /// Convert a TRY amount into the target currency (TRY → USD → target)
    pub fn convert(&self, amount_try: f64, currency: Currency) -> f64 {
        match currency {
            Currency::Try => amount_try,
            Currency::Usd => amount_try / self.rates.try_per_usd,
            Currency::Eur => amount_try / self.rates.try_per_usd * self.rates.eur_per_usd,
        }
    }

    /// Format a price with the target currency's symbol and locale.
    ///
    /// Values under 1 keep up to 6 decimals so very-low-price assets stay
    /// legible; everything else gets exactly 2. Non-finite input formats
    /// as the zero-value string.
    pub fn format_price(&self, amount_try: f64, currency: Currency) -> String {
        let amount_try = if amount_try.is_finite() { amount_try } else { 0.0 };
        let converted = self.convert(amount_try, currency);

        let (min_decimals, max_decimals) = if converted >= 1000.0 {
            (2, 2)
        } else if converted < 1.0 {
            (2, 6)
        } else {
            (2, 2)
        };

        let formatted = format_localized(converted, min_decimals, max_decimals, currency);
        format!("{}{}", currency.symbol(), formatted)
    }

    /// Format a market-cap/volume scale number with a T/B/M suffix.
    /// Non-finite input formats as the zero-value string.
    pub fn format_large_number(&self, amount_try: f64, currency: Currency) -> String {
        let amount_try = if amount_try.is_finite() { amount_try } else { 0.0 };
        let converted = self.convert(amount_try, currency);
        let symbol = currency.symbol();

        if converted >= 1e12 {
            format!("{}{:.2}T", symbol, converted / 1e12)
        } else if converted >= 1e9 {
            format!("{}{:.2}B", symbol, converted / 1e9)
        } else if converted >= 1e6 {
            format!("{}{:.2}M", symbol, converted / 1e6)
        } else {
            format!("{}{:.2}", symbol, converted)
        }
    }
}

/// Group and punctuate per the currency's locale: tr-TR uses `.` for
/// thousands and `,` for decimals, en-US the reverse
fn format_localized(value: f64, min_decimals: usize, max_decimals: usize, currency: Currency) -> String {
    let (group_sep, decimal_sep) = match currency {
        Currency::Try => ('.', ','),
        _ => (',', '.'),
    };

    let raw = format!("{:.*}", max_decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (raw, String::new()),
    };

    // Trim trailing zeros down to the minimum precision
    let mut frac = frac_part;
    while frac.len() > min_decimals && frac.ends_with('0') {
        frac.pop();
    }

    let grouped = group_thousands(&int_part, group_sep);
    let sign = if value < 0.0 { "-" } else { "" };

    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}{}{}", sign, grouped, decimal_sep, frac)
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let count = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (count - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
