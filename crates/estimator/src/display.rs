//! Text formatting for the five calculator outputs.
//!
//! CO2e and token counts are shown with two fixed decimals. Currency amounts
//! use Indonesian grouping: `.` between thousands, `,` before the fraction,
//! and at most three fraction digits with trailing zeros dropped.

use serde::{Deserialize, Serialize};

use crate::config::{CURRENCY_MAX_FRACTION_DIGITS, METRIC_DECIMALS};
use crate::reward_estimator::Estimate;

/// Rendered result, one string per output field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateDisplay {
    pub co2_reduction: String,
    pub tokens: String,
    pub token_value: String,
    pub product_income: String,
    pub total_income: String,
    /// Set when the numbers above are the zero fallback for bad input.
    pub invalid_reason: Option<String>,
}

impl Default for EstimateDisplay {
    fn default() -> Self {
        Self::from_estimate(&Estimate::default())
    }
}

impl EstimateDisplay {
    pub fn from_estimate(estimate: &Estimate) -> Self {
        let result = estimate.result();
        Self {
            co2_reduction: fmt_metric(result.co2_reduction_monthly_kg),
            tokens: fmt_metric(result.tokens),
            token_value: fmt_rupiah(result.token_value),
            product_income: fmt_rupiah(result.product_income),
            total_income: fmt_rupiah(result.total_income),
            invalid_reason: estimate.invalid_reason().map(|r| r.to_string()),
        }
    }

    /// Label/value rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 5] {
        [
            ("Pengurangan CO2e (kg/bulan)", self.co2_reduction.as_str()),
            ("Token 2BC", self.tokens.as_str()),
            ("Nilai Token (Rp)", self.token_value.as_str()),
            ("Pendapatan Produk (Rp)", self.product_income.as_str()),
            ("Total Pendapatan (Rp)", self.total_income.as_str()),
        ]
    }
}

/// Fixed two-decimal formatting for CO2e and token counts.
pub fn fmt_metric(value: f64) -> String {
    format!("{:.*}", METRIC_DECIMALS, value)
}

/// Indonesian-locale grouped formatting for currency amounts.
pub fn fmt_rupiah(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let rounded = format!("{:.*}", CURRENCY_MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
