/// Days used to scale a daily CO2e figure to a monthly one.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Reward tokens issued per kg of CO2e reduced in a month.
pub const TOKENS_PER_KG_CO2E: f64 = 10.0;

/// Monetary value of one token (Rupiah).
pub const TOKEN_PRICE: f64 = 50.0;

/// Organic waste: 1.96 kg of waste avoids 1.5 kg CO2e per day.
pub const ORGANIC_CO2E_PER_KG: f64 = 1.5 / 1.96;

/// Decimal places shown for CO2e and token counts.
pub const METRIC_DECIMALS: usize = 2;

/// Upper bound on fraction digits shown for currency amounts.
pub const CURRENCY_MAX_FRACTION_DIGITS: usize = 3;

/// Default number of household members shown in the calculator form.
pub const DEFAULT_HOUSEHOLD_SIZE: u32 = 4;

/// Default waste weight text shown in the calculator form (kg/day).
pub const DEFAULT_WEIGHT_TEXT: &str = "1.96";
