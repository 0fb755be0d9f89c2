use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places shown for every amount on screen and in links
pub const DISPLAY_SCALE: u32 = 2;

/// Currency symbol used by the dashboard
pub const CURRENCY_SYMBOL: &str = "$";

/// Rounds an amount for display.
///
/// Calculations never call this; only presentation does. Midpoints round away
/// from zero so `0.125` shows as `0.13`.
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with two decimals and no symbol, e.g. `28.25`
pub fn format_plain(amount: Decimal) -> String {
    format!(
        "{:.width$}",
        round_for_display(amount),
        width = DISPLAY_SCALE as usize
    )
}

/// Formats an amount for display, e.g. `$28.25`
pub fn format_amount(amount: Decimal) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_plain(amount))
}

/// Formats a percentage rate without trailing zeros, e.g. `13%` or `14.5%`
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}
