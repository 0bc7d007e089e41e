use crate::config::Config;

/// Formats a price given in cents, e.g. `16500` -> `"$165.00"`.
pub fn format_price(cents: u32) -> String {
    format!(
        "{}{}.{:02}",
        Config::CURRENCY_SYMBOL,
        cents / 100,
        cents % 100
    )
}

/// Prefixes `noun` with `count`, adding an `s` unless the count is exactly one.
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
