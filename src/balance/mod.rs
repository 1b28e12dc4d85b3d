//! Statement balances in the bank's European notation: `1.234,56€`.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ParseError;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

// Integer part with dot thousands groups (or none), a comma, decimals.
static COMMA_DECIMAL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?P<int>[0-9]{1,3}(?:\.[0-9]{3})+|[0-9]*),(?P<frac>[0-9]*)$").ok()
});

static DOT_DECIMAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?P<int>[0-9]*)(?:\.(?P<frac>[0-9]*))?$").ok());

/// Parse a balance with the default `€` symbol.
pub fn parse_balance(text: &str) -> Result<Decimal, ParseError> {
    parse_balance_with_symbol(text, DEFAULT_CURRENCY_SYMBOL)
}

pub fn parse_balance_with_symbol(text: &str, symbol: &str) -> Result<Decimal, ParseError> {
    let mut s = text.trim();
    if !symbol.is_empty() {
        s = s.strip_suffix(symbol).unwrap_or(s).trim_end();
    }

    let negative = s.starts_with('-');
    if let Some(rest) = s.strip_prefix('-').or_else(|| s.strip_prefix('+')) {
        s = rest.trim_start();
    }

    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let pattern = if s.contains(',') {
        &*COMMA_DECIMAL
    } else {
        &*DOT_DECIMAL
    };
    let caps = pattern
        .as_ref()
        .and_then(|re| re.captures(s))
        .ok_or_else(|| ParseError::Invalid(text.to_string()))?;

    let int_part: String = caps
        .name("int")
        .map_or("", |m| m.as_str())
        .chars()
        .filter(|c| *c != '.')
        .collect();
    let frac_part = caps.name("frac").map_or("", |m| m.as_str());
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(ParseError::Invalid(text.to_string()));
    }

    let literal = format!(
        "{}.{}",
        if int_part.is_empty() { "0" } else { int_part.as_str() },
        if frac_part.is_empty() { "0" } else { frac_part }
    );
    let value =
        Decimal::from_str(&literal).map_err(|_| ParseError::OutOfRange(text.to_string()))?;

    Ok(if negative { -value } else { value })
}

/// The view's fallback policy: a balance that cannot be read is shown as
/// zero instead of failing the whole row.
pub fn parse_balance_or_default(text: &str) -> Decimal {
    parse_balance_or_default_with_symbol(text, DEFAULT_CURRENCY_SYMBOL)
}

pub fn parse_balance_or_default_with_symbol(text: &str, symbol: &str) -> Decimal {
    match parse_balance_with_symbol(text, symbol) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("{e}; treating balance as 0");
            Decimal::ZERO
        }
    }
}

/// Format a balance the way the statement prints it.
/// e.g. `-1234.5` → `"-1.234,50€"`
pub fn format_balance(val: Decimal) -> String {
    let abs = val
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_dots: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(".");

    if val < Decimal::ZERO && !abs.is_zero() {
        format!("-{with_dots},{dec_part}{DEFAULT_CURRENCY_SYMBOL}")
    } else {
        format!("{with_dots},{dec_part}{DEFAULT_CURRENCY_SYMBOL}")
    }
}
