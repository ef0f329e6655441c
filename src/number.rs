//! Amount parsing and printing under an explicit [`NumberFormat`].

use crate::config::NumberFormat;
use crate::error::ParseError;

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parses an amount such as `-1.234,56`, `€ 12,50`, `12,50-` or `(3,00)`.
///
/// Group separators are only allowed before the decimal separator and are
/// otherwise ignored. At most one sign marker (leading, trailing or
/// parentheses) is accepted.
pub fn parse_amount(raw: &str, format: &NumberFormat) -> Result<Decimal, ParseError> {
    let invalid = || ParseError::InvalidAmount(raw.to_string());

    let mut body = raw.trim();
    let mut signs = Vec::with_capacity(1);

    if let Some(inner) = body.strip_prefix('(').and_then(|b| b.strip_suffix(')')) {
        signs.push(true);
        body = inner.trim();
    }
    body = strip_currency(body, format.currency_symbol);

    if let Some((negative, rest)) = leading_sign(body) {
        signs.push(negative);
        body = strip_currency(rest.trim(), format.currency_symbol);
    }
    if let Some((negative, rest)) = trailing_sign(body) {
        signs.push(negative);
        body = strip_currency(rest.trim(), format.currency_symbol);
    }
    if signs.len() > 1 {
        return Err(invalid());
    }
    let negative = signs.first().copied().unwrap_or(false);

    let (int_part, frac_part) = match body.split_once(format.decimal_separator) {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (body, ""),
    };

    let int_digits: String = int_part
        .chars()
        .filter(|c| *c != format.group_separator)
        .collect();
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !is_digits(int_digits.as_str()) || !is_digits(frac_part) {
        return Err(invalid());
    }
    if int_digits.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }

    let normalized = format!(
        "{}.{}",
        if int_digits.is_empty() { "0" } else { int_digits.as_str() },
        if frac_part.is_empty() { "0" } else { frac_part },
    );
    let value = Decimal::from_str(&normalized).map_err(|_| invalid())?;

    Ok(if negative { -value } else { value })
}

/// Formats `value` with exactly `fraction_digits` decimals and grouped
/// thousands, rounding half away from zero: `-1234.56` becomes `-1.234,6`.
pub fn format_amount(value: Decimal, fraction_digits: u32, format: &NumberFormat) -> String {
    let mut rounded =
        value.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(fraction_digits);

    let plain = rounded.abs().to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, format.group_separator));
    if let Some(frac_part) = frac_part {
        out.push(format.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

fn strip_currency(s: &str, symbol: char) -> &str {
    s.strip_prefix(symbol)
        .or_else(|| s.strip_suffix(symbol))
        .map(str::trim)
        .unwrap_or(s)
}

fn leading_sign(s: &str) -> Option<(bool, &str)> {
    s.strip_prefix('-')
        .map(|rest| (true, rest))
        .or_else(|| s.strip_prefix('+').map(|rest| (false, rest)))
}

fn trailing_sign(s: &str) -> Option<(bool, &str)> {
    s.strip_suffix('-')
        .map(|rest| (true, rest))
        .or_else(|| s.strip_suffix('+').map(|rest| (false, rest)))
}
