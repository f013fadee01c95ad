//! Currency formatting for every amount the storefront displays.
//!
//! Amounts are rendered with a fixed taka glyph followed by the number in the
//! configured locale: digit set, thousands grouping, and up to three fraction
//! digits with trailing zeros dropped. Non-finite amounts render as zero.

use std::fmt;
use std::str::FromStr;

/// Currency glyph prefixed to every amount.
pub const CURRENCY_GLYPH: &str = "৳";

/// Maximum number of fraction digits shown.
const MAX_FRACTION_DIGITS: usize = 3;

const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Locales supported for money formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoneyLocale {
    /// Bengali digits, South-Asian grouping (`১,০০,০০০`).
    #[default]
    BnBd,
    /// Latin digits, South-Asian grouping (`1,00,000`).
    EnIn,
    /// Latin digits, groups of three (`100,000`).
    EnUs,
}

impl MoneyLocale {
    /// Size of every digit group left of the lowest three digits.
    fn leading_group_size(self) -> usize {
        match self {
            MoneyLocale::BnBd | MoneyLocale::EnIn => 2,
            MoneyLocale::EnUs => 3,
        }
    }

    fn localize_digit(self, c: char) -> char {
        match (self, c.to_digit(10)) {
            (MoneyLocale::BnBd, Some(d)) => BENGALI_DIGITS[d as usize],
            _ => c,
        }
    }
}

impl fmt::Display for MoneyLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyLocale::BnBd => write!(f, "bn-BD"),
            MoneyLocale::EnIn => write!(f, "en-IN"),
            MoneyLocale::EnUs => write!(f, "en-US"),
        }
    }
}

impl FromStr for MoneyLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bn-bd" | "bn" => Ok(MoneyLocale::BnBd),
            "en-in" => Ok(MoneyLocale::EnIn),
            "en-us" | "en" => Ok(MoneyLocale::EnUs),
            other => Err(format!(
                "unsupported money locale \"{other}\" (expected bn-BD, en-IN or en-US)"
            )),
        }
    }
}

/// Formats `amount` with the currency glyph and locale-aware grouping.
///
/// ```
/// use greenearth_core::{format_money, MoneyLocale};
///
/// assert_eq!(format_money(1350.0, MoneyLocale::EnUs), "৳1,350");
/// assert_eq!(format_money(f64::NAN, MoneyLocale::EnUs), "৳0");
/// ```
#[must_use]
pub fn format_money(amount: f64, locale: MoneyLocale) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let rendered = format!("{:.*}", MAX_FRACTION_DIGITS, amount.abs());
    let (int_part, frac_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let is_zero = rendered.bytes().all(|b| b == b'0' || b == b'.');

    let mut out = String::from(CURRENCY_GLYPH);
    if amount < 0.0 && !is_zero {
        out.push('-');
    }
    out.extend(
        group_digits(int_part, locale.leading_group_size())
            .chars()
            .map(|c| locale.localize_digit(c)),
    );
    if !frac_part.is_empty() {
        out.push('.');
        out.extend(frac_part.chars().map(|c| locale.localize_digit(c)));
    }
    out
}

/// Inserts `,` separators into an ASCII digit string: the lowest three digits
/// form one group, everything above is split into groups of `leading`.
fn group_digits(int_part: &str, leading: usize) -> String {
    if int_part.len() <= 3 {
        return int_part.to_owned();
    }
    let (head, last_three) = int_part.split_at(int_part.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(leading);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(last_three);
    groups.join(",")
}
