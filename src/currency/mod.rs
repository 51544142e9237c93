//! Presentation helpers for money and percentages.

use rust_decimal::{Decimal, RoundingStrategy};

pub fn minor_units_for(code: &str) -> u32 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders `value` with `,` grouping and a fixed number of decimals.
pub fn format_number(value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.*}", precision as usize, rounded.abs());
    let (int_part, frac_part) = match body.find('.') {
        Some(pos) => body.split_at(pos),
        None => (body.as_str(), ""),
    };
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}", sign, group_digits(int_part), frac_part)
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// `1,234.50 EGP`
pub fn format_amount(amount: Decimal, code: &str) -> String {
    format!("{} {}", format_number(amount, minor_units_for(code)), code)
}

/// Like [`format_amount`] but with an explicit `+` on positive values.
pub fn format_balance(amount: Decimal, code: &str) -> String {
    let body = format_amount(amount, code);
    if amount.round_dp(minor_units_for(code)) > Decimal::ZERO {
        format!("+{}", body)
    } else {
        body
    }
}

/// `37.5%`
pub fn format_percentage(value: Decimal) -> String {
    format!("{}%", format_number(value, 1))
}
