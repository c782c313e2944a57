// PointKit
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Default decimal rendering of floating-point values.
//!
//! Numbers are printed with the shortest digit string that round-trips,
//! switching to exponent notation outside `1e-6 <= |v| < 1e21`.
//! Integral values carry no fractional part, negative zero prints as `0`
//! and non-finite values print as `NaN`, `Infinity` or `-Infinity`.

use num_traits::Float;
use std::fmt::LowerExp;

/// Largest decimal exponent rendered without exponent notation.
const MAX_FIXED_EXPONENT: i32 = 21;

/// Smallest decimal exponent rendered without exponent notation.
const MIN_FIXED_EXPONENT: i32 = -6;

/// Renders `value` in default decimal form.
pub fn format_number<T>(value: T) -> String
where
    T: Float + LowerExp,
{
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            "-Infinity".into()
        } else {
            "Infinity".into()
        };
    }
    if value.is_zero() {
        return "0".into();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits, e.g. "1.25e-3"
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{sign}{scientific}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{sign}{scientific}");
    };

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    format!("{sign}{}", layout_digits(&digits, exponent + 1))
}

/// Places the decimal point for `0.<digits> * 10^point`.
fn layout_digits(digits: &str, point: i32) -> String {
    let len = digits.len() as i32;

    if len <= point && point <= MAX_FIXED_EXPONENT {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= MAX_FIXED_EXPONENT {
        let (integral, fractional) = digits.split_at(point as usize);
        format!("{integral}.{fractional}")
    } else if MIN_FIXED_EXPONENT < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(-point as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let exponent = point - 1;
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{first}e{exponent_sign}{}", exponent.abs())
        } else {
            format!("{first}.{rest}e{exponent_sign}{}", exponent.abs())
        }
    }
}
