use rust_decimal::{Decimal, RoundingStrategy};

/// Format as USD with thousands grouping and no cents: `$2,398`, `-$1,250`.
///
/// Rounds half away from zero to the nearest whole dollar.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_thousands(&digits);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format a percentage with two decimals: `20.00%`.
pub fn format_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", rounded)
}

fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grouping() {
        assert_eq!(format_currency(dec!(0)), "$0");
        assert_eq!(format_currency(dec!(999)), "$999");
        assert_eq!(format_currency(dec!(1000)), "$1,000");
        assert_eq!(format_currency(dec!(1234567)), "$1,234,567");
    }

    #[test]
    fn test_rounds_to_whole_dollars() {
        assert_eq!(format_currency(dec!(2398.2021)), "$2,398");
        assert_eq!(format_currency(dec!(187.5)), "$188");
        assert_eq!(format_currency(dec!(0.49)), "$0");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(dec!(-1250.4)), "-$1,250");
        // Rounds to zero, so no sign.
        assert_eq!(format_currency(dec!(-0.2)), "$0");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(dec!(20)), "20.00%");
        assert_eq!(format_percent(dec!(11.111)), "11.11%");
        assert_eq!(format_percent(dec!(9.995)), "10.00%");
    }
}
