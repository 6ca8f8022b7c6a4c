use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{CERTIFICATE_DATE_FORMAT, DISPLAY_DECIMAL_PRECISION};

/// "1,234,567.89": thousands separators and two decimals, half away from zero.
pub fn format_amount(value: f64) -> String {
    let fixed = match value.to_string().parse::<Decimal>() {
        Ok(d) => format!(
            "{:.2}",
            d.round_dp_with_strategy(
                DISPLAY_DECIMAL_PRECISION,
                RoundingStrategy::MidpointAwayFromZero
            )
        ),
        Err(_) => format!("{:.2}", value),
    };

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if grouped.chars().all(|c| c == '0' || c == ',') && fraction.chars().all(|c| c == '0') {
        return format!("{}.{}", grouped, fraction);
    }
    format!("{}{}.{}", sign, grouped, fraction)
}

/// Like `format_amount`, but zero shows as "-".
pub fn format_amount_or_dash(value: f64) -> String {
    if value == 0.0 {
        "-".to_string()
    } else {
        format_amount(value)
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(CERTIFICATE_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(1000.0), "1,000.00");
        assert_eq!(format_amount(550_000.0), "550,000.00");
        assert_eq!(format_amount(4_375_291.5), "4,375,291.50");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        assert_eq!(format_amount(2.675), "2.68");
        assert_eq!(format_amount(-1234.565), "-1,234.57");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn test_dash_for_zero() {
        assert_eq!(format_amount_or_dash(0.0), "-");
        assert_eq!(format_amount_or_dash(50_000.0), "50,000.00");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(format_date(date), "09/01/2025");
    }
}
