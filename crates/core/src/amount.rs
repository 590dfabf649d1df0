//! Monetary amounts.

use rust_decimal::Decimal;

/// Amounts and balances are exact decimals.
pub type Amount = Decimal;

/// Render an amount with at least one fractional digit (`0.0`, `150.0`, `12.5`).
///
/// Trailing zeros beyond the first fractional digit are dropped, so a balance
/// built from `100.50` renders as `100.5`.
pub fn display_amount(amount: Amount) -> String {
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        format!("{normalized}.0")
    } else {
        normalized.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn whole_amounts_get_one_fractional_digit() {
        assert_eq!(display_amount(Decimal::ZERO), "0.0");
        assert_eq!(display_amount(Decimal::new(150, 0)), "150.0");
        assert_eq!(display_amount(Decimal::new(15000, 2)), "150.0");
    }

    #[test]
    fn fractional_amounts_are_trimmed() {
        assert_eq!(display_amount(Decimal::new(1250, 2)), "12.5");
        assert_eq!(display_amount(Decimal::new(-75, 1)), "-7.5");
    }
}
