//! Currency rendering.

use stockdesk_core::Money;

use crate::options::FormatOptions;

/// Insert a comma between every group of three digits: `1234567` → `1,234,567`.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `₹1,000`, `₹250.50`, `-₹5`.
///
/// Cents are shown only when non-zero.
pub fn format_currency(amount: Money, opts: &FormatOptions) -> String {
    let minor = amount.minor();
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    let (whole, cents) = (abs / 100, abs % 100);

    let mut out = format!("{sign}{}{}", opts.currency_symbol, group_digits(whole));
    if cents != 0 {
        out.push_str(&format!(".{cents:02}"));
    }
    out
}

/// `quantity × unit_cost`, or `None` on overflow.
pub fn line_total(quantity: i64, unit_cost: Money) -> Option<Money> {
    unit_cost.checked_mul(quantity)
}

/// Rendered line total; the placeholder when either side is absent.
pub fn format_line_total(quantity: Option<i64>, unit_cost: Option<Money>, opts: &FormatOptions) -> String {
    match (quantity, unit_cost) {
        (Some(q), Some(cost)) => match line_total(q, cost) {
            Some(total) => format_currency(total, opts),
            None => opts.placeholder.clone(),
        },
        _ => opts.placeholder.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn groups_thousands_with_symbol_prefix() {
        let opts = FormatOptions::default();
        assert_eq!(format_currency(Money::from_major(1000), &opts), "₹1,000");
        assert_eq!(format_currency(Money::from_major(89_000), &opts), "₹89,000");
        assert_eq!(format_currency(Money::from_major(1_234_567), &opts), "₹1,234,567");
        assert_eq!(format_currency(Money::from_major(250), &opts), "₹250");
        assert_eq!(format_currency(Money::ZERO, &opts), "₹0");
    }

    #[test]
    fn shows_cents_only_when_present() {
        let opts = FormatOptions::default();
        assert_eq!(format_currency(Money::from_minor(25_050), &opts), "₹250.50");
        assert_eq!(format_currency(Money::from_minor(100_007), &opts), "₹1,000.07");
    }

    #[test]
    fn negative_amounts_lead_with_sign() {
        let opts = FormatOptions::default().with_currency_symbol("$");
        assert_eq!(format_currency(Money::from_major(-5), &opts), "-$5");
        assert_eq!(format_currency(Money::from_minor(-123_456), &opts), "-$1,234.56");
    }

    #[test]
    fn line_total_multiplies_at_display_time() {
        let opts = FormatOptions::default();
        assert_eq!(
            format_line_total(Some(5), Some(Money::from_major(89_000)), &opts),
            "₹445,000"
        );
        assert_eq!(format_line_total(None, Some(Money::from_major(1)), &opts), "-");
        assert_eq!(format_line_total(Some(i64::MAX), Some(Money::from_major(2)), &opts), "-");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: removing the separators gives back the number, and no group
        /// after the first has other than three digits.
        #[test]
        fn grouping_is_lossless(n in any::<u64>()) {
            let grouped = group_digits(n);
            prop_assert_eq!(grouped.replace(',', ""), n.to_string());

            let groups: Vec<&str> = grouped.split(',').collect();
            prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
            for g in &groups[1..] {
                prop_assert_eq!(g.len(), 3);
            }
        }
    }
}
