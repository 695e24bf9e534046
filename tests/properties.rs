//! Property tests for input normalization and derivation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use salary_engine::calculation::{derive, ndfl_rate};
use salary_engine::input::{format_for_editing, normalize_amount_input, strip_whitespace};
use salary_engine::models::{SalaryAmount, list_modes};

fn any_amount() -> impl Strategy<Value = SalaryAmount> {
    (0..=SalaryAmount::MAX.value()).prop_map(|v| SalaryAmount::new(v).unwrap())
}

/// Digits with whitespace sprinkled between them, at most 14 digits.
fn digits_with_whitespace() -> impl Strategy<Value = String> {
    prop::collection::vec(
        ("[0-9]", prop::sample::select(vec!["", "", " ", "\u{a0}", "\t"])),
        0..=SalaryAmount::MAX_DIGITS,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(digit, gap)| format!("{}{}", gap, digit))
            .collect::<String>()
    })
}

proptest! {
    #[test]
    fn digits_and_whitespace_normalize_to_their_value(text in digits_with_whitespace()) {
        let stripped = strip_whitespace(&text);
        let expected = if stripped.is_empty() { 0 } else { stripped.parse::<u64>().unwrap() };

        let amount = normalize_amount_input(&text, SalaryAmount::new(1).unwrap());
        prop_assert_eq!(amount.value(), expected);
    }

    #[test]
    fn text_with_a_non_digit_keeps_current_amount(
        prefix in "[0-9]{0,5}",
        bad in "[a-zA-Z.,+\\-]",
        suffix in "[0-9]{0,5}",
        current in any_amount(),
    ) {
        let text = format!("{}{}{}", prefix, bad, suffix);
        prop_assert_eq!(normalize_amount_input(&text, current), current);
    }

    #[test]
    fn formatting_round_trips(amount in any_amount()) {
        let formatted = format_for_editing(amount);
        let back = normalize_amount_input(&strip_whitespace(&formatted), SalaryAmount::MAX);
        prop_assert_eq!(back, amount);
    }

    #[test]
    fn tax_depends_only_on_amount(amount in any_amount(), tax_included in any::<bool>()) {
        let expected = amount.to_decimal() * ndfl_rate();
        for mode in list_modes() {
            let figures = derive(mode, amount, tax_included);
            prop_assert_eq!(figures.tax_amount, expected);
        }
    }

    #[test]
    fn take_home_plus_tax_matches_employer_cost(amount in any_amount(), tax_included in any::<bool>()) {
        let figures = derive(&list_modes()[0], amount, tax_included);
        prop_assert_eq!(figures.take_home + figures.tax_amount, figures.employer_cost);
        prop_assert!(figures.take_home >= Decimal::ZERO);
        if tax_included {
            prop_assert_eq!(figures.employer_cost, amount.to_decimal());
        } else {
            prop_assert_eq!(figures.take_home, amount.to_decimal());
        }
    }

    #[test]
    fn derive_is_idempotent(amount in any_amount(), tax_included in any::<bool>(), index in 0usize..4) {
        let mode = list_modes()[index];
        prop_assert_eq!(derive(&mode, amount, tax_included), derive(&mode, amount, tax_included));
    }
}
