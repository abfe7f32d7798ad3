use codapkit_cases::{summarize, AttrId, AttributeValue, Case};
use codapkit_core::format_number;
use proptest::prelude::*;

const ATTR: AttrId = AttrId(1);

fn cases_of(values: Vec<AttributeValue>) -> Vec<Case> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| Case::new(i as u64).with_value(ATTR, v))
        .collect()
}

proptest! {
    #[test]
    fn numeric_values_summarize_as_range(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..40)) {
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let (min, max) = (format_number(min, 2), format_number(max, 2));
        let expected = if min == max { min } else { format!("{} – {}", min, max) };

        let cases = cases_of(values.into_iter().map(AttributeValue::from).collect());
        prop_assert_eq!(summarize(&cases, ATTR, ""), expected);
    }

    #[test]
    fn unit_is_appended_verbatim(value in -1000i32..1000, unit in "[ a-z%]{0,4}") {
        let cases = cases_of(vec![AttributeValue::from(value)]);
        prop_assert_eq!(summarize(&cases, ATTR, &unit), format!("{}{}", value, unit));
    }

    #[test]
    fn single_word_is_its_own_summary(word in "[a-z]{1,8}", copies in 1usize..6) {
        let cases = cases_of(vec![AttributeValue::from(word.as_str()); copies]);
        prop_assert_eq!(summarize(&cases, ATTR, ""), word);
    }

    #[test]
    fn many_words_are_counted(words in prop::collection::btree_set("[a-z]{1,8}", 3..10)) {
        let count = words.len();
        let cases = cases_of(words.into_iter().map(AttributeValue::from).collect());
        prop_assert_eq!(summarize(&cases, ATTR, ""), format!("{} values", count));
    }
}

#[test]
fn test_order_of_first_appearance() {
    let cases = cases_of(vec!["blue".into(), "red".into(), "blue".into()]);
    assert_eq!(summarize(&cases, ATTR, ""), "blue, red");
}
