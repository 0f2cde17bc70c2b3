/// Property-based tests using proptest
/// Tests invariants and properties that should hold for all inputs
use proptest::prelude::*;
use scheme_bot_api::catalog::SchemeCatalog;
use scheme_bot_api::extractor::{extract_age, extract_entities, extract_income};
use scheme_bot_api::formatter::format_response;
use scheme_bot_api::language::detect_language;
use scheme_bot_api::matcher::match_schemes;

// Property: extraction should never panic
proptest! {
    #[test]
    fn extraction_never_panics(message in "\\PC*") {
        let _ = extract_entities(&message);
    }

    #[test]
    fn language_detection_never_panics(message in "\\PC*") {
        let _ = detect_language(&message);
    }
}

// Property: every in-range age round-trips through "age N"
proptest! {
    #[test]
    fn age_in_range_round_trips(age in 0u32..=120u32) {
        prop_assert_eq!(extract_age(&format!("age {}", age)), Some(age));
    }

    #[test]
    fn age_out_of_range_absent(age in 121u32..=100_000u32) {
        prop_assert_eq!(extract_age(&format!("age {}", age)), None);
    }

    #[test]
    fn positive_income_round_trips(income in 1u64..=1_000_000_000u64) {
        prop_assert_eq!(extract_income(&format!("income {}", income)), Some(income));
    }

    #[test]
    fn age_and_income_are_independent(age in 0u32..=120u32, income in 1u64..=1_000_000u64) {
        let entities = extract_entities(&format!("age {} income {}", age, income));
        prop_assert_eq!(entities.age, Some(age));
        prop_assert_eq!(entities.income, Some(income));
    }
}

// Property: matcher output bounds and determinism
proptest! {
    #[test]
    fn matcher_returns_at_most_three(query in "\\PC{0,100}") {
        let catalog = SchemeCatalog::embedded().unwrap();
        let results = match_schemes(&catalog, &query, None, None);
        prop_assert!(results.len() <= 3);
    }

    #[test]
    fn matcher_is_deterministic(
        query in "[a-z ]{0,40}",
        age in proptest::option::of(0u32..=120u32),
        income in proptest::option::of(1u64..=100_000u64)
    ) {
        let catalog = SchemeCatalog::embedded().unwrap();
        let first: Vec<&str> = match_schemes(&catalog, &query, age, income)
            .iter().map(|s| s.id.as_str()).collect();
        let second: Vec<&str> = match_schemes(&catalog, &query, age, income)
            .iter().map(|s| s.id.as_str()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn eligibility_filter_only_narrows(
        query in "[a-z ]{1,40}",
        age in 0u32..=120u32
    ) {
        let catalog = SchemeCatalog::embedded().unwrap();
        let unfiltered = match_schemes(&catalog, &query, None, None);
        let filtered = match_schemes(&catalog, &query, Some(age), None);
        // Filtering can only remove candidates, never add new ones beyond
        // the cap refilling from lower-ranked schemes.
        for scheme in &filtered {
            prop_assert!(
                unfiltered.iter().any(|s| s.id == scheme.id)
                    || unfiltered.len() == 3,
                "scheme {} appeared only under filtering",
                scheme.id
            );
        }
    }
}

// Property: formatter totality
proptest! {
    #[test]
    fn formatter_never_panics_on_any_language(lang in "\\PC{0,10}") {
        let text = format_response(&[], &lang);
        prop_assert!(!text.is_empty());
    }
}
