//! Property tests for the classifiers, the condition composer and the alias providers.

use std::collections::HashSet;

use proptest::prelude::*;
use symscope::deobfuscation::{
    shannon_entropy, BaseCondition, Condition, EntropyCondition, LengthCondition,
    PatternCondition, RenameCondition,
};
use symscope::prelude::*;

proptest! {
    #[test]
    fn entropy_of_distinct_chars_is_log2_len(chars in prop::collection::hash_set(prop::char::range('!', '~'), 1..60)) {
        let name: String = chars.iter().collect();
        let expected = (chars.len() as f64).log2();
        prop_assert!((shannon_entropy(&name) - expected).abs() < 0.01);
    }

    #[test]
    fn entropy_of_repeated_char_is_zero(c in prop::char::range('!', '~'), len in 1usize..80) {
        let name: String = std::iter::repeat(c).take(len).collect();
        prop_assert_eq!(shannon_entropy(&name), 0.0);
    }

    #[test]
    fn confident_names_are_structural_or_attributed(name in "\\PC{0,16}") {
        let classifier = PatternClassifier::default();
        if classifier.obfuscation_confidence(&name) >= 50 {
            prop_assert!(
                classifier.entropy().has_structural_obfuscator_pattern(&name)
                    || classifier.detect_obfuscator_type(&name).is_some()
            );
        }
    }

    #[test]
    fn forbid_wins_in_any_order(
        order in Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
        name in "[a-z]{1,3}",
    ) {
        let all = [
            Condition::Base(BaseCondition),
            Condition::ObfuscatorPattern(PatternCondition::default()),
            Condition::Entropy(EntropyCondition::default()),
            Condition::Length(LengthCondition::default()),
        ];
        let conditions = order.iter().map(|&i| all[i].clone()).collect();
        let rename = RenameCondition::new(conditions);

        let owner = ClassSymbol::new("com.example.Owner");
        let mut field = FieldSymbol::new(name, None);
        field.keep = true;
        prop_assert!(!rename.decide(&SymbolRef::Field(&field, &owner)));
    }

    #[test]
    fn aliases_are_unique_per_kind(names in prop::collection::vec("[a-z]{1,2}[0-9]{0,2}", 1..80)) {
        let owner = ClassSymbol::new("com.example.Owner");
        let mut providers: Vec<Box<dyn AliasProvider>> = vec![
            Box::new(IndexAliasProvider::default()),
            Box::new(SemanticAliasProvider::default()),
            Box::new(SemanticAliasProvider::default().with_role_prefixes(false)),
        ];

        for provider in &mut providers {
            let mut seen = HashSet::new();
            for name in &names {
                let alias = provider.for_field(&FieldSymbol::new(name.as_str(), None), &owner);
                prop_assert!(seen.insert(alias));
            }
            prop_assert_eq!(seen.len(), names.len());
        }
    }

    #[test]
    fn analysis_is_stable(names in prop::collection::vec("[a-zA-Z]{1,10}", 0..30)) {
        let set = SymbolSet::builder()
            .classes(names.iter().map(|n| ClassSymbol::new(format!("com.example.{n}"))))
            .build();
        let analyzer = DeobfuscationAnalyzer::new(&set);
        let first = analyzer.analyze().clone();
        let second = analyzer.analyze();
        prop_assert_eq!(&first, second);
        prop_assert!(first.overall_rate >= 0.0 && first.overall_rate <= 100.0);
    }
}
