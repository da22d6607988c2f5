//! Property tests for the validator and the diff engine.

use promptguard_prompt::{diff, validate, DiffRecord, GenerationParameters, Policy, PromptDefinition};
use proptest::prelude::*;
use std::collections::HashSet;

fn line() -> impl Strategy<Value = String> {
    "[a-c ]{0,3}"
}

fn template() -> impl Strategy<Value = String> {
    prop::collection::vec(line(), 1..5).prop_map(|lines| lines.join("\n"))
}

fn phrases() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[xyz]{1,2}", 0..4)
}

prop_compose! {
    fn definition()(
        template in template(),
        temperature in prop::option::of(prop::sample::select(vec![0.0, 0.1, 0.5, 1.0])),
        max_tokens in prop::option::of(1i64..2000),
        require_json in any::<bool>(),
        max_output_tokens in prop::option::of(-5i64..1000),
        forbidden_phrases in phrases(),
    ) -> PromptDefinition {
        PromptDefinition {
            name: "prop".to_string(),
            version: "1.0.0".to_string(),
            model: None,
            parameters: GenerationParameters { temperature, max_tokens },
            template,
            variables: Vec::new(),
            policy: Policy { require_json, max_output_tokens, forbidden_phrases },
        }
    }
}

/// Records with the removed/added sides swapped.
fn mirrored(records: &[DiffRecord]) -> HashSet<DiffRecord> {
    records
        .iter()
        .cloned()
        .map(|mut r| {
            std::mem::swap(&mut r.removed, &mut r.added);
            r
        })
        .collect()
}

proptest! {
    #[test]
    fn diff_with_itself_has_no_differences(p in definition()) {
        prop_assert!(!diff(&p, &p).has_differences());
    }

    #[test]
    fn diff_is_anti_symmetric(a in definition(), b in definition()) {
        let forward = diff(&a, &b);
        let backward = diff(&b, &a);

        let backward_set: HashSet<DiffRecord> = backward.records().iter().cloned().collect();
        prop_assert_eq!(mirrored(forward.records()), backward_set);
    }

    #[test]
    fn every_record_has_exactly_one_side(a in definition(), b in definition()) {
        for record in diff(&a, &b).records() {
            prop_assert!(record.removed.is_some() != record.added.is_some());
        }
    }

    #[test]
    fn forbidden_phrase_errors_match_occurrences(p in definition()) {
        let result = validate(&p);
        let template = p.template.to_lowercase();

        for phrase in &p.policy.forbidden_phrases {
            let expected = format!("Template contains forbidden phrase: '{}'", phrase);
            let occurs = template.contains(&phrase.to_lowercase());
            prop_assert_eq!(result.errors.contains(&expected), occurs);
        }
    }

    #[test]
    fn non_positive_output_cap_is_a_single_error(mut p in definition(), cap in -100i64..=0) {
        p.template = "plain text".to_string();
        p.policy.forbidden_phrases.clear();
        p.policy.max_output_tokens = Some(cap);

        let result = validate(&p);
        prop_assert_eq!(result.errors.len(), 1);
        prop_assert!(result.errors[0].contains("max_output_tokens"));
    }

    #[test]
    fn minimal_definition_is_clean(template in "[a-z][a-z ]{0,20}") {
        let p = PromptDefinition {
            name: "n".to_string(),
            version: "1.0.0".to_string(),
            model: None,
            parameters: GenerationParameters::default(),
            template,
            variables: Vec::new(),
            policy: Policy::default(),
        };

        let result = validate(&p);
        prop_assert!(result.is_valid());
        prop_assert!(result.warnings.is_empty());
    }
}
