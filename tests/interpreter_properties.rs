//! Property tests for the schema-bounded invariants

use proptest::prelude::*;

use semantic_shell::command::classifier::classify;
use semantic_shell::core::types::NodeId;
use semantic_shell::entity::element::{Element, ElementKind};
use semantic_shell::entity::registry::Registry;

proptest! {
    #[test]
    fn prop_metric_value_always_in_range(raw in any::<i64>()) {
        let mut element = Element::new(NodeId::new(1), ElementKind::metric(), "M");
        let stored = element.set_value(raw).unwrap();
        prop_assert!((0..=100).contains(&stored));
    }

    #[test]
    fn prop_data_view_holds_most_recent_window(
        items in proptest::collection::vec(".{0,16}", 0..120)
    ) {
        let mut element = Element::new(NodeId::new(1), ElementKind::data_view(), "D");
        for item in &items {
            element.append_item(item);
        }
        match &element.kind {
            ElementKind::DataView { items: stored } => {
                prop_assert!(stored.len() <= 50);
                let skip = items.len().saturating_sub(50);
                let expected: Vec<String> = items[skip..].to_vec();
                let actual: Vec<String> = stored.iter().cloned().collect();
                prop_assert_eq!(actual, expected);
            }
            _ => prop_assert!(false, "variant changed under mutation"),
        }
    }

    #[test]
    fn prop_id_textual_form_matches_pattern(raw in any::<u16>()) {
        let id = NodeId::new(raw);
        let text = id.to_string();
        prop_assert!(text.starts_with(NodeId::PREFIX));
        prop_assert_eq!(text.len(), NodeId::PREFIX.len() + NodeId::SUFFIX_LEN);
        prop_assert_eq!(text.parse::<NodeId>().unwrap(), id);
    }

    #[test]
    fn prop_registry_ids_unique(seed in any::<u64>(), count in 1usize..32) {
        let mut registry = Registry::with_seed(seed);
        let mut ids = Vec::new();
        for _ in 0..count {
            ids.push(registry.create(ElementKind::base(), "El").unwrap().id);
        }
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn prop_titles_never_exceed_limit(title in ".{0,64}") {
        let element = Element::new(NodeId::new(1), ElementKind::base(), &title);
        prop_assert!(element.title.chars().count() <= 32);
    }

    #[test]
    fn prop_classifier_is_pure(text in ".{0,40}", has_target in any::<bool>()) {
        let lowered = text.to_lowercase();
        prop_assert_eq!(
            classify(&lowered, has_target),
            classify(&lowered, has_target)
        );
    }
}
