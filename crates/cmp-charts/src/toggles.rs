//! Legend toggle state, keyed by measure name so revisiting a measure
//! restores its toggles.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct LegendToggles {
    hidden: HashMap<String, HashSet<String>>,
}

impl LegendToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips visibility of one series. Missing entries default to visible.
    pub fn toggle(&mut self, measure: &str, key: &str) {
        let entry = self.hidden.entry(measure.to_string()).or_default();
        if !entry.remove(key) {
            entry.insert(key.to_string());
        }
    }

    pub fn is_hidden(&self, measure: &str, key: &str) -> bool {
        self.hidden
            .get(measure)
            .is_some_and(|keys| keys.contains(key))
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn double_toggle_restores_visibility(
            measure in "[A-Za-z ]{1,24}",
            key in "[a-z_]{1,16}",
        ) {
            let mut toggles = LegendToggles::new();
            prop_assert!(!toggles.is_hidden(&measure, &key));

            toggles.toggle(&measure, &key);
            prop_assert!(toggles.is_hidden(&measure, &key));

            toggles.toggle(&measure, &key);
            prop_assert!(!toggles.is_hidden(&measure, &key));
        }

        #[test]
        fn toggles_are_isolated_per_measure(
            key in "[a-z_]{1,16}",
        ) {
            let mut toggles = LegendToggles::new();
            toggles.toggle("Freight Reliability", &key);

            prop_assert!(toggles.is_hidden("Freight Reliability", &key));
            prop_assert!(!toggles.is_hidden("Travel Times", &key));
        }
    }
}
