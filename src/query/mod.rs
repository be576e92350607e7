// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lookup controls: which occurrences a lookup shows and which buckets a modification acts on.

mod find;

use std::collections::BTreeSet;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use smol_str::SmolStr;

pub use find::FindFilter;

use crate::model::FeatureName;

/// Which occurrences of the selected text a lookup reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FreeState {
    #[default]
    All,
    /// Only occurrences not intersecting an existing entity.
    Free,
    /// Only occurrences intersecting an existing entity.
    Bound,
}

impl FreeState {
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Free,
            Self::Free => Self::Bound,
            Self::Bound => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Free => "free",
            Self::Bound => "bound",
        }
    }
}

impl fmt::Display for FreeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a modification acts on the find-filtered buckets or on all of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScopeMode {
    #[default]
    Filtered,
    All,
}

/// Per-feature value selection used to narrow the entity listing, in configured feature order.
/// The empty string stands for "no value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueFilter {
    selected: Vec<(FeatureName, BTreeSet<SmolStr>)>,
}

impl ValueFilter {
    pub fn new(features: &[FeatureName]) -> Self {
        Self { selected: features.iter().map(|feature| (feature.clone(), BTreeSet::new())).collect() }
    }

    fn values(&self, feature: &str) -> Option<&BTreeSet<SmolStr>> {
        self.selected.iter().find(|(name, _)| name.as_str() == feature).map(|(_, values)| values)
    }

    /// Flips one value; returns whether it is selected afterwards, or `None` for features the
    /// filter was not configured with.
    pub fn toggle(&mut self, feature: &str, value: &str) -> Option<bool> {
        let (_, values) = self.selected.iter_mut().find(|(name, _)| name.as_str() == feature)?;
        if values.remove(value) {
            Some(false)
        } else {
            values.insert(SmolStr::new(value));
            Some(true)
        }
    }

    pub fn is_selected(&self, feature: &str, value: &str) -> bool {
        self.values(feature).is_some_and(|values| values.contains(value))
    }

    pub fn selected(&self, feature: &str) -> impl Iterator<Item = &str> {
        self.values(feature).into_iter().flatten().map(SmolStr::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.iter().all(|(_, values)| values.is_empty())
    }

    pub fn clear(&mut self) {
        for (_, values) in &mut self.selected {
            values.clear();
        }
    }
}

impl Serialize for ValueFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.selected.len()))?;
        for (feature, values) in &self.selected {
            map.serialize_entry(feature.as_str(), values)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryControls {
    pub free_state: FreeState,
    pub scope: ScopeMode,
    pub values: ValueFilter,
    pub find: FindFilter,
}

impl QueryControls {
    pub fn new(features: &[FeatureName]) -> Self {
        Self { values: ValueFilter::new(features), ..Self::default() }
    }

    pub fn cycle_free_state(&mut self) -> FreeState {
        self.free_state = self.free_state.next();
        self.free_state
    }

    /// The act-on scope only distinguishes anything while a find pattern is active.
    pub fn effective_scope(&self) -> ScopeMode {
        if self.find.is_active() {
            self.scope
        } else {
            ScopeMode::All
        }
    }

    pub fn snapshot(&self) -> QuerySnapshot {
        QuerySnapshot {
            free_state: self.free_state,
            scope: self.effective_scope(),
            find: self.find.is_active().then(|| self.find.pattern().to_owned()),
            find_error: self.find.error().map(ToOwned::to_owned),
            values: self.values.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySnapshot {
    pub free_state: FreeState,
    pub scope: ScopeMode,
    pub find: Option<String>,
    pub find_error: Option<String>,
    pub values: ValueFilter,
}

#[cfg(test)]
mod tests {
    use super::{FindFilter, FreeState, QueryControls, ScopeMode, ValueFilter};
    use crate::model::fixtures::feature;

    #[test]
    fn free_state_cycles_back_to_all() {
        let mut controls = QueryControls::default();
        assert_eq!(controls.cycle_free_state(), FreeState::Free);
        assert_eq!(controls.cycle_free_state(), FreeState::Bound);
        assert_eq!(controls.cycle_free_state(), FreeState::All);
    }

    #[test]
    fn value_filter_toggles_known_features_only() {
        let mut filter = ValueFilter::new(&[feature("kind")]);
        assert_eq!(filter.toggle("kind", "PER"), Some(true));
        assert_eq!(filter.toggle("kind", ""), Some(true));
        assert!(filter.is_selected("kind", ""));
        assert_eq!(filter.selected("kind").collect::<Vec<_>>(), ["", "PER"]);
        assert_eq!(filter.toggle("eid", "x"), None);

        assert_eq!(filter.toggle("kind", "PER"), Some(false));
        assert_eq!(filter.toggle("kind", ""), Some(false));
        assert!(filter.is_empty());
    }

    #[test]
    fn value_filter_serializes_in_configured_order() {
        let mut filter = ValueFilter::new(&[feature("kind"), feature("eid")]);
        filter.toggle("eid", "amsterdam");

        let text = serde_json::to_string(&filter).expect("json");
        assert_eq!(text, r#"{"kind":[],"eid":["amsterdam"]}"#);
    }

    #[test]
    fn scope_only_applies_with_active_find() {
        let mut controls = QueryControls { scope: ScopeMode::Filtered, ..Default::default() };
        assert_eq!(controls.effective_scope(), ScopeMode::All);

        controls.find = FindFilter::new("dam", false);
        assert_eq!(controls.effective_scope(), ScopeMode::Filtered);
        assert_eq!(controls.snapshot().find.as_deref(), Some("dam"));
    }
}
