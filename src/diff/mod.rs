// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Aggregation of staged feature values into one validated change request.
//!
//! Additions are all-or-nothing: once any feature has a staged addition, every recognised feature
//! must have one, because a new entity occurrence is only meaningful when fully specified.
//! Deletion-only requests are exempt.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use smol_str::SmolStr;

use crate::model::FeatureName;
use crate::staging::{FeatureWidget, StagedValues};

/// Per-feature value lists in configured feature order. Every feature is present, possibly with
/// an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureValues {
    entries: Vec<(FeatureName, StagedValues)>,
}

impl FeatureValues {
    pub fn get(&self, feature: &str) -> Option<&[SmolStr]> {
        self.entries
            .iter()
            .find(|(name, _)| name.as_str() == feature)
            .map(|(_, values)| values.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FeatureName, &[SmolStr])> {
        self.entries.iter().map(|(name, values)| (name, values.as_slice()))
    }

    pub fn any(&self) -> bool {
        self.entries.iter().any(|(_, values)| !values.is_empty())
    }

    pub fn all(&self) -> bool {
        self.entries.iter().all(|(_, values)| !values.is_empty())
    }

    /// Features with an empty list, in feature order.
    pub fn missing(&self) -> Vec<FeatureName> {
        self.entries
            .iter()
            .filter(|(_, values)| values.is_empty())
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn push(&mut self, feature: FeatureName, values: StagedValues) {
        self.entries.push((feature, values));
    }
}

impl Serialize for FeatureValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (feature, values) in &self.entries {
            map.serialize_entry(feature.as_str(), values.as_slice())?;
        }
        map.end()
    }
}

/// The change a submission would make.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRequest {
    pub additions: FeatureValues,
    pub deletions: FeatureValues,
    /// Staged free-text values that are not candidates of their feature, so the receiver can
    /// tell newly coined values from known ones.
    pub freeform_additions: Vec<SmolStr>,
}

impl DiffRequest {
    /// Collects staged values from every widget without validating them.
    pub fn collect(widgets: &[FeatureWidget]) -> Self {
        let mut request = Self::default();
        for widget in widgets {
            request.additions.push(widget.feature().clone(), widget.additions());
            request.deletions.push(widget.feature().clone(), widget.deletions());
            if let Some(text) = widget.freeform() {
                request.freeform_additions.push(SmolStr::new(text));
            }
        }
        request
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffKind {
    Add,
    Delete,
    Replace,
}

impl DiffKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Replace => "replace",
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum DiffOutcome {
    NoOp,
    Add(DiffRequest),
    Delete(DiffRequest),
    Replace(DiffRequest),
    Invalid {
        #[serde(rename = "missingFeatures")]
        missing_features: Vec<FeatureName>,
    },
}

impl DiffOutcome {
    pub fn kind(&self) -> Option<DiffKind> {
        match self {
            Self::Add(_) => Some(DiffKind::Add),
            Self::Delete(_) => Some(DiffKind::Delete),
            Self::Replace(_) => Some(DiffKind::Replace),
            Self::NoOp | Self::Invalid { .. } => None,
        }
    }

    pub fn request(&self) -> Option<&DiffRequest> {
        match self {
            Self::Add(request) | Self::Delete(request) | Self::Replace(request) => Some(request),
            Self::NoOp | Self::Invalid { .. } => None,
        }
    }

    /// Whether the submit affordance should be enabled.
    pub fn is_submittable(&self) -> bool {
        self.kind().is_some()
    }

    pub fn missing_features(&self) -> &[FeatureName] {
        match self {
            Self::Invalid { missing_features } => missing_features,
            _ => &[],
        }
    }
}

impl fmt::Display for DiffOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOp => f.write_str("nothing staged"),
            Self::Add(_) | Self::Delete(_) | Self::Replace(_) => {
                let kind = self.kind().map(DiffKind::as_str).unwrap_or_default();
                f.write_str(kind)
            }
            Self::Invalid { missing_features } => {
                f.write_str("no value staged for ")?;
                for (index, feature) in missing_features.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{feature}")?;
                }
                Ok(())
            }
        }
    }
}

/// Validates the staged state of all feature widgets.
pub fn compute(widgets: &[FeatureWidget]) -> DiffOutcome {
    let request = DiffRequest::collect(widgets);
    let any_additions = request.additions.any();
    let any_deletions = request.deletions.any();

    if !any_additions && !any_deletions {
        return DiffOutcome::NoOp;
    }

    if any_additions && !request.additions.all() {
        let missing_features = request.additions.missing();
        log::debug!(
            "event=diff_invalid missing={}",
            missing_features.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(",")
        );
        return DiffOutcome::Invalid { missing_features };
    }

    match (any_additions, any_deletions) {
        (true, true) => DiffOutcome::Replace(request),
        (true, false) => DiffOutcome::Add(request),
        _ => DiffOutcome::Delete(request),
    }
}

#[cfg(test)]
mod tests;
