// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-feature staging of value additions and deletions.
//!
//! Each feature widget holds the candidate values offered for the current target plus one
//! free-text entry. Widgets remember the configuration they were loaded with so a reset restores
//! exactly what the host supplied.

use std::fmt;

use serde::Deserialize;
use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::model::{FeatureName, FreeTextState, ValueState};

/// Values staged for one feature, in widget order.
pub type StagedValues = SmallVec<[SmolStr; 4]>;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidateSpec {
    value: SmolStr,
    #[serde(default)]
    occurs: bool,
    #[serde(default)]
    state: ValueState,
}

/// One value a feature may take, with its tri-state staging mark.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "CandidateSpec")]
pub struct CandidateValue {
    value: SmolStr,
    occurs: bool,
    original: ValueState,
    state: ValueState,
}

impl From<CandidateSpec> for CandidateValue {
    fn from(spec: CandidateSpec) -> Self {
        Self::with_state(spec.value, spec.occurs, spec.state)
    }
}

impl CandidateValue {
    pub fn new(value: impl Into<SmolStr>, occurs: bool) -> Self {
        Self::with_state(value, occurs, ValueState::Unset)
    }

    /// A candidate whose original state is supplied by the host. A delete mark on a value that
    /// does not occur is unreachable and is loaded as unset.
    pub fn with_state(value: impl Into<SmolStr>, occurs: bool, state: ValueState) -> Self {
        let state = state.reachable(occurs);
        Self { value: value.into(), occurs, original: state, state }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn occurs(&self) -> bool {
        self.occurs
    }

    pub fn state(&self) -> ValueState {
        self.state
    }

    pub fn original_state(&self) -> ValueState {
        self.original
    }

    pub fn toggle(&mut self) -> ValueState {
        self.state = self.state.next(self.occurs);
        self.state
    }

    pub fn reset(&mut self) {
        self.state = self.original;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FreeTextSpec {
    #[serde(default)]
    text: String,
    #[serde(default)]
    state: Option<FreeTextState>,
}

/// User-typed value for a feature. Any non-empty text is accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "FreeTextSpec")]
pub struct FreeTextEntry {
    original_text: String,
    original_state: FreeTextState,
    text: String,
    state: FreeTextState,
}

impl From<FreeTextSpec> for FreeTextEntry {
    fn from(spec: FreeTextSpec) -> Self {
        match spec.state {
            Some(state) => Self::with_state(spec.text, state),
            None => Self::new(spec.text),
        }
    }
}

impl FreeTextEntry {
    /// Pre-filled text whose state follows from its emptiness.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let state = FreeTextState::for_text(&text);
        Self::with_state(text, state)
    }

    /// Pre-filled text with an explicit original state; empty text is always unset.
    pub fn with_state(text: impl Into<String>, state: FreeTextState) -> Self {
        let text = text.into();
        let state = if text.is_empty() { FreeTextState::Unset } else { state };
        Self { original_text: text.clone(), original_state: state, text, state }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> FreeTextState {
        self.state
    }

    pub fn set_text(&mut self, text: &str) -> FreeTextState {
        if self.text != text {
            self.text = text.to_owned();
        }
        self.state = FreeTextState::for_text(text);
        self.state
    }

    pub fn reset(&mut self) {
        self.text.clone_from(&self.original_text);
        self.state = self.original_state;
    }

    /// The text, when it is staged as an addition.
    pub fn staged(&self) -> Option<&str> {
        match self.state {
            FreeTextState::MarkedAdd if !self.text.is_empty() => Some(&self.text),
            _ => None,
        }
    }
}

/// Staging widget of a single feature.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureWidget {
    feature: FeatureName,
    #[serde(default)]
    values: Vec<CandidateValue>,
    #[serde(default)]
    free_text: FreeTextEntry,
}

impl FeatureWidget {
    pub fn new(feature: FeatureName) -> Self {
        Self { feature, values: Vec::new(), free_text: FreeTextEntry::default() }
    }

    pub fn with_values(mut self, values: impl IntoIterator<Item = CandidateValue>) -> Self {
        self.values = values.into_iter().collect();
        self
    }

    pub fn with_free_text(mut self, free_text: FreeTextEntry) -> Self {
        self.free_text = free_text;
        self
    }

    pub fn feature(&self) -> &FeatureName {
        &self.feature
    }

    pub fn values(&self) -> &[CandidateValue] {
        &self.values
    }

    pub fn value(&self, value: &str) -> Option<&CandidateValue> {
        self.values.iter().find(|candidate| candidate.value() == value)
    }

    pub fn free_text(&self) -> &FreeTextEntry {
        &self.free_text
    }

    pub fn toggle(&mut self, value: &str) -> Option<ValueState> {
        self.values
            .iter_mut()
            .find(|candidate| candidate.value() == value)
            .map(CandidateValue::toggle)
    }

    pub fn set_text(&mut self, text: &str) -> FreeTextState {
        self.free_text.set_text(text)
    }

    /// Restores every value control and the free-text control of this widget.
    pub fn reset(&mut self) {
        for candidate in &mut self.values {
            candidate.reset();
        }
        self.free_text.reset();
    }

    /// Values marked for addition, followed by the staged free text unless it repeats one of them.
    pub fn additions(&self) -> StagedValues {
        let mut additions = self
            .values
            .iter()
            .filter(|candidate| candidate.state() == ValueState::MarkedAdd)
            .map(|candidate| candidate.value.clone())
            .collect::<StagedValues>();
        if let Some(text) = self.free_text.staged() {
            if !additions.iter().any(|value| value == text) {
                additions.push(SmolStr::new(text));
            }
        }
        additions
    }

    /// Values marked for deletion. A value that is also typed as free text is an addition
    /// instead.
    pub fn deletions(&self) -> StagedValues {
        let staged = self.free_text.staged();
        self.values
            .iter()
            .filter(|candidate| candidate.state() == ValueState::MarkedDelete)
            .filter(|candidate| staged != Some(candidate.value()))
            .map(|candidate| candidate.value.clone())
            .collect()
    }

    /// The staged free text when it is not one of the candidate values.
    pub fn freeform(&self) -> Option<&str> {
        self.free_text.staged().filter(|text| self.value(text).is_none())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagingError {
    UnknownFeature { feature: FeatureName },
    DuplicateWidget { feature: FeatureName },
}

impl fmt::Display for StagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFeature { feature } => {
                write!(f, "widget for unrecognised feature '{feature}'")
            }
            Self::DuplicateWidget { feature } => {
                write!(f, "more than one widget for feature '{feature}'")
            }
        }
    }
}

impl std::error::Error for StagingError {}

/// All feature widgets, one per recognised feature, in configured feature order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staging {
    widgets: Vec<FeatureWidget>,
}

impl Staging {
    pub fn new(features: &[FeatureName]) -> Self {
        Self { widgets: features.iter().cloned().map(FeatureWidget::new).collect() }
    }

    /// Builds staging from host-supplied widgets. Features without a widget get an empty one.
    pub fn load(
        features: &[FeatureName],
        widgets: impl IntoIterator<Item = FeatureWidget>,
    ) -> Result<Self, StagingError> {
        let mut slots: Vec<Option<FeatureWidget>> = vec![None; features.len()];
        for widget in widgets {
            let Some(index) = features.iter().position(|feature| feature == widget.feature())
            else {
                return Err(StagingError::UnknownFeature { feature: widget.feature });
            };
            if slots[index].is_some() {
                return Err(StagingError::DuplicateWidget { feature: widget.feature });
            }
            slots[index] = Some(widget);
        }

        let widgets = features
            .iter()
            .zip(slots)
            .map(|(feature, slot)| slot.unwrap_or_else(|| FeatureWidget::new(feature.clone())))
            .collect();
        Ok(Self { widgets })
    }

    pub fn widgets(&self) -> &[FeatureWidget] {
        &self.widgets
    }

    pub fn widget(&self, feature: &str) -> Option<&FeatureWidget> {
        self.widgets.iter().find(|widget| widget.feature().as_str() == feature)
    }

    fn widget_mut(&mut self, feature: &str) -> Option<&mut FeatureWidget> {
        self.widgets.iter_mut().find(|widget| widget.feature().as_str() == feature)
    }

    pub fn toggle(&mut self, feature: &str, value: &str) -> Option<ValueState> {
        self.widget_mut(feature)?.toggle(value)
    }

    pub fn set_text(&mut self, feature: &str, text: &str) -> Option<FreeTextState> {
        Some(self.widget_mut(feature)?.set_text(text))
    }

    /// Resets one feature widget; returns `false` for an unknown feature.
    pub fn reset(&mut self, feature: &str) -> bool {
        match self.widget_mut(feature) {
            Some(widget) => {
                widget.reset();
                true
            }
            None => false,
        }
    }

    pub fn reset_all(&mut self) {
        for widget in &mut self.widgets {
            widget.reset();
        }
    }
}
