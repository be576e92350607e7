// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The annotator state a host page runs against.
//!
//! The session owns every component and is the only place where one component's change is
//! propagated to another: selecting tokens or an entity drops the other focus, resets staging and
//! marks the lookup display as stale. After each mutation the host reads a [`Snapshot`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::AnnotatorConfig;
use crate::diff::{self, DiffKind, DiffOutcome, DiffRequest};
use crate::model::{EntityId, FeatureName, ScopeMark, SelectionInterval, TokenIndex};
use crate::model::{FreeTextState, ValueState};
use crate::query::{FindFilter, FreeState, QueryControls, QuerySnapshot, ScopeMode};
use crate::scope::{ScopeCounts, ScopeFilter};
use crate::selection::SelectionRange;
use crate::staging::{FeatureWidget, Staging, StagingError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorSession {
    features: Vec<FeatureName>,
    selection: SelectionRange,
    scope: ScopeFilter,
    staging: Staging,
    query: QueryControls,
    active_entity: Option<EntityId>,
    up_to_date: bool,
    rev: u64,
}

impl AnnotatorSession {
    pub fn new(config: &AnnotatorConfig) -> Self {
        let features = config.features().to_vec();
        Self {
            staging: Staging::new(&features),
            query: QueryControls::new(&features),
            features,
            selection: SelectionRange::new(config.near_window()),
            scope: ScopeFilter::default(),
            active_entity: None,
            up_to_date: true,
            rev: 0,
        }
    }

    pub fn features(&self) -> &[FeatureName] {
        &self.features
    }

    pub fn selection(&self) -> Option<SelectionInterval> {
        self.selection.interval()
    }

    pub fn scope(&self) -> &ScopeFilter {
        &self.scope
    }

    pub fn staging(&self) -> &Staging {
        &self.staging
    }

    pub fn query(&self) -> &QueryControls {
        &self.query
    }

    pub fn active_entity(&self) -> Option<&EntityId> {
        self.active_entity.as_ref()
    }

    pub fn up_to_date(&self) -> bool {
        self.up_to_date
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    fn bump(&mut self) {
        self.rev = self.rev.wrapping_add(1);
    }

    /// A new focus invalidates whatever was staged against the old one.
    fn focus_changed(&mut self) {
        self.staging.reset_all();
        self.up_to_date = false;
        self.bump();
    }

    pub fn click(&mut self, token: TokenIndex) -> SelectionInterval {
        let interval = self.selection.click(token);
        self.active_entity = None;
        self.focus_changed();
        log::debug!(
            "event=selection_click token={token} start={} end={}",
            interval.start(),
            interval.end()
        );
        interval
    }

    /// Restores a selection from host state (e.g. hidden form fields). Reversed bounds are
    /// swapped. Staging survives only when the restored interval is the current one and no
    /// entity was focused.
    pub fn restore_selection(&mut self, start: TokenIndex, end: TokenIndex) -> SelectionInterval {
        let previous = self.selection.interval();
        let interval = self.selection.restore(start, end);
        let dropped_entity = self.active_entity.take().is_some();
        if dropped_entity || previous != Some(interval) {
            self.focus_changed();
        } else {
            self.bump();
        }
        interval
    }

    /// Binds whole-entity focus; a token selection cannot coexist with it.
    pub fn select_entity(&mut self, entity: EntityId) {
        self.selection.clear();
        log::debug!("event=entity_focus entity={entity}");
        self.active_entity = Some(entity);
        self.focus_changed();
    }

    /// Drops both the token selection and the entity focus. End-token marks are kept.
    pub fn clear_query(&mut self) {
        self.selection.clear();
        self.active_entity = None;
        self.focus_changed();
        log::debug!("event=query_clear");
    }

    pub fn mark_up_to_date(&mut self) {
        if !self.up_to_date {
            self.up_to_date = true;
            self.bump();
        }
    }

    /// Replaces the feature widgets with the configuration of the current render.
    pub fn load_features(
        &mut self,
        widgets: impl IntoIterator<Item = FeatureWidget>,
    ) -> Result<(), StagingError> {
        self.staging = Staging::load(&self.features, widgets)?;
        self.bump();
        Ok(())
    }

    pub fn load_end_tokens(&mut self, marks: impl IntoIterator<Item = (TokenIndex, ScopeMark)>) {
        self.scope = ScopeFilter::new(marks);
        self.bump();
    }

    pub fn toggle_value(&mut self, feature: &str, value: &str) -> Option<ValueState> {
        let state = self.staging.toggle(feature, value)?;
        self.bump();
        Some(state)
    }

    pub fn set_text(&mut self, feature: &str, text: &str) -> Option<FreeTextState> {
        let state = self.staging.set_text(feature, text)?;
        self.bump();
        Some(state)
    }

    pub fn reset_feature(&mut self, feature: &str) -> bool {
        let reset = self.staging.reset(feature);
        if reset {
            log::debug!("event=staging_reset feature={feature}");
            self.bump();
        }
        reset
    }

    pub fn toggle_end_token(&mut self, token: TokenIndex) -> Option<ScopeMark> {
        let mark = self.scope.toggle(token)?;
        self.bump();
        Some(mark)
    }

    pub fn set_all_end_tokens(&mut self, mark: ScopeMark) {
        self.scope.set_all(mark);
        self.bump();
    }

    pub fn scope_counts(&self) -> ScopeCounts {
        self.scope.counts()
    }

    pub fn cycle_free_state(&mut self) -> FreeState {
        self.up_to_date = false;
        self.bump();
        self.query.cycle_free_state()
    }

    pub fn set_scope_mode(&mut self, scope: ScopeMode) {
        self.query.scope = scope;
        self.bump();
    }

    pub fn set_find(&mut self, pattern: &str) {
        self.query.find.set_pattern(pattern);
        self.up_to_date = false;
        self.bump();
    }

    pub fn toggle_find_case(&mut self) -> bool {
        self.up_to_date = false;
        self.bump();
        self.query.find.toggle_case()
    }

    pub fn find(&self) -> &FindFilter {
        &self.query.find
    }

    /// Flips a value in the entity-listing filter. Unknown features are ignored.
    pub fn toggle_value_filter(&mut self, feature: &str, value: &str) -> Option<bool> {
        let selected = self.query.values.toggle(feature, value)?;
        self.bump();
        Some(selected)
    }

    pub fn diff(&self) -> DiffOutcome {
        diff::compute(self.staging.widgets())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            selection: self.selection.interval(),
            excluded_end_tokens: self.scope.excluded_tokens(),
            active_entity: self.active_entity.clone(),
            diff: self.diff(),
            up_to_date: self.up_to_date,
            rev: self.rev,
            scope_counts: self.scope.counts(),
            query: self.query.snapshot(),
        }
    }

    /// Builds the change the host should transmit. Does not mutate the session.
    pub fn submit(&self) -> Result<Submission, SubmitError> {
        let target = match (&self.active_entity, self.selection.interval()) {
            (Some(entity), _) => Target::Entity { id: entity.clone() },
            (None, Some(interval)) => Target::Selection(interval),
            (None, None) => return Err(SubmitError::NoTarget),
        };

        let (kind, request) = match self.diff() {
            DiffOutcome::Add(request) => (DiffKind::Add, request),
            DiffOutcome::Delete(request) => (DiffKind::Delete, request),
            DiffOutcome::Replace(request) => (DiffKind::Replace, request),
            DiffOutcome::Invalid { missing_features } => {
                return Err(SubmitError::Invalid { missing_features })
            }
            DiffOutcome::NoOp => return Err(SubmitError::NothingStaged),
        };

        log::info!("event=submit kind={kind} rev={}", self.rev);
        Ok(Submission {
            target,
            kind,
            excluded_end_tokens: self.scope.excluded_tokens(),
            scope: self.query.effective_scope(),
            request,
        })
    }

    /// Applies one raw host event.
    pub fn apply(&mut self, event: Event) -> Result<(), StagingError> {
        match event {
            Event::Click { token } => {
                self.click(token);
            }
            Event::RestoreSelection { start, end } => {
                self.restore_selection(start, end);
            }
            Event::ClearQuery => self.clear_query(),
            Event::SelectEntity { entity } => self.select_entity(entity),
            Event::ToggleValue { feature, value } => {
                self.toggle_value(&feature, &value);
            }
            Event::SetText { feature, text } => {
                self.set_text(&feature, &text);
            }
            Event::ResetFeature { feature } => {
                self.reset_feature(&feature);
            }
            Event::ToggleEndToken { token } => {
                self.toggle_end_token(token);
            }
            Event::SetAllEndTokens { mark } => self.set_all_end_tokens(mark),
            Event::LoadFeatures { widgets } => self.load_features(widgets)?,
            Event::LoadEndTokens { marks } => {
                self.load_end_tokens(marks.into_iter().map(|m| (m.token, m.mark)));
            }
            Event::MarkUpToDate => self.mark_up_to_date(),
            Event::CycleFreeState => {
                self.cycle_free_state();
            }
            Event::SetScope { scope } => self.set_scope_mode(scope),
            Event::SetFind { pattern } => self.set_find(&pattern),
            Event::ToggleFindCase => {
                self.toggle_find_case();
            }
            Event::ToggleValueFilter { feature, value } => {
                self.toggle_value_filter(&feature, &value);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EndTokenMark {
    pub token: TokenIndex,
    #[serde(default)]
    pub mark: ScopeMark,
}

/// Raw host input, one per user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum Event {
    Click { token: TokenIndex },
    RestoreSelection { start: TokenIndex, end: TokenIndex },
    ClearQuery,
    SelectEntity { entity: EntityId },
    ToggleValue { feature: String, value: String },
    SetText { feature: String, text: String },
    ResetFeature { feature: String },
    ToggleEndToken { token: TokenIndex },
    SetAllEndTokens { mark: ScopeMark },
    LoadFeatures { widgets: Vec<FeatureWidget> },
    LoadEndTokens { marks: Vec<EndTokenMark> },
    MarkUpToDate,
    CycleFreeState,
    SetScope { scope: ScopeMode },
    SetFind { pattern: String },
    ToggleFindCase,
    ToggleValueFilter { feature: String, value: String },
}

/// Serializable state handed to the host after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub selection: Option<SelectionInterval>,
    pub excluded_end_tokens: Vec<TokenIndex>,
    pub active_entity: Option<EntityId>,
    pub diff: DiffOutcome,
    pub up_to_date: bool,
    pub rev: u64,
    pub scope_counts: ScopeCounts,
    pub query: QuerySnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Target {
    Selection(SelectionInterval),
    Entity { id: EntityId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub target: Target,
    pub kind: DiffKind,
    pub excluded_end_tokens: Vec<TokenIndex>,
    pub scope: ScopeMode,
    pub request: DiffRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    NoTarget,
    NothingStaged,
    Invalid { missing_features: Vec<FeatureName> },
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTarget => f.write_str("no token selection or entity to modify"),
            Self::NothingStaged => f.write_str("no additions or deletions staged"),
            Self::Invalid { missing_features } => {
                let outcome = DiffOutcome::Invalid { missing_features: missing_features.clone() };
                write!(f, "incomplete addition: {outcome}")
            }
        }
    }
}

impl std::error::Error for SubmitError {}
