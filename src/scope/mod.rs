// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Inclusion/exclusion marks on end tokens.
//!
//! Only tokens registered as end tokens carry a mark. Counts are derived from the marks on every
//! call, so they can never drift from the state.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{ScopeMark, TokenIndex};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScopeCounts {
    pub included: usize,
    pub excluded: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeFilter {
    marks: BTreeMap<TokenIndex, ScopeMark>,
}

impl ScopeFilter {
    pub fn new(marks: impl IntoIterator<Item = (TokenIndex, ScopeMark)>) -> Self {
        Self { marks: marks.into_iter().collect() }
    }

    pub fn with_end_tokens(end_tokens: impl IntoIterator<Item = TokenIndex>) -> Self {
        Self::new(end_tokens.into_iter().map(|token| (token, ScopeMark::Unset)))
    }

    pub fn mark(&self, token: TokenIndex) -> Option<ScopeMark> {
        self.marks.get(&token).copied()
    }

    pub fn is_end_token(&self, token: TokenIndex) -> bool {
        self.marks.contains_key(&token)
    }

    /// Flips the mark of an end token. Returns `None` (and changes nothing) for other tokens.
    pub fn toggle(&mut self, token: TokenIndex) -> Option<ScopeMark> {
        let mark = self.marks.get_mut(&token)?;
        *mark = mark.toggled();
        Some(*mark)
    }

    /// Bulk "select all" / "select none".
    pub fn set_all(&mut self, mark: ScopeMark) {
        for value in self.marks.values_mut() {
            *value = mark;
        }
    }

    pub fn counts(&self) -> ScopeCounts {
        let included = self.marks.values().filter(|mark| mark.is_included()).count();
        let total = self.marks.len();
        ScopeCounts { included, excluded: total - included, total }
    }

    /// End tokens that are not included, in token order. Unset tokens count as excluded.
    pub fn excluded_tokens(&self) -> Vec<TokenIndex> {
        self.marks
            .iter()
            .filter(|(_, mark)| !mark.is_included())
            .map(|(token, _)| *token)
            .collect()
    }

    pub fn marks(&self) -> &BTreeMap<TokenIndex, ScopeMark> {
        &self.marks
    }
}
