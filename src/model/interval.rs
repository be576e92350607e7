// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// Dense, 0-based position of a token in the loaded text.
pub type TokenIndex = usize;

/// Contiguous, inclusive token interval. Never inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SelectionInterval {
    start: TokenIndex,
    end: TokenIndex,
}

impl SelectionInterval {
    /// Builds an interval from two bounds in either order.
    pub fn new(a: TokenIndex, b: TokenIndex) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn single(token: TokenIndex) -> Self {
        Self { start: token, end: token }
    }

    pub fn start(&self) -> TokenIndex {
        self.start
    }

    pub fn end(&self) -> TokenIndex {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, token: TokenIndex) -> bool {
        self.start <= token && token <= self.end
    }

    pub fn tokens(&self) -> std::ops::RangeInclusive<TokenIndex> {
        self.start..=self.end
    }
}

#[derive(Deserialize)]
struct RawInterval {
    start: TokenIndex,
    end: TokenIndex,
}

// Stale host input may carry reversed bounds; those are swapped, not rejected.
impl<'de> Deserialize<'de> for SelectionInterval {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawInterval::deserialize(deserializer)?;
        Ok(Self::new(raw.start, raw.end))
    }
}
