// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Token-range selection driven by successive point clicks.
//!
//! A click either starts a fresh single-token interval, grows the current interval outward, or
//! pulls the nearer boundary inward. Clicks further than the near window from both ends abandon
//! the previous selection.

use crate::model::{SelectionInterval, TokenIndex};

/// Default distance (in tokens) within which a click still adjusts the current interval.
pub const NEAR_WINDOW: usize = 5;

/// How a click was merged into the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickEffect {
    /// No interval existed; a single-token interval was created.
    Started,
    /// The click was outside the near window; the previous interval was abandoned.
    Reset,
    ExtendedStart,
    ExtendedEnd,
    /// Interior click moved the start boundary inward.
    MovedStart,
    /// Interior click moved the end boundary inward (also taken on equal distances).
    MovedEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRange {
    interval: Option<SelectionInterval>,
    near_window: usize,
}

impl Default for SelectionRange {
    fn default() -> Self {
        Self::new(NEAR_WINDOW)
    }
}

impl SelectionRange {
    pub fn new(near_window: usize) -> Self {
        Self { interval: None, near_window }
    }

    pub fn interval(&self) -> Option<SelectionInterval> {
        self.interval
    }

    pub fn near_window(&self) -> usize {
        self.near_window
    }

    pub fn is_empty(&self) -> bool {
        self.interval.is_none()
    }

    /// Merges a click on `token` into the current interval and returns the new interval.
    pub fn click(&mut self, token: TokenIndex) -> SelectionInterval {
        let (interval, effect) = self.merge(token);
        if effect == ClickEffect::Reset {
            log::debug!(
                "event=selection_far_click token={token} window={} previous={:?}",
                self.near_window,
                self.interval
            );
        }
        self.interval = Some(interval);
        interval
    }

    /// Computes the result of a click without applying it.
    pub fn merge(&self, token: TokenIndex) -> (SelectionInterval, ClickEffect) {
        let Some(current) = self.interval else {
            return (SelectionInterval::single(token), ClickEffect::Started);
        };
        let (start, end) = (current.start(), current.end());

        // `token < start - window` without underflow near the beginning of the text.
        if token.saturating_add(self.near_window) < start
            || token > end.saturating_add(self.near_window)
        {
            return (SelectionInterval::single(token), ClickEffect::Reset);
        }

        if token <= start {
            (SelectionInterval::new(token, end), ClickEffect::ExtendedStart)
        } else if token >= end {
            (SelectionInterval::new(start, token), ClickEffect::ExtendedEnd)
        } else if end - token <= token - start {
            (SelectionInterval::new(start, token), ClickEffect::MovedEnd)
        } else {
            (SelectionInterval::new(token, end), ClickEffect::MovedStart)
        }
    }

    /// Re-establishes an interval from possibly stale bounds; reversed bounds are swapped.
    pub fn restore(&mut self, start: TokenIndex, end: TokenIndex) -> SelectionInterval {
        let interval = SelectionInterval::new(start, end);
        self.interval = Some(interval);
        interval
    }

    pub fn clear(&mut self) -> Option<SelectionInterval> {
        self.interval.take()
    }
}

#[cfg(test)]
mod tests;
