// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::{Regex, RegexBuilder};

/// Find pattern that narrows the buckets a lookup acts on.
///
/// A pattern that fails to compile keeps its error text for display and leaves the filter
/// inactive; it never fails the surrounding operation.
#[derive(Debug, Clone, Default)]
pub struct FindFilter {
    pattern: String,
    case_sensitive: bool,
    compiled: Option<Regex>,
    error: Option<String>,
}

impl FindFilter {
    pub fn new(pattern: &str, case_sensitive: bool) -> Self {
        let mut filter = Self { case_sensitive, ..Self::default() };
        filter.set_pattern(pattern);
        filter
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.compiled.is_some()
    }

    pub fn set_pattern(&mut self, pattern: &str) {
        self.pattern = pattern.trim().to_owned();
        self.compile();
    }

    pub fn toggle_case(&mut self) -> bool {
        self.case_sensitive = !self.case_sensitive;
        self.compile();
        self.case_sensitive
    }

    pub fn clear(&mut self) {
        self.pattern.clear();
        self.compile();
    }

    /// Inactive filters match everything.
    pub fn is_match(&self, text: &str) -> bool {
        self.compiled.as_ref().map_or(true, |regex| regex.is_match(text))
    }

    fn compile(&mut self) {
        self.compiled = None;
        self.error = None;
        if self.pattern.is_empty() {
            return;
        }
        match RegexBuilder::new(&self.pattern).case_insensitive(!self.case_sensitive).build() {
            Ok(regex) => self.compiled = Some(regex),
            Err(err) => {
                log::debug!("event=find_invalid pattern_len={}", self.pattern.len());
                self.error = Some(err.to_string());
            }
        }
    }
}

impl PartialEq for FindFilter {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.case_sensitive == other.case_sensitive
    }
}

impl Eq for FindFilter {}

#[cfg(test)]
mod tests {
    use super::FindFilter;

    #[test]
    fn empty_pattern_is_inactive_and_matches_everything() {
        let filter = FindFilter::new("   ", false);
        assert!(!filter.is_active());
        assert!(filter.is_match("anything"));
        assert_eq!(filter.pattern(), "");
    }

    #[test]
    fn case_insensitive_by_default() {
        let mut filter = FindFilter::new("amster", false);
        assert!(filter.is_match("Amsterdam"));

        assert!(filter.toggle_case());
        assert!(!filter.is_match("Amsterdam"));
        assert!(filter.is_match("amsterdam"));
    }

    #[test]
    fn invalid_pattern_keeps_error_and_stays_inactive() {
        let mut filter = FindFilter::new("(unclosed", false);
        assert!(!filter.is_active());
        assert!(filter.error().is_some());

        filter.clear();
        assert!(filter.error().is_none());
    }
}
