// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Staging state of one candidate value of a feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueState {
    #[default]
    Unset,
    MarkedAdd,
    MarkedDelete,
}

impl ValueState {
    /// Transition taken by one toggle.
    ///
    /// Values already attached to the target (`occurs`) cycle through all three states; others
    /// never reach `MarkedDelete`.
    pub fn next(self, occurs: bool) -> Self {
        match (self, occurs) {
            (Self::Unset, _) => Self::MarkedAdd,
            (Self::MarkedAdd, true) => Self::MarkedDelete,
            (Self::MarkedAdd, false) => Self::Unset,
            (Self::MarkedDelete, _) => Self::Unset,
        }
    }

    /// Clamps a state to what is reachable for the given capability.
    pub fn reachable(self, occurs: bool) -> Self {
        match (self, occurs) {
            (Self::MarkedDelete, false) => Self::Unset,
            (state, _) => state,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::MarkedAdd => "markedAdd",
            Self::MarkedDelete => "markedDelete",
        }
    }
}

impl fmt::Display for ValueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseValueStateError {
    input: String,
}

impl fmt::Display for ParseValueStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value state '{}'", self.input)
    }
}

impl std::error::Error for ParseValueStateError {}

impl FromStr for ValueState {
    type Err = ParseValueStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unset" => Ok(Self::Unset),
            "markedAdd" => Ok(Self::MarkedAdd),
            "markedDelete" => Ok(Self::MarkedDelete),
            _ => Err(ParseValueStateError { input: s.to_owned() }),
        }
    }
}

/// Staging state of a free-text entry. Free text is always a new value, so it has no delete state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FreeTextState {
    #[default]
    Unset,
    MarkedAdd,
}

impl FreeTextState {
    pub fn for_text(text: &str) -> Self {
        if text.is_empty() {
            Self::Unset
        } else {
            Self::MarkedAdd
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::MarkedAdd => "markedAdd",
        }
    }
}

/// Inclusion mark of an end token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScopeMark {
    Included,
    Excluded,
    /// Load-time default; counts as excluded but renders differently.
    #[default]
    Unset,
}

impl ScopeMark {
    pub fn is_included(self) -> bool {
        self == Self::Included
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Included => Self::Excluded,
            Self::Excluded | Self::Unset => Self::Included,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Included => "included",
            Self::Excluded => "excluded",
            Self::Unset => "unset",
        }
    }
}

impl fmt::Display for ScopeMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
