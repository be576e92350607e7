// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types shared by the annotator components.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod interval;
pub mod value_state;

pub use ids::{EntityId, FeatureName, Id, IdError};
pub use interval::{SelectionInterval, TokenIndex};
pub use value_state::{FreeTextState, ParseValueStateError, ScopeMark, ValueState};
