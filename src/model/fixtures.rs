// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::FeatureName;
use crate::staging::{CandidateValue, FeatureWidget, FreeTextEntry, Staging};

pub(crate) fn feature(value: &str) -> FeatureName {
    FeatureName::new(value).expect("feature name")
}

pub(crate) fn kind_and_eid() -> Vec<FeatureName> {
    vec![feature("kind"), feature("eid")]
}

/// `kind` offers `PER` (already attached) plus `LOC` and `ORG`; `eid` offers `amsterdam`
/// (attached) and an empty free-text entry.
pub(crate) fn place_staging() -> Staging {
    let features = kind_and_eid();
    let kind = FeatureWidget::new(feature("kind")).with_values([
        CandidateValue::new("PER", true),
        CandidateValue::new("LOC", false),
        CandidateValue::new("ORG", false),
    ]);
    let eid = FeatureWidget::new(feature("eid"))
        .with_values([CandidateValue::new("amsterdam", true)])
        .with_free_text(FreeTextEntry::default());
    Staging::load(&features, [kind, eid]).expect("staging")
}
