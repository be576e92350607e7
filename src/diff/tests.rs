// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde_json::json;

use super::{compute, DiffKind, DiffOutcome};
use crate::model::fixtures::{feature, place_staging};
use crate::staging::{CandidateValue, FeatureWidget, Staging};

fn two_features() -> Staging {
    let features = [feature("A"), feature("B")];
    let a = FeatureWidget::new(feature("A")).with_values([
        CandidateValue::new("a1", true),
        CandidateValue::new("a2", false),
    ]);
    let b = FeatureWidget::new(feature("B")).with_values([
        CandidateValue::new("b1", true),
        CandidateValue::new("b2", false),
    ]);
    Staging::load(&features, [a, b]).expect("staging")
}

#[test]
fn untouched_staging_is_a_no_op() {
    let staging = two_features();
    assert_eq!(compute(staging.widgets()), DiffOutcome::NoOp);
}

#[test]
fn partial_addition_names_the_missing_feature() {
    let mut staging = two_features();
    staging.toggle("A", "a2");

    let outcome = compute(staging.widgets());
    assert_eq!(outcome, DiffOutcome::Invalid { missing_features: vec![feature("B")] });
    assert!(!outcome.is_submittable());
    assert_eq!(outcome.to_string(), "no value staged for B");
}

#[test]
fn full_addition_is_an_add() {
    let mut staging = two_features();
    staging.toggle("A", "a2");
    staging.toggle("B", "b2");

    let outcome = compute(staging.widgets());
    assert_eq!(outcome.kind(), Some(DiffKind::Add));
    let request = outcome.request().expect("request");
    assert_eq!(request.additions.get("A").map(<[_]>::len), Some(1));
    assert_eq!(request.additions.get("B").map(<[_]>::len), Some(1));
    assert!(!request.deletions.any());
}

#[test]
fn deletion_only_skips_the_all_or_nothing_rule() {
    let mut staging = two_features();
    staging.toggle("A", "a1");
    staging.toggle("A", "a1");

    let outcome = compute(staging.widgets());
    assert_eq!(outcome.kind(), Some(DiffKind::Delete));
    let request = outcome.request().expect("request");
    assert_eq!(request.deletions.get("A").map(<[_]>::len), Some(1));
    assert_eq!(request.deletions.missing(), vec![feature("B")]);
}

#[test]
fn addition_with_deletion_is_a_replace() {
    let mut staging = two_features();
    staging.toggle("A", "a1");
    staging.toggle("A", "a1");
    staging.toggle("A", "a2");
    staging.toggle("B", "b2");

    assert_eq!(compute(staging.widgets()).kind(), Some(DiffKind::Replace));
}

#[test]
fn deletion_does_not_rescue_a_partial_addition() {
    let mut staging = two_features();
    staging.toggle("A", "a2");
    staging.toggle("B", "b1");
    staging.toggle("B", "b1");

    let outcome = compute(staging.widgets());
    assert_eq!(outcome.missing_features(), &[feature("B")]);
}

#[test]
fn free_text_counts_as_an_addition() {
    let mut staging = two_features();
    staging.toggle("A", "a2");
    staging.set_text("B", "coined");

    let outcome = compute(staging.widgets());
    assert_eq!(outcome.kind(), Some(DiffKind::Add));
    let request = outcome.request().expect("request");
    let freeform = request.freeform_additions.iter().map(|v| v.as_str()).collect::<Vec<_>>();
    assert_eq!(freeform, ["coined"]);
}

#[test]
fn free_text_naming_a_candidate_is_not_freeform() {
    let mut staging = place_staging();
    staging.toggle("kind", "LOC");
    staging.set_text("kind", "LOC");
    staging.set_text("eid", "amsterdam");

    let outcome = compute(staging.widgets());
    let request = outcome.request().expect("request");
    assert_eq!(outcome.kind(), Some(DiffKind::Add));
    assert!(request.freeform_additions.is_empty());
    assert_eq!(request.additions.get("kind").map(<[_]>::len), Some(1));
}

#[test]
fn free_text_overrides_a_staged_deletion_of_the_same_value() {
    let mut staging = place_staging();
    staging.toggle("eid", "amsterdam");
    staging.toggle("eid", "amsterdam");
    staging.toggle("kind", "LOC");
    staging.set_text("eid", "amsterdam");

    let value = serde_json::to_value(compute(staging.widgets())).expect("json");
    assert_eq!(
        value,
        json!({
            "outcome": "add",
            "additions": {"kind": ["LOC"], "eid": ["amsterdam"]},
            "deletions": {"kind": [], "eid": []},
            "freeformAdditions": [],
        })
    );
}

#[test]
fn reset_all_returns_to_no_op() {
    let mut staging = place_staging();
    staging.toggle("kind", "LOC");
    staging.toggle("eid", "amsterdam");
    staging.set_text("eid", "leiden");
    assert_ne!(compute(staging.widgets()), DiffOutcome::NoOp);

    staging.reset_all();
    assert_eq!(compute(staging.widgets()), DiffOutcome::NoOp);
}

#[test]
fn outcome_serializes_with_ordered_feature_maps() {
    let mut staging = place_staging();
    staging.toggle("kind", "PER");
    staging.toggle("kind", "PER");
    staging.toggle("kind", "LOC");
    staging.set_text("eid", "leiden");

    let value = serde_json::to_value(compute(staging.widgets())).expect("json");
    assert_eq!(
        value,
        json!({
            "outcome": "replace",
            "additions": {"kind": ["LOC"], "eid": ["leiden"]},
            "deletions": {"kind": ["PER"], "eid": []},
            "freeformAdditions": ["leiden"],
        })
    );

    let text = serde_json::to_string(&compute(staging.widgets())).expect("json");
    let kind_at = text.find("\"kind\"").expect("kind");
    let eid_at = text.find("\"eid\"").expect("eid");
    assert!(kind_at < eid_at, "feature order must follow configuration: {text}");

    let invalid = DiffOutcome::Invalid { missing_features: vec![feature("eid")] };
    assert_eq!(
        serde_json::to_value(invalid).expect("json"),
        json!({"outcome": "invalid", "missingFeatures": ["eid"]})
    );
    assert_eq!(serde_json::to_value(DiffOutcome::NoOp).expect("json"), json!({"outcome": "noOp"}));
}
