//! Wire-format contracts and JsonSchema validation for entity types.

use chrono::NaiveDate;
use cov_core::entities::*;
use cov_core::enums::*;
use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde_json::json;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_event() -> serde_json::Value {
    json!({
        "id": "evt-1",
        "tenant_id": "ten-1",
        "event_type": "sec_filing",
        "event_date": "2025-01-10",
        "headline": "10-Q shows revenue decline",
        "memo": {
            "what_disclosed": "Quarterly revenue declined 12% year over year.",
            "key_details": [
                {
                    "fact": "Revenue down 12%",
                    "citation": "10-Q p.4",
                    "evidence_id": "ev-1",
                    "quote_text": "revenue declined 12%"
                }
            ],
            "context": ["Third consecutive quarterly decline."]
        },
        "evidence": [
            {
                "id": "ev-1",
                "event_id": "evt-1",
                "source_type": "sec_filing",
                "title": "Form 10-Q",
                "publisher": "SEC EDGAR",
                "source_date": "2025-01-09",
                "excerpt": "Total revenue declined 12% compared to the prior year.",
                "tier": 1
            }
        ],
        "validity": { "state": "unevaluated" }
    })
}

#[test]
fn event_fixture_matches_generated_schema() {
    let schema = serde_json::to_value(schema_for!(Event)).unwrap();
    let errors = validate_against_schema(&schema, &sample_event());
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn event_deserializes_with_typed_fields() {
    let event: Event = serde_json::from_value(sample_event()).unwrap();
    assert_eq!(event.event_type, EventType::SecFiling);
    assert_eq!(event.evidence[0].tier, EvidenceTier::Primary);
    assert_eq!(event.key_details().len(), 1);
    assert_eq!(event.validity, Validity::Unevaluated);
    assert_eq!(
        event.summary(),
        "Quarterly revenue declined 12% year over year."
    );
}

#[test]
fn tier_travels_as_integer_and_rejects_out_of_range() {
    let mut value = sample_event();
    let event: Event = serde_json::from_value(value.clone()).unwrap();
    let back = serde_json::to_value(&event).unwrap();
    assert_eq!(back["evidence"][0]["tier"], json!(1));

    value["evidence"][0]["tier"] = json!(4);
    let err = serde_json::from_value::<Event>(value).unwrap_err();
    assert!(err.to_string().contains("evidence tier must be 1, 2 or 3"));
}

#[test]
fn missing_validity_defaults_to_unevaluated() {
    let mut value = sample_event();
    value.as_object_mut().unwrap().remove("validity");
    let event: Event = serde_json::from_value(value).unwrap();
    assert_eq!(event.validity.cached(), None);
}

#[test]
fn invalid_validity_keeps_reasons() {
    let validity: Validity = serde_json::from_value(json!({
        "state": "invalid",
        "reasons": ["No evidence sources attached to event"]
    }))
    .unwrap();
    assert_eq!(
        validity,
        Validity::Invalid {
            reasons: vec!["No evidence sources attached to event".into()]
        }
    );
    assert_eq!(validity.cached(), Some(false));
    assert_eq!(Validity::Valid.cached(), Some(true));
}

#[test]
fn malformed_memo_entries_keep_their_slots() {
    let memo: EventMemo = serde_json::from_value(json!({
        "what_disclosed": "Filed for restructuring.",
        "key_details": [
            "not an object",
            { "fact": "Chapter 11 filed", "citation": "Docket 1" },
            42
        ],
        "context": ["Industry under pressure.", 7, null, "Peers also filing."],
        "recommended_actions": null
    }))
    .unwrap();

    assert_eq!(memo.key_details.len(), 3);
    assert!(memo.key_details[0].is_none());
    assert_eq!(
        memo.key_details[1].as_ref().map(|d| d.fact.as_str()),
        Some("Chapter 11 filed")
    );
    assert!(memo.key_details[2].is_none());
    assert_eq!(
        memo.context,
        vec![
            Some("Industry under pressure.".to_string()),
            None,
            None,
            Some("Peers also filing.".to_string()),
        ]
    );
    assert_eq!(memo.recommended_actions, None);
}

#[test]
fn key_detail_fields_load_independently() {
    let detail: KeyDetail = serde_json::from_value(json!({
        "fact": "Chapter 11 filed",
        "citation": 7,
        "evidence_id": "ev-1",
        "quote_text": ["not", "text"]
    }))
    .unwrap();

    assert_eq!(
        detail,
        KeyDetail {
            fact: "Chapter 11 filed".into(),
            citation: Some("7".into()),
            evidence_id: Some("ev-1".into()),
            quote_text: None,
        }
    );
}

#[test]
fn evidence_display_order_is_tier_then_newest() {
    let mut event: Event = serde_json::from_value(sample_event()).unwrap();
    let base = event.evidence[0].clone();
    let with = |id: &str, tier: EvidenceTier, day: u32| EvidenceSource {
        id: id.into(),
        tier,
        source_date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
        ..base.clone()
    };
    event.evidence = vec![
        with("news-old", EvidenceTier::MajorPress, 2),
        with("blog", EvidenceTier::Other, 9),
        with("sec", EvidenceTier::Primary, 1),
        with("news-new", EvidenceTier::MajorPress, 8),
    ];

    let ids: Vec<&str> = event
        .evidence_for_display()
        .into_iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, vec!["sec", "news-new", "news-old", "blog"]);
}

#[test]
fn status_counts_tally_snapshots() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    let snap = |tenant: &str, status| TenantScoreSnapshot {
        tenant_id: tenant.into(),
        as_of_date: date,
        status,
        score: None,
    };
    let snapshots = vec![
        snap("a", TenantStatus::Critical),
        snap("b", TenantStatus::Watch),
        snap("c", TenantStatus::Watch),
        snap("d", TenantStatus::Stable),
    ];
    let counts = StatusCounts::tally(&snapshots);
    assert_eq!(
        counts,
        StatusCounts {
            critical: 1,
            watch: 2,
            stable: 1,
            improving: 0,
        }
    );
    assert_eq!(counts.get(TenantStatus::Watch), 2);
}

#[test]
fn brief_snapshot_without_exec_layer_loads() {
    let snapshot: PortfolioBriefSnapshot = serde_json::from_value(json!({
        "id": "brief-1",
        "as_of_date": "2025-01-10",
        "headline": "Two tenants moved to watch.",
        "created_at": "2025-01-10T08:00:00Z",
        "status_counts": { "critical": 1, "watch": 2, "stable": 10, "improving": 0 }
    }))
    .unwrap();
    assert!(snapshot.portfolio_verdict.is_none());
    assert!(snapshot.exec_questions.is_none());
    assert_eq!(snapshot.status_counts.stable, 10);
}
