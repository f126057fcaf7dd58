use serde_json::json;

use crate::domain::fixtures::trip_roster;
use crate::domain::league::ScoreUpdate;
use crate::domain::validation::{stroke_count, validate_score_updates, ScoresPayload, ValidationResult};
use crate::errors::domain::{DomainError, ValidationKind};

fn payload(value: serde_json::Value) -> ScoresPayload {
    serde_json::from_value(value).unwrap()
}

fn rejection(result: ValidationResult) -> (ValidationKind, String) {
    match result {
        ValidationResult::Invalid(r) => (r.kind, r.detail),
        ValidationResult::Valid(updates) => panic!("expected rejection, got {updates:?}"),
    }
}

#[test]
fn accepts_roster_scores() {
    let p = payload(json!({"scores": [
        {"playerId": "player-01", "gross": 83, "net": 72},
        {"playerId": "player-02", "gross": 90, "net": null}
    ]}));
    let result = validate_score_updates(&p, &trip_roster());
    assert_eq!(
        result,
        ValidationResult::Valid(vec![
            ScoreUpdate { player_id: "player-01".into(), gross: 83, net: Some(72) },
            ScoreUpdate { player_id: "player-02".into(), gross: 90, net: None },
        ])
    );
}

#[test]
fn missing_net_key_is_rejected() {
    let p = payload(json!({"scores": [{"playerId": "player-01", "gross": 83}]}));
    let (kind, detail) = rejection(validate_score_updates(&p, &trip_roster()));
    assert_eq!(kind, ValidationKind::StrokeCountOutOfRange);
    assert_eq!(detail, "Invalid net score for player player-01");
}

#[test]
fn explicit_null_net_is_accepted() {
    let p = payload(json!({"scores": [{"playerId": "player-01", "gross": 83, "net": null}]}));
    let updates = validate_score_updates(&p, &trip_roster()).into_result().unwrap();
    assert_eq!(updates[0].net, None);
}

#[test]
fn empty_or_missing_list_is_invalid_payload() {
    for body in [json!({"scores": []}), json!({}), json!({"scores": null})] {
        let (kind, detail) = rejection(validate_score_updates(&payload(body), &trip_roster()));
        assert_eq!(kind, ValidationKind::InvalidPayload);
        assert_eq!(detail, "Invalid payload");
    }
}

#[test]
fn rejects_player_outside_roster() {
    let p = payload(json!({"scores": [{"playerId": "player-99", "gross": 83, "net": 72}]}));
    let (kind, detail) = rejection(validate_score_updates(&p, &trip_roster()));
    assert_eq!(kind, ValidationKind::UnknownPlayer);
    assert_eq!(detail, "Invalid player id: player-99");
}

#[test]
fn rejects_gross_below_range() {
    let p = payload(json!({"scores": [{"playerId": "player-01", "gross": 39, "net": 72}]}));
    let (kind, detail) = rejection(validate_score_updates(&p, &trip_roster()));
    assert_eq!(kind, ValidationKind::StrokeCountOutOfRange);
    assert_eq!(detail, "Invalid gross score for player player-01");
}

#[test]
fn rejects_net_above_range() {
    let p = payload(json!({"scores": [{"playerId": "player-01", "gross": 90, "net": 201}]}));
    let (_, detail) = rejection(validate_score_updates(&p, &trip_roster()));
    assert_eq!(detail, "Invalid net score for player player-01");
}

#[test]
fn missing_gross_is_rejected() {
    let p = payload(json!({"scores": [{"playerId": "player-01", "net": 72}]}));
    let (kind, _) = rejection(validate_score_updates(&p, &trip_roster()));
    assert_eq!(kind, ValidationKind::StrokeCountOutOfRange);
}

#[test]
fn one_bad_entry_rejects_the_batch() {
    let p = payload(json!({"scores": [
        {"playerId": "player-01", "gross": 83, "net": 72},
        {"playerId": "player-02", "gross": 250, "net": 72}
    ]}));
    assert!(matches!(
        validate_score_updates(&p, &trip_roster()),
        ValidationResult::Invalid(_)
    ));
}

#[test]
fn player_check_runs_before_stroke_check() {
    let p = payload(json!({"scores": [{"playerId": "nobody", "gross": 5}]}));
    let (kind, _) = rejection(validate_score_updates(&p, &trip_roster()));
    assert_eq!(kind, ValidationKind::UnknownPlayer);
}

#[test]
fn stroke_count_bounds_and_integral_floats() {
    let n = |v: serde_json::Value| serde_json::from_value::<serde_json::Number>(v).unwrap();
    assert_eq!(stroke_count(&n(json!(40))), Some(40));
    assert_eq!(stroke_count(&n(json!(200))), Some(200));
    assert_eq!(stroke_count(&n(json!(39))), None);
    assert_eq!(stroke_count(&n(json!(201))), None);
    assert_eq!(stroke_count(&n(json!(83.0))), Some(83));
    assert_eq!(stroke_count(&n(json!(83.5))), None);
    assert_eq!(stroke_count(&n(json!(-80))), None);
}

#[test]
fn into_result_maps_to_validation_error() {
    let p = payload(json!({"scores": []}));
    let err = validate_score_updates(&p, &trip_roster()).into_result().unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::InvalidPayload, _)));
}
