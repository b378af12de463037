//! Tests for grid response decoding through the public API.

use grid_client::grid::{parse_grid, Coordinate};
use grid_client::GridError;

// ============================================================================
// Well-formed responses
// ============================================================================

#[test]
fn test_two_line_response_yields_both_coordinates() {
    let body = r#"{"lines":[{"start":{"lat":1.5,"lng":-0.5}},{"start":{"lat":2.0,"lng":0.0}}]}"#;
    let coords = parse_grid(body).unwrap();

    assert_eq!(coords.len(), 2);
    assert!(coords.contains(&Coordinate { lat: 1.5, lng: -0.5 }));
    assert!(coords.contains(&Coordinate { lat: 2.0, lng: 0.0 }));
    assert_ne!(coords[0], coords[1]);
}

#[test]
fn test_empty_lines_is_not_an_error() {
    assert_eq!(parse_grid(r#"{"lines":[]}"#).unwrap(), vec![]);
}

#[test]
fn test_order_follows_response_array() {
    let body = r#"{"lines":[
        {"start":{"lat":10.0,"lng":0.0}},
        {"start":{"lat":20.0,"lng":0.0}},
        {"start":{"lat":30.0,"lng":0.0}}
    ]}"#;
    let lats: Vec<f64> = parse_grid(body).unwrap().iter().map(|c| c.lat).collect();
    assert_eq!(lats, vec![10.0, 20.0, 30.0]);
}

// ============================================================================
// Malformed responses
// ============================================================================

#[test]
fn test_missing_lines_key() {
    assert!(matches!(parse_grid("{}"), Err(GridError::Schema(_))));
}

#[test]
fn test_lines_not_an_array() {
    assert!(matches!(parse_grid(r#"{"lines":42}"#), Err(GridError::Schema(_))));
}

#[test]
fn test_syntactically_invalid_body() {
    assert!(matches!(parse_grid("not json"), Err(GridError::Parse(_))));
}

#[test]
fn test_truncated_body() {
    assert!(matches!(
        parse_grid(r#"{"lines":[{"start":{"lat":1.5"#),
        Err(GridError::Parse(_))
    ));
}

#[test]
fn test_non_object_entry_aborts_whole_parse() {
    // A good entry ahead of the bad one must not produce a partial result.
    let body = r#"{"lines":[{"start":{"lat":1.5,"lng":-0.5}},42]}"#;
    assert!(matches!(parse_grid(body), Err(GridError::Schema(_))));
}

// ============================================================================
// Round-trip
// ============================================================================

#[test]
fn test_coordinate_sequence_round_trip() {
    let body = r#"{"lines":[{"start":{"lat":52.208867,"lng":0.117540}},{"start":{"lat":-33.8675,"lng":151.207}}]}"#;
    let coords = parse_grid(body).unwrap();

    let encoded = serde_json::to_string(&coords).unwrap();
    let decoded: Vec<Coordinate> = serde_json::from_str(&encoded).unwrap();

    assert_eq!(coords, decoded);
}
