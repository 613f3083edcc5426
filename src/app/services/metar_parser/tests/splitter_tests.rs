//! Tests for report tokenization

use super::super::splitter::{merge_mixed_visibility, split};
use super::*;
use crate::error::MetarError;

#[test]
fn test_split_locates_remarks() {
    let stream = split(KORD_BASIC).unwrap();

    assert_eq!(stream.len(), 13);
    assert_eq!(stream.remarks_index(), Some(7));
    assert_eq!(stream.body().len(), 7);
    assert_eq!(stream.body()[0], "KORD");
    assert_eq!(
        stream.remarks(),
        Some("AO2 RAE02 SLP200 P0000 T00500011".to_string())
    );
}

#[test]
fn test_split_without_remarks() {
    let stream = split(MINIMAL).unwrap();

    assert_eq!(stream.remarks_index(), None);
    assert_eq!(stream.remarks(), None);
    assert_eq!(stream.body().len(), 2);
}

#[test]
fn test_split_collapses_whitespace() {
    let stream = split("  KORD\t210051Z \n 15007KT  ").unwrap();
    let tokens: Vec<&str> = stream.tokens().iter().map(|t| t.as_ref()).collect();

    assert_eq!(tokens, vec!["KORD", "210051Z", "15007KT"]);
}

#[test]
fn test_split_rejects_empty_input() {
    assert!(matches!(split(""), Err(MetarError::EmptyInput)));
    assert!(matches!(split("   \t\n"), Err(MetarError::EmptyInput)));
}

#[test]
fn test_trailing_remarks_marker() {
    let stream = split("KORD 210051Z RMK").unwrap();

    assert_eq!(stream.remarks_index(), Some(2));
    assert_eq!(stream.remarks(), Some(String::new()));
}

#[test]
fn test_mixed_visibility_is_merged() {
    let stream = split(KSFO_FOG).unwrap();
    let body: Vec<&str> = stream.body().iter().map(|t| t.as_ref()).collect();

    assert!(body.contains(&"1 1/2SM"));
    assert!(!body.contains(&"1/2SM"));
    assert_eq!(stream.remarks_index(), Some(body.len()));
}

#[test]
fn test_merge_leaves_other_tokens_alone() {
    let merged = merge_mixed_visibility(&["KORD", "210051Z", "10SM", "1/2SM", "05/01"]);
    let merged: Vec<&str> = merged.iter().map(|t| t.as_ref()).collect();

    assert_eq!(merged, vec!["KORD", "210051Z", "10SM", "1/2SM", "05/01"]);
}

#[test]
fn test_merge_requires_fractional_follower() {
    let merged = merge_mixed_visibility(&["2", "10SM"]);
    assert_eq!(merged.len(), 2);

    let merged = merge_mixed_visibility(&["2", "1/4SM"]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0], "2 1/4SM");
}

#[test]
fn test_remarks_are_never_merged() {
    let stream = split("KORD 210051Z RMK 1 1/2SM").unwrap();

    assert_eq!(stream.remarks(), Some("1 1/2SM".to_string()));
    assert_eq!(stream.len(), 5);
}
