//! Tests for the retry module

use super::*;
use crate::transport::ResponseDescriptor;
use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER};
use std::time::Duration;
use test_case::test_case;

fn rate_limited_with_retry_after(value: &str) -> ResponseDescriptor {
    let mut headers = HeaderMap::new();
    headers.insert(RETRY_AFTER, HeaderValue::from_str(value).unwrap());
    ResponseDescriptor {
        status: 429,
        headers,
        body: String::new(),
    }
}

#[test_case(200 => "success")]
#[test_case(201 => "success")]
#[test_case(299 => "success")]
#[test_case(300 => "fatal")]
#[test_case(301 => "fatal")]
#[test_case(400 => "fatal")]
#[test_case(404 => "fatal")]
#[test_case(428 => "fatal")]
#[test_case(429 => "retry")]
#[test_case(430 => "fatal")]
#[test_case(499 => "fatal")]
#[test_case(500 => "retry")]
#[test_case(503 => "retry")]
#[test_case(599 => "retry")]
fn test_classify_by_status(status: u16) -> &'static str {
    match classify(&ResponseDescriptor::new(status, "")) {
        Disposition::Success => "success",
        Disposition::Retry { .. } => "retry",
        Disposition::Fatal { .. } => "fatal",
    }
}

#[test]
fn test_classify_429_reason_and_header() {
    let disposition = classify(&rate_limited_with_retry_after("7"));
    assert_eq!(
        disposition,
        Disposition::Retry {
            status: 429,
            reason: "429 Too Many Requests".to_string(),
            retry_after: Some(7),
        }
    );
}

#[test_case("abc" => None ; "non numeric")]
#[test_case("" => None ; "empty value")]
#[test_case("1.5" => None ; "fractional")]
#[test_case("7 " => None ; "trailing space")]
#[test_case("Wed, 21 Oct 2015 07:28:00 GMT" => None ; "http date form")]
#[test_case("0" => Some(0) ; "zero")]
#[test_case("120" => Some(120) ; "plain seconds")]
fn test_retry_after_digits_only(value: &str) -> Option<u64> {
    match classify(&rate_limited_with_retry_after(value)) {
        Disposition::Retry { retry_after, .. } => retry_after,
        other => panic!("expected retry, got {other:?}"),
    }
}

#[test]
fn test_classify_5xx_never_reads_retry_after() {
    let mut headers = HeaderMap::new();
    headers.insert(RETRY_AFTER, HeaderValue::from_static("30"));
    let response = ResponseDescriptor {
        status: 503,
        headers,
        body: String::new(),
    };

    match classify(&response) {
        Disposition::Retry {
            status,
            reason,
            retry_after,
        } => {
            assert_eq!(status, 503);
            assert_eq!(reason, "Server error 503");
            assert_eq!(retry_after, None);
        }
        other => panic!("expected retry, got {other:?}"),
    }
}

#[test]
fn test_classify_fatal_carries_status_and_body() {
    let disposition = classify(&ResponseDescriptor::new(404, "Not found"));
    assert_eq!(
        disposition,
        Disposition::Fatal {
            status: 404,
            body: "Not found".to_string(),
        }
    );
}

#[test]
fn test_wait_duration_doubles_per_attempt() {
    assert_eq!(wait_duration(0.5, 1), Duration::from_millis(500));
    assert_eq!(wait_duration(0.5, 2), Duration::from_secs(1));
    assert_eq!(wait_duration(0.5, 3), Duration::from_secs(2));
    assert_eq!(wait_duration(0.5, 4), Duration::from_secs(4));
    assert_eq!(wait_duration(1.0, 1), Duration::from_secs(1));
}

#[test]
fn test_wait_duration_zero_factor() {
    assert_eq!(wait_duration(0.0, 1), Duration::ZERO);
    assert_eq!(wait_duration(0.0, 10), Duration::ZERO);
}

#[test]
fn test_retry_state_budget() {
    let mut state = RetryState::new(2);
    assert_eq!(state.attempt(), 1);
    assert!(state.can_retry());

    state.next_attempt();
    assert_eq!(state.attempt(), 2);
    assert!(state.can_retry());

    state.next_attempt();
    assert_eq!(state.attempt(), 3);
    assert!(!state.can_retry());
}

#[test]
fn test_retry_state_zero_budget() {
    let state = RetryState::new(0);
    assert!(!state.can_retry());
}
