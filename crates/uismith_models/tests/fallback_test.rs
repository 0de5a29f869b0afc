//! Tests for the two-tier fallback policy.

mod test_utils;

use test_utils::{MockBehavior, MockGenerator};
use uismith_core::{GenerateRequest, Message};
use uismith_interface::TextGenerator;
use uismith_models::FallbackGenerator;

fn request(text: &str) -> GenerateRequest {
    GenerateRequest::builder()
        .messages(vec![Message::user_text(text)])
        .build()
        .unwrap()
}

#[tokio::test]
async fn primary_success_skips_fallback() {
    let primary = MockGenerator::new(
        "models/gemini-2.5-flash",
        MockBehavior::Text("<!DOCTYPE html><html></html>".to_string()),
    );
    let fallback = MockGenerator::new(
        "models/gemini-2.5-pro",
        MockBehavior::Text("unused".to_string()),
    );
    let generator = FallbackGenerator::new(primary.clone(), fallback.clone());

    let response = generator.generate(&request("a red button")).await.unwrap();

    assert_eq!(response.first_text(), Some("<!DOCTYPE html><html></html>"));
    assert_eq!(primary.call_count(), 1);
    assert_eq!(fallback.call_count(), 0);
}

#[tokio::test]
async fn primary_failure_invokes_fallback_once_with_same_request() {
    let primary = MockGenerator::new(
        "models/gemini-2.5-flash",
        MockBehavior::Fail("connection reset".to_string()),
    );
    let fallback = MockGenerator::new(
        "models/gemini-2.5-pro",
        MockBehavior::Text("<html/>".to_string()),
    );
    let generator = FallbackGenerator::new(primary.clone(), fallback.clone());

    let req = request("a login form");
    let response = generator.generate(&req).await.unwrap();

    assert_eq!(response.first_text(), Some("<html/>"));
    assert_eq!(primary.call_count(), 1);
    assert_eq!(fallback.call_count(), 1);
    assert_eq!(fallback.calls()[0], req);
}

#[tokio::test]
async fn both_tiers_failing_surfaces_fallback_error() {
    let primary = MockGenerator::new(
        "models/gemini-2.5-flash",
        MockBehavior::Fail("primary down".to_string()),
    );
    let fallback = MockGenerator::new(
        "models/gemini-2.5-pro",
        MockBehavior::Fail("fallback down".to_string()),
    );
    let generator = FallbackGenerator::new(primary.clone(), fallback.clone());

    let err = generator
        .generate(&request("a navbar"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("fallback down"));
    assert_eq!(primary.call_count(), 1);
    assert_eq!(fallback.call_count(), 1);
}

#[tokio::test]
async fn no_second_retry_after_fallback_failure() {
    let primary = MockGenerator::new(
        "models/gemini-2.5-flash",
        MockBehavior::Fail("primary down".to_string()),
    );
    let fallback = MockGenerator::new(
        "models/gemini-2.5-pro",
        MockBehavior::Fail("fallback down".to_string()),
    );
    let generator = FallbackGenerator::new(primary.clone(), fallback.clone());

    let _ = generator.generate(&request("a footer")).await;
    let _ = generator.generate(&request("a footer")).await;

    // One primary and one fallback attempt per request, nothing more.
    assert_eq!(primary.call_count(), 2);
    assert_eq!(fallback.call_count(), 2);
}

#[tokio::test]
async fn empty_output_is_not_a_failure_for_the_tier_policy() {
    // A successful call with no extractable text must not trigger the
    // fallback; distinguishing no-output from call failure is the
    // endpoint's job.
    let primary = MockGenerator::new("models/gemini-2.5-flash", MockBehavior::Empty);
    let fallback = MockGenerator::new(
        "models/gemini-2.5-pro",
        MockBehavior::Text("unused".to_string()),
    );
    let generator = FallbackGenerator::new(primary.clone(), fallback.clone());

    let response = generator.generate(&request("a card")).await.unwrap();

    assert!(response.first_text().is_none());
    assert_eq!(fallback.call_count(), 0);
}
