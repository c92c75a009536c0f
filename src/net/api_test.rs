use super::*;

#[test]
fn webhook_url_is_the_fixed_endpoint() {
    assert!(WEBHOOK_URL.starts_with("https://"));
    assert!(WEBHOOK_URL.contains("/webhook-test/"));
}

#[test]
fn rhyme_from_response_extracts_text() {
    let body = RhymeResponse {
        rima: Some("verso".to_owned()),
        output: None,
    };
    assert_eq!(rhyme_from_response(&body), Ok("verso".to_owned()));
}

#[test]
fn rhyme_from_response_prefers_rima_over_output() {
    let body = RhymeResponse {
        rima: Some("da rima".to_owned()),
        output: Some("do output".to_owned()),
    };
    assert_eq!(rhyme_from_response(&body), Ok("da rima".to_owned()));
}

#[test]
fn rhyme_from_response_rejects_empty_body() {
    let body = RhymeResponse::default();
    assert_eq!(rhyme_from_response(&body), Err(GenerateError::MissingRhyme));
}
