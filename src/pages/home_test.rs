use super::*;

#[test]
fn validate_keywords_trims_surrounding_whitespace() {
    assert_eq!(
        validate_keywords("  noite, luar, mar  "),
        Ok("noite, luar, mar".to_owned())
    );
}

#[test]
fn validate_keywords_rejects_empty_input() {
    assert_eq!(validate_keywords(""), Err(VALIDATION_MESSAGE));
}

#[test]
fn validate_keywords_rejects_whitespace_only_input() {
    assert_eq!(validate_keywords("   \n\t  "), Err(VALIDATION_MESSAGE));
}

#[test]
fn validate_keywords_keeps_inner_whitespace() {
    assert_eq!(
        validate_keywords(" coração \n canção "),
        Ok("coração \n canção".to_owned())
    );
}

#[test]
fn validation_failure_never_enters_loading() {
    // The generate flow only calls begin() after validation passes, so a
    // rejected input leaves the machine in Failed with no token issued.
    let mut state = RhymeState::default();
    if let Err(message) = validate_keywords("   ") {
        state.fail_validation(message.to_owned());
    }
    assert!(!state.is_loading());
    assert_eq!(state.error(), Some(VALIDATION_MESSAGE));
}

#[test]
fn failure_message_is_the_generic_retry_copy() {
    let mut state = RhymeState::default();
    let token = state.begin();
    assert!(state.resolve_failure(token, GENERIC_FAILURE_MESSAGE.to_owned()));
    assert_eq!(state.error(), Some(GENERIC_FAILURE_MESSAGE));
}
