use super::*;

// =============================================================
// push
// =============================================================

#[test]
fn push_appends_in_arrival_order() {
    let mut state = ToastState::default();
    state.push("Primeira", "descrição", ToastSeverity::Success);
    state.push("Segunda", "descrição", ToastSeverity::Error);
    let titles: Vec<&str> = state.toasts.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Primeira", "Segunda"]);
}

#[test]
fn push_issues_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push("a", "b", ToastSeverity::Success);
    let second = state.push("c", "d", ToastSeverity::Warning);
    assert!(second > first);
}

#[test]
fn push_stores_all_fields() {
    let mut state = ToastState::default();
    let id = state.push("Rima criada!", "Sua rima foi gerada com sucesso.", ToastSeverity::Success);
    let toast = &state.toasts[0];
    assert_eq!(toast.id, id);
    assert_eq!(toast.title, "Rima criada!");
    assert_eq!(toast.description, "Sua rima foi gerada com sucesso.");
    assert_eq!(toast.severity, ToastSeverity::Success);
}

// =============================================================
// dismiss
// =============================================================

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push("a", "b", ToastSeverity::Success);
    let second = state.push("c", "d", ToastSeverity::Error);
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push("a", "b", ToastSeverity::Warning);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.push("a", "b", ToastSeverity::Success);
    state.dismiss(first);
    let second = state.push("c", "d", ToastSeverity::Success);
    assert!(second > first);
}

// =============================================================
// ToastSeverity
// =============================================================

#[test]
fn severity_class_suffixes_are_distinct() {
    assert_eq!(ToastSeverity::Success.class_suffix(), "success");
    assert_eq!(ToastSeverity::Warning.class_suffix(), "warning");
    assert_eq!(ToastSeverity::Error.class_suffix(), "error");
}
