use super::*;

#[test]
fn delete_button_reflects_pending_delete() {
    assert_eq!(delete_label(false), "Delete");
    assert_eq!(delete_label(true), "Deleting…");
}

#[test]
fn only_the_deleting_row_reads_deleting() {
    let mut state = DashboardState::default();
    assert!(state.begin_delete("v1"));
    assert_eq!(delete_label(state.is_deleting("v1")), "Deleting…");
    assert_eq!(delete_label(state.is_deleting("v2")), "Delete");
}

#[test]
fn native_builds_never_confirm_a_delete() {
    assert!(!confirm("Are you sure you want to delete this venue?"));
}
