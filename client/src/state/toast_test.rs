use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Booked!");
    let b = state.push(ToastKind::Error, "Nope");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].message, "Booked!");
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "one");
    let b = state.push(ToastKind::Info, "two");
    state.dismiss(a);
    state.dismiss(999);
    assert_eq!(state.items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn overflow_evicts_oldest() {
    let mut state = ToastState::default();
    for n in 0..(MAX_VISIBLE + 2) {
        state.push(ToastKind::Info, format!("toast {n}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert_eq!(state.items[0].message, "toast 2");
}

#[test]
fn kinds_map_to_distinct_classes() {
    assert_ne!(ToastKind::Success.css_class(), ToastKind::Error.css_class());
    assert!(ToastKind::Info.css_class().starts_with("toast "));
}
