use super::*;

// =============================================================
// Toast constructors
// =============================================================

#[test]
fn error_toast_carries_its_message() {
    let toast = Toast::error("Something went wrong");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Something went wrong");
}

#[test]
fn success_toast_carries_its_message() {
    let toast = Toast::success("Saved");
    assert_eq!(toast.kind, ToastKind::Success);
}

#[test]
fn default_position_is_top_right() {
    assert_eq!(ToastPosition::default(), ToastPosition::TopRight);
}

// =============================================================
// Queue behavior
// =============================================================

#[test]
fn queue_drains_in_fifo_order() {
    let mut queue = ToastQueue::new();
    queue.push(Toast::error("first"));
    queue.push(Toast::error("second"));

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.pop().expect("toast").message, "first");
    assert_eq!(queue.pop().expect("toast").message, "second");
    assert!(queue.is_empty());
}

#[test]
fn empty_queue_pops_nothing() {
    let mut queue = ToastQueue::new();
    assert_eq!(queue.pop(), None);
}
