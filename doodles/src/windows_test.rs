use super::*;

fn viewport() -> Size {
    Size::new(1280.0, 900.0)
}

// =============================================================
// Placement
// =============================================================

#[test]
fn window_sits_below_and_centered_on_anchor() {
    let anchor = Rect::new(500.0, 200.0, 120.0, 20.0);
    let p = position_window(Some(anchor), viewport());
    assert_eq!(p, Point::new(360.0, 240.0));
}

#[test]
fn window_clamps_to_left_margin() {
    let anchor = Rect::new(10.0, 200.0, 40.0, 20.0);
    assert_eq!(position_window(Some(anchor), viewport()).x, 20.0);
}

#[test]
fn window_clamps_to_right_margin() {
    let anchor = Rect::new(1200.0, 200.0, 60.0, 20.0);
    assert_eq!(position_window(Some(anchor), viewport()).x, 860.0);
}

#[test]
fn window_flips_above_when_bottom_overflows() {
    let anchor = Rect::new(500.0, 700.0, 120.0, 20.0);
    assert_eq!(position_window(Some(anchor), viewport()).y, 260.0);
}

#[test]
fn flipped_window_never_goes_above_top_margin() {
    let anchor = Rect::new(500.0, 300.0, 120.0, 20.0);
    let short = Size::new(1280.0, 500.0);
    assert_eq!(position_window(Some(anchor), short).y, 20.0);
}

#[test]
fn unanchored_window_is_centered_at_fixed_top() {
    assert_eq!(position_window(None, viewport()), Point::new(440.0, 100.0));
}

// =============================================================
// Stacking
// =============================================================

#[test]
fn context_issues_increasing_tokens_from_first_z() {
    let mut ctx = StackContext::new();
    assert_eq!(ctx.issue(), FIRST_Z);
    assert_eq!(ctx.issue(), FIRST_Z + 1);
}

#[test]
fn open_creates_then_raises() {
    let mut stack = WindowStack::new();
    assert_eq!(stack.open("beginner"), Opened::Created(1000));
    assert_eq!(stack.open("invert"), Opened::Created(1001));
    assert_eq!(stack.open("beginner"), Opened::Raised(1002));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.topmost(), Some("beginner"));
}

#[test]
fn bring_to_front_only_touches_open_windows() {
    let mut stack = WindowStack::new();
    stack.open("freed");
    stack.open("living");
    assert_eq!(stack.bring_to_front("freed"), Some(1002));
    assert_eq!(stack.bring_to_front("limits"), None);
    assert!(stack.z_of("freed") > stack.z_of("living"));
}

#[test]
fn close_forgets_window() {
    let mut stack = WindowStack::new();
    stack.open("freed");
    assert!(stack.close("freed"));
    assert!(!stack.close("freed"));
    assert!(stack.is_empty());
    assert_eq!(stack.z_of("freed"), None);
}

#[test]
fn close_topmost_walks_down_the_stack() {
    let mut stack = WindowStack::new();
    stack.open("a");
    stack.open("b");
    stack.open("c");
    stack.bring_to_front("a");
    assert_eq!(stack.close_topmost().as_deref(), Some("a"));
    assert_eq!(stack.close_topmost().as_deref(), Some("c"));
    assert_eq!(stack.close_topmost().as_deref(), Some("b"));
    assert_eq!(stack.close_topmost(), None);
}

#[test]
fn reopened_window_gets_fresh_token() {
    let mut stack = WindowStack::new();
    stack.open("a");
    stack.close("a");
    assert_eq!(stack.open("a"), Opened::Created(1001));
}
