#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn style(color: &str) -> StrokeStyle {
    StrokeStyle { color: color.to_owned(), brush_size: 4.0, mode: StrokeMode::Draw }
}

fn erase_style() -> StrokeStyle {
    StrokeStyle { color: "#000000".to_owned(), brush_size: 12.0, mode: StrokeMode::Erase }
}

fn stroke(color: &str) -> Stroke {
    Stroke::new(pt(0.0, 0.0), style(color))
}

// --- StrokeStyle ---

#[test]
fn draw_resolves_to_own_color() {
    let s = style("#FF0000");
    assert_eq!(s.resolved_color(), "#FF0000");
}

#[test]
fn erase_resolves_to_background() {
    let s = erase_style();
    assert_eq!(s.resolved_color(), BACKGROUND_COLOR);
}

#[test]
fn erase_resolution_ignores_own_color() {
    let s = StrokeStyle { color: "#00FF00".to_owned(), brush_size: 2.0, mode: StrokeMode::Erase };
    assert_ne!(s.resolved_color(), "#00FF00");
}

// --- Stroke ---

#[test]
fn new_stroke_has_one_point() {
    let s = stroke("#000000");
    assert_eq!(s.points.len(), 1);
    assert_eq!(s.points[0], pt(0.0, 0.0));
}

#[test]
fn push_appends_in_order() {
    let mut s = stroke("#000000");
    s.push(pt(1.0, 1.0));
    s.push(pt(2.0, 2.0));
    assert_eq!(s.points, vec![pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)]);
}

// --- StrokeLog basics ---

#[test]
fn empty_log_has_nothing_to_undo_or_redo() {
    let log = StrokeLog::new();
    assert!(!log.can_undo());
    assert!(!log.can_redo());
    assert!(log.active().is_empty());
    assert!(log.is_empty());
}

#[test]
fn commit_activates_the_stroke() {
    let mut log = StrokeLog::new();
    log.commit(stroke("#000000"));
    assert_eq!(log.len(), 1);
    assert_eq!(log.cursor(), 1);
    assert_eq!(log.active().len(), 1);
    assert!(log.can_undo());
    assert!(!log.can_redo());
}

#[test]
fn commits_keep_order() {
    let mut log = StrokeLog::new();
    log.commit(stroke("#AA0000"));
    log.commit(stroke("#00BB00"));
    let colors: Vec<&str> = log.active().iter().map(|s| s.style.color.as_str()).collect();
    assert_eq!(colors, vec!["#AA0000", "#00BB00"]);
}

// --- undo / redo ---

#[test]
fn undo_deactivates_latest() {
    let mut log = StrokeLog::new();
    log.commit(stroke("#000000"));
    assert!(log.undo());
    assert_eq!(log.cursor(), 0);
    assert!(log.active().is_empty());
    assert!(!log.can_undo());
    assert!(log.can_redo());
}

#[test]
fn undo_at_beginning_is_rejected() {
    let mut log = StrokeLog::new();
    assert!(!log.undo());
    log.commit(stroke("#000000"));
    log.undo();
    assert!(!log.undo());
    assert_eq!(log.cursor(), 0);
}

#[test]
fn redo_reactivates_undone() {
    let mut log = StrokeLog::new();
    log.commit(stroke("#000000"));
    log.undo();
    assert!(log.redo());
    assert_eq!(log.active().len(), 1);
    assert!(!log.can_redo());
}

#[test]
fn redo_at_end_is_rejected() {
    let mut log = StrokeLog::new();
    assert!(!log.redo());
    log.commit(stroke("#000000"));
    assert!(!log.redo());
    assert_eq!(log.cursor(), 1);
}

#[test]
fn undone_strokes_are_retained_until_overwritten() {
    let mut log = StrokeLog::new();
    log.commit(stroke("#000000"));
    log.undo();
    assert_eq!(log.len(), 1);
    assert!(log.active().is_empty());
}

// --- Redo-tail truncation ---

#[test]
fn commit_truncates_redo_tail() {
    let mut log = StrokeLog::new();
    log.commit(stroke("#0000AA")); // A
    log.commit(stroke("#0000BB")); // B
    log.commit(stroke("#0000CC")); // C
    log.undo();
    log.undo();
    log.commit(stroke("#0000DD")); // D

    assert_eq!(log.len(), 2);
    assert_eq!(log.cursor(), 2);
    let colors: Vec<&str> = log.active().iter().map(|s| s.style.color.as_str()).collect();
    assert_eq!(colors, vec!["#0000AA", "#0000DD"]);
}

#[test]
fn truncated_strokes_are_unreachable_by_redo() {
    let mut log = StrokeLog::new();
    log.commit(stroke("#0000AA"));
    log.commit(stroke("#0000BB"));
    log.undo();
    log.commit(stroke("#0000CC"));

    assert!(!log.can_redo());
    assert!(!log.redo());
    let colors: Vec<&str> = log.active().iter().map(|s| s.style.color.as_str()).collect();
    assert_eq!(colors, vec!["#0000AA", "#0000CC"]);
}

// --- can_undo / can_redo across sequences ---

#[test]
fn queries_track_cursor_through_mixed_sequence() {
    let mut log = StrokeLog::new();
    for _ in 0..3 {
        log.commit(stroke("#000000"));
    }
    assert!(log.can_undo());
    assert!(!log.can_redo());

    log.undo();
    assert!(log.can_undo());
    assert!(log.can_redo());

    log.undo();
    log.undo();
    assert!(!log.can_undo());
    assert!(log.can_redo());

    log.redo();
    assert!(log.can_undo());
    assert!(log.can_redo());
}

// --- clear ---

#[test]
fn clear_resets_everything() {
    let mut log = StrokeLog::new();
    log.commit(stroke("#000000"));
    log.commit(stroke("#111111"));
    log.undo();
    log.clear();

    assert!(log.is_empty());
    assert_eq!(log.cursor(), 0);
    assert!(!log.can_undo());
    assert!(!log.can_redo());
    assert!(log.active().is_empty());
}

// --- Replay determinism (on the recorded data) ---

#[test]
fn active_slice_is_stable_across_reads() {
    let mut log = StrokeLog::new();
    log.commit(stroke("#AA0000"));
    log.commit(stroke("#00BB00"));
    log.undo();

    let first: Vec<Stroke> = log.active().to_vec();
    let second: Vec<Stroke> = log.active().to_vec();
    assert_eq!(first, second);
}

#[test]
fn erase_stays_background_after_undo_redo() {
    let mut log = StrokeLog::new();
    log.commit(Stroke::new(pt(1.0, 1.0), erase_style()));
    log.undo();
    log.redo();

    let colors: Vec<&str> = log.active().iter().map(|s| s.style.resolved_color()).collect();
    assert_eq!(colors, vec![BACKGROUND_COLOR]);
}
