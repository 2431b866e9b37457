//! Press-state tracking and its effect on paint.

mod common;

use common::{sample_style, BLUE, RED};
use speech_bubble::widget::PressState;
use speech_bubble::{ArrowSide, BubbleFrame, PointerEvent};

const W: f32 = 216.0;
const H: f32 = 80.0;

fn send(frame: &mut BubbleFrame, event: PointerEvent) -> bool {
    frame.dispatch_pointer(&event, W, H, |_| false)
}

fn fill_color(frame: &BubbleFrame) -> speech_bubble::Color {
    frame.paint_spec().passes[0].color
}

/// Down inside, then up: pressed in between, idle after.
#[test]
fn test_press_release_cycle() {
    let mut frame = BubbleFrame::new(sample_style(ArrowSide::Right));
    assert_eq!(frame.interaction().state(), PressState::Idle);
    assert_eq!(fill_color(&frame), BLUE);

    send(&mut frame, PointerEvent::Down { x: 30.0, y: 30.0 });
    assert_eq!(frame.interaction().state(), PressState::Pressed);
    assert_eq!(fill_color(&frame), RED);
    assert!(frame.take_redraw());

    send(&mut frame, PointerEvent::Up { x: 30.0, y: 30.0 });
    assert_eq!(frame.interaction().state(), PressState::Idle);
    assert_eq!(fill_color(&frame), BLUE);
    assert!(frame.take_redraw());
}

/// Cancel ends a press like a release.
#[test]
fn test_cancel_releases() {
    let mut frame = BubbleFrame::new(sample_style(ArrowSide::Left));
    send(&mut frame, PointerEvent::Down { x: 30.0, y: 30.0 });
    send(&mut frame, PointerEvent::Cancel);
    assert!(!frame.is_pressed());
}

/// Moves and scrolls neither change state nor request a redraw.
#[test]
fn test_other_events_are_ignored() {
    let mut frame = BubbleFrame::new(sample_style(ArrowSide::Right));
    send(&mut frame, PointerEvent::Down { x: 30.0, y: 30.0 });
    frame.take_redraw();

    send(&mut frame, PointerEvent::Move { x: 500.0, y: 500.0 });
    send(&mut frame, PointerEvent::Scroll { dy: 3.0 });
    assert!(frame.is_pressed());
    assert!(!frame.take_redraw());
}

/// A down outside the frame leaves it idle.
#[test]
fn test_down_outside_is_ignored() {
    let mut frame = BubbleFrame::new(sample_style(ArrowSide::Right));
    send(&mut frame, PointerEvent::Down { x: W + 5.0, y: 10.0 });
    assert!(!frame.is_pressed());
}

/// Repeated downs stay pressed; a stray up while idle stays idle.
#[test]
fn test_transitions_are_idempotent() {
    let mut frame = BubbleFrame::new(sample_style(ArrowSide::Right));
    send(&mut frame, PointerEvent::Up { x: 1.0, y: 1.0 });
    assert!(!frame.is_pressed());
    send(&mut frame, PointerEvent::Down { x: 1.0, y: 1.0 });
    send(&mut frame, PointerEvent::Down { x: 2.0, y: 2.0 });
    assert!(frame.is_pressed());
}

/// Whatever the state does, the default handler sees the event and decides
/// whether it was consumed.
#[test]
fn test_default_handler_verdict_is_returned() {
    let mut frame = BubbleFrame::new(sample_style(ArrowSide::Right));
    let mut calls = 0;
    let consumed = frame.dispatch_pointer(&PointerEvent::Down { x: 5.0, y: 5.0 }, W, H, |e| {
        calls += 1;
        matches!(e, PointerEvent::Down { .. })
    });
    assert!(consumed);
    assert_eq!(calls, 1);
    assert!(frame.is_pressed());

    let consumed = frame.dispatch_pointer(&PointerEvent::Cancel, W, H, |_| false);
    assert!(!consumed);
}

/// Press state belongs to each frame, not to the widget type.
#[test]
fn test_frames_do_not_share_state() {
    let mut a = BubbleFrame::new(sample_style(ArrowSide::Right));
    let b = BubbleFrame::new(sample_style(ArrowSide::Right));
    send(&mut a, PointerEvent::Down { x: 5.0, y: 5.0 });
    assert!(a.is_pressed());
    assert!(!b.is_pressed());
}
