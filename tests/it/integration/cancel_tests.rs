//! Cancellation semantics at the keyboard level: origin restore,
//! idempotence, and the deliberately unreset handle.

use crate::helpers::{TestScene, move_to, press_at, release_at};
use dragdeck::GestureEvent;
use dragdeck::types::point;

#[test]
fn test_cancel_restores_origin_regardless_of_moves() {
    let mut scene = TestScene::new();

    // Bar is 40x15 at (0,0); offset fixes at (5,5).
    scene.feed(press_at(5.0, 5.0)).unwrap();
    scene.feed(move_to(20.0, 20.0)).unwrap();
    scene.feed(move_to(30.0, 25.0)).unwrap();
    assert_eq!(scene.keyboard.translation(), point(25.0, 20.0));

    scene.cancel().unwrap();

    assert_eq!(scene.keyboard.translation(), point(0.0, 0.0));
    assert!(!scene.keyboard.is_dragging());
    // The restore re-rendered the widget at its origin.
    assert_eq!(scene.host.last_translation(), Some(point(0.0, 0.0)));
    // Cancellation is local: nothing new reached the root.
    assert!(
        !scene
            .event_log()
            .iter()
            .any(|e| e.event == GestureEvent::Cancel)
    );
}

#[test]
fn test_double_cancel_while_idle_is_idempotent() {
    let mut scene = TestScene::new();

    scene.feed(press_at(5.0, 5.0)).unwrap();
    scene.feed(move_to(20.0, 20.0)).unwrap();
    scene.cancel().unwrap();
    scene.cancel().unwrap();
    scene.cancel().unwrap();

    assert_eq!(scene.keyboard.translation(), point(0.0, 0.0));
    assert!(!scene.keyboard.is_dragging());
}

#[test]
fn test_cancel_before_any_drag_is_a_quiet_restore() {
    let mut scene = TestScene::new();
    let frames_before = scene.host.commits.len();

    scene.cancel().unwrap();

    assert_eq!(scene.keyboard.translation(), point(0.0, 0.0));
    assert!(scene.event_log().is_empty());
    // The restore still pushes a frame.
    assert_eq!(scene.host.commits.len(), frames_before + 1);
}

#[test]
fn test_cancelled_handle_stays_pressed_and_captured() {
    let mut scene = TestScene::new();

    scene.feed(press_at(5.0, 5.0)).unwrap();
    scene.feed(move_to(20.0, 20.0)).unwrap();
    scene.cancel().unwrap();

    // The bar did not reset: it is still pressed and still the capture
    // holder.
    assert!(scene.keyboard.handle().is_pressed());
    assert_eq!(
        scene.router.holder(),
        Some(scene.keyboard.handle().id())
    );

    // Its move emissions keep flowing, but with the group idle they pass
    // the chain untouched: no identity tag, raw pointer coordinates.
    let before = scene.event_log().len();
    scene.feed(move_to(33.0, 44.0)).unwrap();
    let log = scene.event_log();
    assert_eq!(log.len(), before + 1);
    assert_eq!(log[before].source, None);
    assert_eq!(log[before].event, GestureEvent::Move { x: 33.0, y: 44.0 });
    assert_eq!(scene.keyboard.translation(), point(0.0, 0.0));

    // A genuine release finally closes the session and frees the pointer.
    scene.feed(release_at(33.0, 44.0)).unwrap();
    assert!(!scene.keyboard.handle().is_pressed());
    assert_eq!(scene.router.holder(), None);
}

#[test]
fn test_new_session_after_cancel_rolls_back_to_new_origin() {
    let mut scene = TestScene::new();

    // First session: move to (15,15) and release there.
    scene.feed(press_at(5.0, 5.0)).unwrap();
    scene.feed(move_to(20.0, 20.0)).unwrap();
    scene.feed(release_at(20.0, 20.0)).unwrap();
    assert_eq!(scene.keyboard.translation(), point(15.0, 15.0));

    // Second session starts from the new resting spot.
    scene.feed(press_at(20.0, 20.0)).unwrap();
    scene.feed(move_to(100.0, 100.0)).unwrap();
    scene.cancel().unwrap();

    // Cancel rolls back to the second session's origin, not to (0,0).
    assert_eq!(scene.keyboard.translation(), point(15.0, 15.0));
}
