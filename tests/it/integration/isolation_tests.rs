//! Sibling isolation: two keyboards on one surface never observe each
//! other's events, and capture starves the non-holder of samples.

use crate::helpers::{TestHost, init_tracing, move_to, press_at, release_at, tight_metrics, tiny_layout};
use dragdeck::types::point;
use dragdeck::widgets::VirtualKeyboard;
use dragdeck::{BubbledEvent, InputEvent, PointerRouter, WidgetResult};

/// Two keyboards sharing one router and one host, each with its own root
/// event log - the §6 consumer per instance.
struct Pair {
    host: TestHost,
    router: PointerRouter,
    first: VirtualKeyboard,
    second: VirtualKeyboard,
    first_events: Vec<BubbledEvent>,
    second_events: Vec<BubbledEvent>,
}

impl Pair {
    fn new() -> Self {
        init_tracing();
        let mut host = TestHost::new();
        let first = VirtualKeyboard::new(&tiny_layout(), tight_metrics(), &mut host).unwrap();
        let second = VirtualKeyboard::new(&tiny_layout(), tight_metrics(), &mut host).unwrap();
        Self {
            host,
            router: PointerRouter::new(),
            first,
            second,
            first_events: Vec::new(),
            second_events: Vec::new(),
        }
    }

    /// Deliver one sample to both widgets in registration order.
    fn feed(&mut self, event: InputEvent) -> WidgetResult<()> {
        let events = &mut self.first_events;
        self.first
            .dispatch_input(&event, &mut self.router, &mut self.host, &mut |e| {
                events.push(e)
            })?;
        let events = &mut self.second_events;
        self.second
            .dispatch_input(&event, &mut self.router, &mut self.host, &mut |e| {
                events.push(e)
            })
    }
}

#[test]
fn test_capture_excludes_the_overlapping_sibling() {
    let mut pair = Pair::new();

    // Both bars start at (0,0); the first to process the press captures,
    // and the broker then starves the second of every sample.
    pair.feed(press_at(5.0, 5.0)).unwrap();
    pair.feed(move_to(20.0, 20.0)).unwrap();
    pair.feed(release_at(20.0, 20.0)).unwrap();

    assert_eq!(pair.first.translation(), point(15.0, 15.0));
    assert_eq!(pair.second.translation(), point(0.0, 0.0));
    assert_eq!(pair.first_events.len(), 3);
    assert!(pair.second_events.is_empty());
}

#[test]
fn test_sequential_drags_stay_fully_isolated() {
    let mut pair = Pair::new();

    // Park the first keyboard elsewhere so the bars no longer overlap.
    pair.feed(press_at(5.0, 5.0)).unwrap();
    pair.feed(move_to(105.0, 205.0)).unwrap();
    pair.feed(release_at(105.0, 205.0)).unwrap();
    assert_eq!(pair.first.translation(), point(100.0, 200.0));

    // Now drag the second, whose bar still sits at (0,0).
    pair.feed(press_at(5.0, 5.0)).unwrap();
    pair.feed(move_to(55.0, 35.0)).unwrap();
    pair.feed(release_at(55.0, 35.0)).unwrap();

    assert_eq!(pair.first.translation(), point(100.0, 200.0));
    assert_eq!(pair.second.translation(), point(50.0, 30.0));

    // Every root event is tagged with the emitting group, and neither log
    // contains the other's identity.
    assert!(
        pair.first_events
            .iter()
            .all(|e| e.source == Some(pair.first.id()))
    );
    assert!(
        pair.second_events
            .iter()
            .all(|e| e.source == Some(pair.second.id()))
    );
    assert_eq!(pair.first_events.len(), 3);
    assert_eq!(pair.second_events.len(), 3);
}

#[test]
fn test_free_pointer_reaches_every_listener() {
    let mut pair = Pair::new();

    // With no capture held, a stray motion sample is admitted everywhere -
    // both handles are idle, so neither emits.
    pair.feed(move_to(300.0, 300.0)).unwrap();
    assert!(pair.first_events.is_empty());
    assert!(pair.second_events.is_empty());
    assert_eq!(pair.router.holder(), None);
}
