use std::cell::RefCell;
use std::rc::Rc;

use edgescroll_core::{
    continuous_scroll, scrollable, AutoScroll, AutoScrollOptions, ContinuousScrollOptions,
    ControllerState, Direction, EdgeGeometry, EdgeThresholds, FrameQueue, MemorySurface,
    PointerChannels, PointerEvent, ScrollableSurface, TrackingMode,
};

/// 100x100 viewport over 100x300 content, scrolled to the middle
fn tall_surface(scroll_top: f64) -> Rc<MemorySurface> {
    Rc::new(MemorySurface::new(100.0, 100.0, 100.0, 300.0).with_offset(0.0, scroll_top))
}

#[test]
fn surfaces_without_overflow_never_scroll() {
    for (width, height) in [(100.0, 100.0), (250.0, 100.0), (100.0, 250.0)] {
        let surface = MemorySurface::new(width, height, width, height).with_offset(0.0, 0.0);
        for direction in Direction::DETECTION_ORDER {
            assert!(!scrollable(&surface, direction), "{width}x{height} {direction}");
        }
    }
}

#[test]
fn top_is_scrollable_only_above_zero() {
    for offset in [0.0, 0.5, 1.0, 50.0, 200.0] {
        let surface = tall_surface(offset);
        assert_eq!(scrollable(&*surface, Direction::Top), offset > 0.0, "offset {offset}");
    }
}

#[test]
fn loop_on_unscrollable_surface_is_inert() {
    let surface = tall_surface(0.0);
    let queue = Rc::new(FrameQueue::new());
    let handle = continuous_scroll(
        surface.clone(),
        queue.clone(),
        ContinuousScrollOptions { direction: Direction::Top, step: 5.0 },
    );

    assert!(handle.is_none());
    assert_eq!(queue.run_frames(5), 0);
    assert_eq!(surface.write_count(), 0);
}

#[test]
fn loop_steps_by_k_until_zero() {
    let surface = tall_surface(50.0);
    let queue = Rc::new(FrameQueue::new());
    let _handle = continuous_scroll(
        surface.clone(),
        queue.clone(),
        ContinuousScrollOptions { direction: Direction::Top, step: 5.0 },
    )
    .expect("surface is scrollable");

    let mut expected = 50.0;
    while expected > 0.0 {
        queue.run_frame();
        expected -= 5.0;
        assert_eq!(surface.scroll_top(), expected);
    }

    let writes = surface.write_count();
    queue.run_frames(10);
    assert_eq!(surface.write_count(), writes);
    assert_eq!(surface.scroll_top(), 0.0);
}

#[test]
fn detection_prefers_top_over_left() {
    let geometry = EdgeGeometry { top: 0.0, left: 0.0, bottom: 100.0, right: 100.0 };
    let edges = EdgeThresholds::new()
        .with(Direction::Left, 30.0)
        .with(Direction::Top, 30.0);
    assert_eq!(geometry.detect(&edges, 10.0, 10.0), Some(Direction::Top));
}

#[test]
fn detection_outside_or_unconfigured_is_none() {
    let geometry = EdgeGeometry { top: 0.0, left: 0.0, bottom: 100.0, right: 100.0 };
    let edges = EdgeThresholds::new().with(Direction::Top, 20.0);
    assert_eq!(geometry.detect(&edges, 50.0, 50.0), None);
    // right has no threshold, so its edge is inert
    assert_eq!(geometry.detect(&edges, 100.0, 50.0), None);
}

#[test]
fn controller_scenario_enter_stay_leave() {
    let surface = tall_surface(50.0);
    let queue = Rc::new(FrameQueue::new());
    let pointer = Rc::new(PointerChannels::new());
    let calls = Rc::new(RefCell::new(Vec::new()));

    let recorded = calls.clone();
    let options = AutoScrollOptions::new(surface.clone())
        .step(5.0)
        .edge(EdgeThresholds::new().with(Direction::Top, 20.0))
        .on_direction_change(move |d| recorded.borrow_mut().push(d));
    let mut controller = AutoScroll::new(options, queue.clone(), pointer.clone()).unwrap();

    assert_eq!(
        controller.geometry(),
        EdgeGeometry { top: 0.0, left: 0.0, bottom: 100.0, right: 100.0 }
    );

    controller.activate();
    assert_eq!(controller.state(), ControllerState::Idle);

    pointer.dispatch(TrackingMode::MouseMove, PointerEvent::new(50.0, 10.0));
    assert_eq!(controller.state(), ControllerState::Scrolling(Direction::Top));
    assert_eq!(*calls.borrow(), vec![Direction::Top]);
    // nothing moves until the frame fires
    assert_eq!(surface.scroll_top(), 50.0);

    queue.run_frame();
    assert_eq!(surface.scroll_top(), 45.0);

    pointer.dispatch(TrackingMode::MouseMove, PointerEvent::new(50.0, 10.0));
    assert_eq!(calls.borrow().len(), 1);
    queue.run_frame();
    assert_eq!(surface.scroll_top(), 40.0);

    pointer.dispatch(TrackingMode::MouseMove, PointerEvent::new(50.0, 60.0));
    assert_eq!(controller.state(), ControllerState::Idle);
    queue.run_frames(5);
    assert_eq!(surface.scroll_top(), 40.0);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn deactivate_mid_scroll_stops_writes() {
    let surface = tall_surface(150.0);
    let queue = Rc::new(FrameQueue::new());
    let pointer = Rc::new(PointerChannels::new());

    let options = AutoScrollOptions::new(surface.clone())
        .step(3.0)
        .edge(EdgeThresholds::new().with(Direction::Bottom, 15.0));
    let mut controller = AutoScroll::new(options, queue.clone(), pointer.clone()).unwrap();
    controller.activate();

    pointer.dispatch(TrackingMode::MouseMove, PointerEvent::new(10.0, 95.0));
    queue.run_frames(2);
    assert_eq!(surface.scroll_top(), 156.0);

    controller.deactivate();
    let writes = surface.write_count();
    queue.run_frames(5);
    assert_eq!(surface.write_count(), writes);
    assert_eq!(controller.state(), ControllerState::Inactive);

    // reactivation works after a full stop
    controller.activate();
    pointer.dispatch(TrackingMode::MouseMove, PointerEvent::new(10.0, 95.0));
    queue.run_frame();
    assert_eq!(surface.scroll_top(), 159.0);
}

#[test]
fn deactivate_from_direction_callback() {
    let surface = tall_surface(150.0);
    let queue = Rc::new(FrameQueue::new());
    let pointer = Rc::new(PointerChannels::new());

    // the callback asks the owner to stop; the owner reacts after dispatch
    let stop_requested = Rc::new(RefCell::new(false));
    let flag = stop_requested.clone();
    let options = AutoScrollOptions::new(surface.clone())
        .edge(EdgeThresholds::new().with(Direction::Bottom, 15.0))
        .on_direction_change(move |_| *flag.borrow_mut() = true);
    let mut controller = AutoScroll::new(options, queue.clone(), pointer.clone()).unwrap();
    controller.activate();

    pointer.dispatch(TrackingMode::MouseMove, PointerEvent::new(10.0, 95.0));
    assert!(*stop_requested.borrow());
    controller.deactivate();

    assert_eq!(queue.run_frames(3), 0);
    assert_eq!(surface.scroll_top(), 150.0);
}
