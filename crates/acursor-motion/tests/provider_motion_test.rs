//! End-to-end motion tests: pointer input in, tween requests out.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use acursor_core::css::{BackgroundImage, Filter, Length};
use acursor_core::event::{PointerEvent, PointerEventKind};
use acursor_core::geometry::Rect;
use acursor_core::viewport::ViewportSnapshot;
use acursor_motion::{
    Element, ElementRef, MotionConfig, MotionPhase, MotionProvider, RecordingEngine, TargetEvent,
    TargetMarker, TweenEngine,
};
use pretty_assertions::assert_eq;

struct Div {
    rect: Rect,
    radius: Option<&'static str>,
}

impl Element for Div {
    fn bounding_rect(&self) -> Rect {
        self.rect
    }

    fn border_radius(&self) -> Option<String> {
        self.radius.map(str::to_string)
    }
}

fn div(rect: Rect, radius: Option<&'static str>) -> Rc<dyn Element> {
    Rc::new(Div { rect, radius })
}

struct Harness {
    provider: MotionProvider,
    engine: Rc<RefCell<RecordingEngine>>,
    indicator: Rc<dyn Element>,
}

impl Harness {
    fn new(viewport: ViewportSnapshot) -> Self {
        let engine = Rc::new(RefCell::new(RecordingEngine::new()));
        let provider =
            MotionProvider::new(MotionConfig::default(), viewport, Rc::clone(&engine)).unwrap();
        let indicator = div(Rect::new(0.0, 0.0, 20.0, 20.0), None);
        provider.mount_indicator(&indicator);
        Self {
            provider,
            engine,
            indicator,
        }
    }

    fn desktop() -> Self {
        Self::new(ViewportSnapshot::desktop(1280.0, 800.0))
    }

    fn indicator_id(&self) -> acursor_motion::ElementId {
        ElementRef::new(&self.indicator).id()
    }

    fn enter(&self, target: &Rc<dyn Element>, x: f64, y: f64) {
        self.provider.on_pointer_enter_target(&TargetEvent::new(
            PointerEvent::new(PointerEventKind::Enter, x, y),
            ElementRef::new(target),
        ));
    }

    fn leave(&self, target: &Rc<dyn Element>, x: f64, y: f64) {
        self.provider.on_pointer_leave_target(&TargetEvent::new(
            PointerEvent::new(PointerEventKind::Leave, x, y),
            ElementRef::new(target),
        ));
    }
}

#[test]
fn free_roam_positions_indicator_at_pointer_minus_radius() {
    let h = Harness::desktop();
    h.provider.on_pointer_move(&PointerEvent::moved(400.0, 250.0));

    let engine = h.engine.borrow();
    assert_eq!(engine.records().len(), 1);
    let tween = engine.last_for(h.indicator_id()).unwrap();
    assert_eq!((tween.props.x, tween.props.y), (Some(390.0), Some(240.0)));
    assert_eq!(tween.duration, Duration::from_millis(200));
}

#[test]
fn docked_worked_example() {
    let h = Harness::desktop();
    let target = div(Rect::new(100.0, 100.0, 100.0, 50.0), Some("8px"));
    h.enter(&target, 150.0, 125.0);
    let target_id = ElementRef::new(&target).id();

    // Pointer at the target center: no drift on either element.
    h.engine.borrow_mut().clear();
    h.provider.on_pointer_move(&PointerEvent::moved(150.0, 125.0));
    {
        let engine = h.engine.borrow();
        let cursor = engine.last_for(h.indicator_id()).unwrap();
        let radius = 10.0;
        assert_eq!(cursor.props.x, Some(100.0 + radius));
        assert_eq!(cursor.props.y, Some(100.0 + radius));
        let moved = engine.last_for(target_id).unwrap();
        assert_eq!((moved.props.x, moved.props.y), (Some(0.0), Some(0.0)));
    }

    // Pointer 32px right of center: indicator drifts 2, target 32/24.
    h.engine.borrow_mut().clear();
    h.provider.on_pointer_move(&PointerEvent::moved(182.0, 125.0));
    let engine = h.engine.borrow();
    let cursor = engine.last_for(h.indicator_id()).unwrap();
    assert_eq!(cursor.props.x, Some(110.0 + 2.0));
    assert_eq!(cursor.props.filter, Some(Filter::Blur(8.0)));
    assert!(matches!(
        cursor.props.background_image,
        Some(BackgroundImage::RadialGradient { at, .. }) if at.x == 82.0 && at.y == 25.0
    ));
    let moved = engine.last_for(target_id).unwrap();
    assert!((moved.props.x.unwrap() - 32.0 / 24.0).abs() < 1e-12);
    assert_eq!(moved.props.scale, Some(1.1));
    assert_eq!(moved.props.box_shadow, Some(MotionConfig::default().shadow));
}

#[test]
fn activate_copies_target_shape_and_scales_up() {
    let h = Harness::desktop();
    let target = div(Rect::new(10.0, 10.0, 100.0, 50.0), Some("8px"));
    h.enter(&target, 20.0, 20.0);

    let engine = h.engine.borrow();
    let tween = engine.last_for(h.indicator_id()).unwrap();
    assert_eq!(tween.props.width, Some(100.0));
    assert_eq!(tween.props.height, Some(50.0));
    assert_eq!(tween.props.border_radius, Some(Length::Px(8.0)));
    assert_eq!(tween.props.scale, Some(1.1));
}

#[test]
fn unparseable_radius_is_left_out() {
    let h = Harness::desktop();
    let target = div(Rect::new(10.0, 10.0, 100.0, 50.0), Some("1em"));
    h.enter(&target, 20.0, 20.0);
    let engine = h.engine.borrow();
    let tween = engine.last_for(h.indicator_id()).unwrap();
    assert!(tween.props.border_radius.is_none());
    assert_eq!(tween.props.width, Some(100.0));
}

#[test]
fn deactivate_resets_target_regardless_of_prior_displacement() {
    let h = Harness::desktop();
    let target = div(Rect::new(0.0, 0.0, 200.0, 200.0), Some("12px"));
    let target_id = ElementRef::new(&target).id();
    h.enter(&target, 5.0, 5.0);
    h.provider.on_pointer_move(&PointerEvent::moved(199.0, 1.0));
    h.leave(&target, 201.0, 1.0);

    let engine = h.engine.borrow();
    let reset = engine.last_for(target_id).unwrap();
    assert_eq!((reset.props.x, reset.props.y), (Some(0.0), Some(0.0)));
    assert_eq!(reset.props.scale, Some(1.0));
    assert_eq!(reset.props.box_shadow.unwrap().color.a, 0.0);

    let cursor = engine.last_for(h.indicator_id()).unwrap();
    assert_eq!((cursor.props.width, cursor.props.height), (Some(20.0), Some(20.0)));
    assert_eq!(cursor.props.border_radius, Some(Length::Px(100.0)));
    assert_eq!(cursor.props.background_image, Some(BackgroundImage::None));
    assert_eq!(cursor.props.filter, Some(Filter::Blur(0.0)));
}

#[test]
fn second_target_never_sees_first_targets_geometry() {
    let h = Harness::desktop();
    let a = div(Rect::new(0.0, 0.0, 100.0, 100.0), None);
    let b = div(Rect::new(500.0, 300.0, 60.0, 40.0), None);
    let (a_id, b_id) = (ElementRef::new(&a).id(), ElementRef::new(&b).id());

    h.enter(&a, 50.0, 50.0);
    h.leave(&a, 101.0, 50.0);
    h.enter(&b, 530.0, 320.0);
    h.engine.borrow_mut().clear();
    h.provider.on_pointer_move(&PointerEvent::moved(546.0, 320.0));

    let engine = h.engine.borrow();
    assert_eq!(engine.count_for(a_id), 0);
    assert_eq!(engine.count_for(b_id), 1);
    let cursor = engine.last_for(h.indicator_id()).unwrap();
    assert_eq!(cursor.props.x, Some(500.0 + 10.0 + 1.0));
    assert_eq!(cursor.props.y, Some(300.0 + 10.0));
}

#[test]
fn stray_move_after_leave_uses_free_roam() {
    let h = Harness::desktop();
    let a = div(Rect::new(0.0, 0.0, 100.0, 100.0), None);
    h.enter(&a, 50.0, 50.0);
    h.leave(&a, 101.0, 50.0);
    h.engine.borrow_mut().clear();

    h.provider.on_pointer_move(&PointerEvent::moved(120.0, 60.0));
    let engine = h.engine.borrow();
    assert_eq!(engine.records().len(), 1);
    let cursor = engine.last_for(h.indicator_id()).unwrap();
    assert_eq!((cursor.props.x, cursor.props.y), (Some(110.0), Some(50.0)));
}

#[test]
fn dropped_target_while_docked_falls_back_to_free_roam() {
    let h = Harness::desktop();
    let a = div(Rect::new(0.0, 0.0, 100.0, 100.0), None);
    h.enter(&a, 50.0, 50.0);
    drop(a);
    h.engine.borrow_mut().clear();

    h.provider.on_pointer_move(&PointerEvent::moved(40.0, 40.0));
    assert_eq!(h.provider.phase(), MotionPhase::Docked);
    let engine = h.engine.borrow();
    assert_eq!(engine.records().len(), 1);
    assert_eq!(engine.last_for(h.indicator_id()).unwrap().props.x, Some(30.0));
}

#[test]
fn touch_viewport_ignores_pointer_moves() {
    let h = Harness::new(ViewportSnapshot::touch(390.0, 844.0));
    let target = div(Rect::new(0.0, 0.0, 100.0, 100.0), None);
    h.enter(&target, 10.0, 10.0);
    h.engine.borrow_mut().clear();

    for i in 0..5 {
        h.provider.on_pointer_move(&PointerEvent::moved(f64::from(i) * 10.0, 20.0));
    }
    assert!(h.engine.borrow().is_empty());
}

#[test]
fn marker_driven_session_with_reference_engine() {
    let engine = Rc::new(RefCell::new(TweenEngine::new()));
    let provider = MotionProvider::with_defaults(
        ViewportSnapshot::desktop(1280.0, 800.0),
        Rc::clone(&engine),
    );
    let indicator = div(Rect::new(0.0, 0.0, 20.0, 20.0), None);
    provider.mount_indicator(&indicator);
    let indicator_id = ElementRef::new(&indicator).id();

    let button = div(Rect::new(100.0, 100.0, 100.0, 50.0), Some("8px"));
    let button_id = ElementRef::new(&button).id();
    let marker = TargetMarker::new(Some(&provider.context()), &button).unwrap();

    marker
        .handle_event(&PointerEvent::new(PointerEventKind::Enter, 150.0, 125.0))
        .unwrap();
    provider.on_pointer_move(&PointerEvent::moved(182.0, 125.0));
    engine.borrow_mut().tick(Duration::from_millis(250));

    {
        let engine = engine.borrow();
        let cursor = engine.state(indicator_id).unwrap();
        assert_eq!((cursor.width, cursor.height), (100.0, 50.0));
        assert_eq!(cursor.border_radius, Length::Px(8.0));
        assert_eq!(cursor.x, 112.0);
        assert_eq!(cursor.blur, 8.0);
        let target = engine.state(button_id).unwrap();
        assert_eq!(target.scale, 1.1);
    }

    marker
        .handle_event(&PointerEvent::new(PointerEventKind::Leave, 201.0, 125.0))
        .unwrap();
    engine.borrow_mut().tick(Duration::from_millis(250));

    let engine = engine.borrow();
    let cursor = engine.state(indicator_id).unwrap();
    assert_eq!((cursor.width, cursor.scale, cursor.blur), (20.0, 1.0, 0.0));
    assert_eq!(cursor.background_image, BackgroundImage::None);
    let target = engine.state(button_id).unwrap();
    assert_eq!((target.x, target.y, target.scale), (0.0, 0.0, 1.0));
    assert_eq!(target.box_shadow.unwrap().color.a, 0.0);
    assert!(!engine.is_animating());
}
