#![forbid(unsafe_code)]

//! Motion: the adaptive cursor's provider, parallax model, and targets.
//!
//! # Role in adaptive-cursor
//! `acursor-motion` is the behavior layer. It consumes `acursor-core` pointer
//! events and emits tween requests to a host-supplied animation engine.
//!
//! # Primary responsibilities
//! - **MotionProvider**: hover state machine (`FreeRoam` / `Docked`) and
//!   the pointer-move, activate, and deactivate motions.
//! - **MotionModel**: the pure parallax math behind those motions.
//! - **MotionContext / TargetMarker**: the consumer side of the provider.
//! - **AnimationEngine**: the message-passing seam to the host's animator,
//!   with a recording engine and a deterministic reference engine.
//! - **MotionConfig**: defaults, validation, and optional file loading.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use acursor_core::event::{PointerEvent, PointerEventKind};
//! use acursor_core::geometry::Rect;
//! use acursor_core::viewport::ViewportSnapshot;
//! use acursor_motion::{Element, MotionProvider, RecordingEngine, TargetMarker};
//!
//! struct Div(Rect);
//! impl Element for Div {
//!     fn bounding_rect(&self) -> Rect { self.0 }
//! }
//!
//! let engine = Rc::new(RefCell::new(RecordingEngine::new()));
//! let provider = MotionProvider::with_defaults(
//!     ViewportSnapshot::desktop(1280.0, 800.0),
//!     Rc::clone(&engine),
//! );
//! let indicator: Rc<dyn Element> = Rc::new(Div(Rect::new(0.0, 0.0, 20.0, 20.0)));
//! provider.mount_indicator(&indicator);
//!
//! let button: Rc<dyn Element> = Rc::new(Div(Rect::new(100.0, 100.0, 120.0, 40.0)));
//! let marker = TargetMarker::new(Some(&provider.context()), &button).unwrap();
//!
//! marker.handle_event(&PointerEvent::new(PointerEventKind::Enter, 110.0, 110.0)).unwrap();
//! provider.on_pointer_move(&PointerEvent::moved(130.0, 115.0));
//! assert!(!engine.borrow().is_empty());
//! ```

pub mod config;
pub mod context;
pub mod element;
pub mod engine;
pub mod flag;
pub mod hover;
pub mod parallax;
pub mod provider;
pub mod style;
pub mod target;
pub mod tween;

pub use config::{MotionConfig, MotionConfigError};
pub use context::{MotionContext, MotionError};
pub use element::{Element, ElementGeometry, ElementId, ElementRef};
pub use engine::{AnimationEngine, RecordingEngine, TweenEngine, TweenRecord, VisualState};
pub use flag::{Flag, Watch};
pub use hover::{HoverState, MotionPhase, TargetEvent};
pub use parallax::{MotionModel, move_index};
pub use provider::MotionProvider;
pub use style::{CursorStyle, TargetStyle};
pub use target::TargetMarker;
pub use tween::{Tween, TweenProps};
