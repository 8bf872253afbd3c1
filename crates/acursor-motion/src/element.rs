#![forbid(unsafe_code)]

//! Non-owning references to host elements.
//!
//! The provider never owns the elements it animates. Hosts hand it
//! `Rc<dyn Element>` handles; the provider keeps only [`ElementRef`]s, which
//! wrap a `Weak` and read geometry on demand. When the host drops an element
//! the reference stops resolving and every motion update that needs it is
//! skipped.

use std::fmt;
use std::rc::{Rc, Weak};

use acursor_core::geometry::{Rect, Size};

/// A host element the cursor can measure.
pub trait Element {
    /// Bounding box in viewport coordinates (the `left`/`top` source).
    fn bounding_rect(&self) -> Rect;

    /// Inner (client) size, the `width`/`height` source.
    ///
    /// Defaults to the bounding box size, which is exact for elements
    /// without borders or scrollbars.
    fn client_size(&self) -> Size {
        self.bounding_rect().size()
    }

    /// Resolved `border-radius` text, e.g. `"8px"`. `None` if unavailable.
    fn border_radius(&self) -> Option<String> {
        None
    }
}

/// Identity of an element, stable while any [`ElementRef`] to it exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Geometry read from an element at animation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementGeometry {
    pub rect: Rect,
    pub client: Size,
}

/// A weak, non-owning reference to a host element.
#[derive(Clone)]
pub struct ElementRef {
    id: ElementId,
    node: Weak<dyn Element>,
}

impl ElementRef {
    /// Reference a type-erased element.
    pub fn new(element: &Rc<dyn Element>) -> Self {
        // The allocation outlives the last Weak, so the address stays unique
        // for as long as this reference exists.
        let id = ElementId(Rc::as_ptr(element).cast::<()>() as usize);
        Self {
            id,
            node: Rc::downgrade(element),
        }
    }

    /// Reference a concrete element.
    pub fn of<E: Element + 'static>(element: &Rc<E>) -> Self {
        let erased: Rc<dyn Element> = element.clone();
        Self::new(&erased)
    }

    #[must_use]
    pub const fn id(&self) -> ElementId {
        self.id
    }

    /// Strong handle, if the host still holds the element.
    #[must_use]
    pub fn upgrade(&self) -> Option<Rc<dyn Element>> {
        self.node.upgrade()
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.node.strong_count() > 0
    }

    /// Current geometry, or `None` once the element is gone.
    #[must_use]
    pub fn geometry(&self) -> Option<ElementGeometry> {
        self.upgrade().map(|el| ElementGeometry {
            rect: el.bounding_rect(),
            client: el.client_size(),
        })
    }

    /// Resolved corner radius text, if the element is alive and reports one.
    #[must_use]
    pub fn border_radius(&self) -> Option<String> {
        self.upgrade().and_then(|el| el.border_radius())
    }
}

impl PartialEq for ElementRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ElementRef {}

impl fmt::Debug for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("id", &self.id)
            .field("alive", &self.is_alive())
            .finish()
    }
}
