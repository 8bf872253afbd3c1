#![forbid(unsafe_code)]

//! Shared boolean flags that hosts can watch.
//!
//! Two flags drive restyling: the provider's `visual_hover` (indicator color)
//! and each marker's `pressed` (press override). Neither feeds the motion
//! model, so a [`Flag`] only has to answer "what is it now" and "tell me when
//! it flips".

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

type Watcher = dyn Fn(bool);

#[derive(Default)]
struct FlagState {
    on: Cell<bool>,
    flips: Cell<u64>,
    watchers: RefCell<Vec<Weak<Watcher>>>,
}

/// A cloneable handle to one shared boolean.
///
/// Setting the value it already holds does nothing: watchers only hear real
/// flips, and `flips()` counts exactly those.
#[derive(Clone, Default)]
pub struct Flag {
    state: Rc<FlagState>,
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("on", &self.get())
            .field("flips", &self.flips())
            .finish_non_exhaustive()
    }
}

impl Flag {
    #[must_use]
    pub fn new(on: bool) -> Self {
        let flag = Self::default();
        flag.state.on.set(on);
        flag
    }

    #[must_use]
    pub fn get(&self) -> bool {
        self.state.on.get()
    }

    /// Number of times the value has changed.
    #[must_use]
    pub fn flips(&self) -> u64 {
        self.state.flips.get()
    }

    /// Store `on`. Returns `true` when the value changed.
    ///
    /// Watchers run after the value is stored and may read or set the flag.
    pub fn set(&self, on: bool) -> bool {
        if self.state.on.replace(on) == on {
            return false;
        }
        self.state.flips.set(self.state.flips.get() + 1);

        let live: Vec<Rc<Watcher>> = {
            let mut watchers = self.state.watchers.borrow_mut();
            watchers.retain(|w| w.strong_count() > 0);
            watchers.iter().filter_map(Weak::upgrade).collect()
        };
        trace!(on, watchers = live.len(), "flag flipped");
        for watcher in live {
            watcher(on);
        }
        true
    }

    /// Call `f` with the new value on every flip, until the guard drops.
    pub fn watch(&self, f: impl Fn(bool) + 'static) -> Watch {
        let watcher: Rc<Watcher> = Rc::new(f);
        self.state.watchers.borrow_mut().push(Rc::downgrade(&watcher));
        Watch { _watcher: watcher }
    }

    /// Watchers whose guard is still alive.
    #[must_use]
    pub fn watcher_count(&self) -> usize {
        self.state
            .watchers
            .borrow()
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }
}

/// Keeps a [`Flag::watch`] callback registered.
#[must_use = "dropping a Watch unregisters its callback"]
pub struct Watch {
    _watcher: Rc<Watcher>,
}

impl fmt::Debug for Watch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Watch").finish_non_exhaustive()
    }
}
