#![forbid(unsafe_code)]

//! The handle a provider passes down to its descendants.

use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::MotionConfig;
use crate::hover::TargetEvent;
use crate::provider::ProviderShared;

/// Misuse of the provider/consumer contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionError {
    /// A consumer was built without a provider context.
    OutsideProvider,
    /// The provider behind a context was unmounted or dropped.
    ProviderUnmounted,
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutsideProvider => {
                f.write_str("motion context used outside of a MotionProvider")
            }
            Self::ProviderUnmounted => f.write_str("motion provider has been unmounted"),
        }
    }
}

impl std::error::Error for MotionError {}

/// Effective config and hover handlers of one provider.
///
/// Holds only a weak handle: a context never keeps its provider alive.
#[derive(Clone)]
pub struct MotionContext {
    provider: Weak<ProviderShared>,
    config: MotionConfig,
}

impl fmt::Debug for MotionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionContext")
            .field("config", &self.config)
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl MotionContext {
    pub(crate) fn new(provider: Weak<ProviderShared>, config: MotionConfig) -> Self {
        Self { provider, config }
    }

    /// Fail fast unless a context was actually provided.
    pub fn require(context: Option<&MotionContext>) -> Result<&MotionContext, MotionError> {
        context.ok_or(MotionError::OutsideProvider)
    }

    /// Effective config of the provider.
    #[must_use]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Whether the provider is still mounted.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.provider().is_ok()
    }

    fn provider(&self) -> Result<Rc<ProviderShared>, MotionError> {
        match self.provider.upgrade() {
            Some(shared) if !shared.is_unmounted() => Ok(shared),
            _ => Err(MotionError::ProviderUnmounted),
        }
    }

    /// Forward a pointer-enter on a target to the provider.
    pub fn on_pointer_enter_target(&self, event: &TargetEvent) -> Result<(), MotionError> {
        self.provider()?.pointer_enter(event);
        Ok(())
    }

    /// Forward a pointer-leave on a target to the provider.
    pub fn on_pointer_leave_target(&self, event: &TargetEvent) -> Result<(), MotionError> {
        self.provider()?.pointer_leave(event);
        Ok(())
    }
}
