//! Event emitter trait for settings-change broadcasting.
//!
//! Implementations handle transport details (channels, desktop-shell events,
//! SSE, etc.); the core only hands them committed mutations.

use crate::events::SettingsEvent;

/// Trait for emitting settings events.
///
/// This abstraction keeps event plumbing out of the public API surface.
/// `emit` must not block; implementations buffer or dispatch asynchronously.
pub trait SettingsEventEmitter: Send + Sync {
    /// Emit a settings event.
    fn emit(&self, event: SettingsEvent);

    /// Clone this emitter into a boxed trait object.
    fn clone_box(&self) -> Box<dyn SettingsEventEmitter>;
}

/// A no-op emitter for tests and headless contexts.
#[derive(Debug, Clone, Default)]
pub struct NoopSettingsEmitter;

impl NoopSettingsEmitter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SettingsEventEmitter for NoopSettingsEmitter {
    fn emit(&self, _event: SettingsEvent) {
        // Intentionally do nothing
    }

    fn clone_box(&self) -> Box<dyn SettingsEventEmitter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn noop_emitter_discards_events() {
        let emitter = NoopSettingsEmitter::new();
        emitter.emit(SettingsEvent::SyncPolicyChanged { enabled: true });
        let _boxed: Box<dyn SettingsEventEmitter> = emitter.clone_box();
    }

    #[test]
    fn arc_emitter_is_usable_as_trait_object() {
        let emitter: Arc<dyn SettingsEventEmitter> = Arc::new(NoopSettingsEmitter::new());
        emitter.emit(SettingsEvent::OverridesEnabledChanged { enabled: false });
    }
}
