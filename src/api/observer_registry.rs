use crate::error::{ExplorerError, ExplorerResult};
use crate::extensions::{SessionNotification, SessionObserver};

use super::ExplorerSession;

impl ExplorerSession {
    /// Registers an observer; ids must be non-empty and unique.
    pub fn register_observer(&mut self, observer: Box<dyn SessionObserver>) -> ExplorerResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ExplorerError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(ExplorerError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Removes an observer by id. Returns `false` when it was not registered.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    pub(super) fn emit(&mut self, notification: SessionNotification) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_notification(notification, &context);
        }
    }
}
