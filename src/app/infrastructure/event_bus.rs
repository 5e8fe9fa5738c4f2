use std::collections::HashMap;

use super::error::{AppError, Result};

pub type EventHandler = Box<dyn FnMut()>;

/// Named, payload-less publish/subscribe used by the host toolbar.
/// An event must be registered before anyone listens to it or raises it.
pub trait EventBus {
    fn register_event(&mut self, name: &str) -> Result<()>;
    fn raise_event(&mut self, name: &str) -> Result<()>;
    fn on_event(&mut self, name: &str, handler: EventHandler) -> Result<()>;
    /// Drop the event and every handler listening to it.
    fn remove_event(&mut self, name: &str) -> Result<()>;
}

/// In-process bus. Handlers run synchronously, in subscription order.
#[derive(Default)]
pub struct LocalEventBus {
    handlers: HashMap<String, Vec<EventHandler>>,
}

impl LocalEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn listener_count(&self, name: &str) -> usize {
        self.handlers.get(name).map_or(0, Vec::len)
    }
}

impl EventBus for LocalEventBus {
    fn register_event(&mut self, name: &str) -> Result<()> {
        if self.handlers.contains_key(name) {
            return Err(AppError::DuplicateEvent(name.to_string()));
        }
        self.handlers.insert(name.to_string(), Vec::new());
        Ok(())
    }

    fn raise_event(&mut self, name: &str) -> Result<()> {
        let handlers = self
            .handlers
            .get_mut(name)
            .ok_or_else(|| AppError::UnknownEvent(name.to_string()))?;
        log::debug!("Raising event {} ({} listeners)", name, handlers.len());
        for handler in handlers.iter_mut() {
            handler();
        }
        Ok(())
    }

    fn on_event(&mut self, name: &str, handler: EventHandler) -> Result<()> {
        self.handlers
            .get_mut(name)
            .ok_or_else(|| AppError::UnknownEvent(name.to_string()))?
            .push(handler);
        Ok(())
    }

    fn remove_event(&mut self, name: &str) -> Result<()> {
        self.handlers
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| AppError::UnknownEvent(name.to_string()))
    }
}
