//! Process-wide notification list and the message box projecting it

mod types;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;

pub use types::*;

/// Shared, ordered list of notifications.
///
/// Cloning the store clones the handle; every clone sees the same list.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: AtomicU64,
    messages: Mutex<Vec<Message>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Message>> {
        // every critical section is a single Vec operation, so a poisoned list is still whole
        self.inner
            .messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append a message, assigning it a fresh id
    pub fn add(&self, mut message: Message) -> u64 {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        message.id = id;
        debug!("message {} added ({:?}): {}", id, message.severity, message.message);
        self.lock().push(message);
        id
    }

    /// Remove the message with the given id. Returns whether one was removed.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut messages = self.lock();
        let before = messages.len();
        messages.retain(|m| m.id != id);
        before != messages.len()
    }

    /// Snapshot of the current list, oldest first
    pub fn list(&self) -> Vec<Message> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

/// Stateless view over a [`MessageStore`]
#[derive(Debug, Clone)]
pub struct MessageBox {
    store: MessageStore,
}

impl MessageBox {
    pub fn new(store: MessageStore) -> Self {
        Self { store }
    }

    /// Rows to render; `None` when there is nothing to show
    pub fn render(&self) -> Option<Vec<MessageView>> {
        let messages = self.store.list();
        if messages.is_empty() {
            return None;
        }
        Some(messages.iter().map(MessageView::from).collect())
    }

    /// Dismiss a row
    pub fn dismiss(&self, id: u64) -> bool {
        self.store.dismiss(id)
    }
}
