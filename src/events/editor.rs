//! Admin event editor: staged top-level fields and shifts, save and delete

use async_trait::async_trait;
use log::{info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::patch::{apply_shift_edit, EditError, ShiftEdit};
use super::types::{Event, EventUpdate, Shift};
use super::EventsClient;
use crate::busy::BusyGuard;
use crate::error::Error;
use crate::messages::{Message, MessageStore};

/// Callbacks into the page that owns the editor
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Show or hide the page's loading indicator
    fn set_loading(&self, loading: bool);

    /// Reload the page's event data
    async fn refresh(&self);

    /// Drop the page's current event selection
    fn deselect(&self);
}

/// Edit to one of the event's own fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventFieldEdit {
    Name(String),
    Description(String),
    Address(String),
    Transport(String),
    Active(bool),
}

pub struct EventEditor {
    client: EventsClient,
    messages: MessageStore,
    original: Event,
    name: String,
    description: String,
    address: String,
    transport: String,
    active: bool,
    shifts: Vec<Arc<Shift>>,
    selected_shift_id: Option<u64>,
    in_flight: AtomicBool,
}

impl EventEditor {
    pub fn new(original: Event, client: EventsClient, messages: MessageStore) -> Self {
        Self {
            client,
            messages,
            name: original.name.clone(),
            description: original.description.clone(),
            address: original.address.clone(),
            transport: original.transport.clone(),
            active: original.active,
            shifts: original.shifts.clone(),
            selected_shift_id: None,
            original,
            in_flight: AtomicBool::new(false),
        }
    }

    fn reset(&mut self, original: Event) {
        self.name = original.name.clone();
        self.description = original.description.clone();
        self.address = original.address.clone();
        self.transport = original.transport.clone();
        self.active = original.active;
        self.shifts = original.shifts.clone();
        self.selected_shift_id = None;
        self.original = original;
    }

    /// Take a new authoritative copy of the event from the page.
    ///
    /// A different event replaces all staged state and clears the shift selection.
    /// An equal one changes nothing. Returns whether the state was replaced.
    pub fn receive_original(&mut self, next: &Event) -> bool {
        if *next == self.original {
            return false;
        }
        self.reset(next.clone());
        true
    }

    pub fn set_field(&mut self, edit: EventFieldEdit) {
        match edit {
            EventFieldEdit::Name(value) => self.name = value,
            EventFieldEdit::Description(value) => self.description = value,
            EventFieldEdit::Address(value) => self.address = value,
            EventFieldEdit::Transport(value) => self.transport = value,
            EventFieldEdit::Active(value) => self.active = value,
        }
    }

    /// Select the shift whose tab was clicked
    pub fn select_shift(&mut self, shift_id: u64) -> Result<(), EditError> {
        if !self.shifts.iter().any(|s| s.shift_id == shift_id) {
            return Err(EditError::UnknownShift(shift_id));
        }
        self.selected_shift_id = Some(shift_id);
        Ok(())
    }

    /// Stage an edit to the selected shift.
    ///
    /// Leaves the shifts untouched when the selection does not resolve.
    pub fn edit_shift(&mut self, edit: ShiftEdit) -> Result<(), EditError> {
        match apply_shift_edit(&self.shifts, self.selected_shift_id, &edit) {
            Ok(next) => {
                self.shifts = next;
                Ok(())
            }
            Err(err) => {
                warn!(
                    "Ignoring {} edit on event {}: {}",
                    edit.field_name(),
                    self.original.event_id,
                    err
                );
                Err(err)
            }
        }
    }

    pub fn original(&self) -> &Event {
        &self.original
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn transport(&self) -> &str {
        &self.transport
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn shifts(&self) -> &[Arc<Shift>] {
        &self.shifts
    }

    pub fn selected_shift_id(&self) -> Option<u64> {
        self.selected_shift_id
    }

    pub fn selected_shift(&self) -> Option<&Arc<Shift>> {
        let id = self.selected_shift_id?;
        self.shifts.iter().find(|s| s.shift_id == id)
    }

    /// Fields that `submit` will send
    pub fn draft(&self) -> EventUpdate {
        EventUpdate {
            name: self.name.clone(),
            description: self.description.clone(),
            address: self.address.clone(),
            transport: self.transport.clone(),
            active: self.active,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Save the top-level fields.
    ///
    /// Returns [`Error::Busy`] without contacting the backend while another save or
    /// delete from this editor is outstanding.
    pub async fn submit(&self, host: &dyn EditorHost) -> Result<String, Error> {
        let _busy = BusyGuard::acquire(&self.in_flight, |loading| host.set_loading(loading))?;
        let event_id = self.original.event_id;

        match self.client.update(event_id, &self.draft()).await {
            Ok(text) => {
                info!("Event {} saved: {}", event_id, text);
                self.messages.add(Message::positive(text.clone()));
                host.refresh().await;
                Ok(text)
            }
            Err(err) => {
                self.messages.add(Message::from_error(&err));
                Err(err)
            }
        }
    }

    /// Delete the event and deselect it on the page
    pub async fn delete(&self, host: &dyn EditorHost) -> Result<String, Error> {
        let _busy = BusyGuard::acquire(&self.in_flight, |loading| host.set_loading(loading))?;
        let event_id = self.original.event_id;

        match self.client.delete(event_id).await {
            Ok(text) => {
                info!("Event {} deleted: {}", event_id, text);
                self.messages.add(Message::positive(text.clone()));
                host.refresh().await;
                host.deselect();
                Ok(text)
            }
            Err(err) => {
                self.messages.add(Message::from_error(&err));
                Err(err)
            }
        }
    }
}
