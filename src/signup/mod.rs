//! Public signup flow: picking shifts of an event and submitting them

mod selection;

use async_trait::async_trait;
use log::info;
use reqwest::Client;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::auth::TokenStore;
use crate::busy::BusyGuard;
use crate::config::ClientOptions;
use crate::error::Error;
use crate::events::Event;
use crate::fetch::Fetch;
use crate::format::{format_shift_date, format_shift_time};
use crate::messages::{Message, MessageStore};

pub use selection::*;

#[derive(Debug, Serialize)]
struct SignupRequest<'a> {
    shifts: &'a [u32],
}

/// Client for the `/signup` endpoint
#[derive(Debug, Clone)]
pub struct SignupClient {
    url: String,
    client: Client,
    options: ClientOptions,
    tokens: TokenStore,
}

impl SignupClient {
    pub fn new(url: &str, client: Client, options: ClientOptions, tokens: TokenStore) -> Self {
        Self {
            url: url.to_string(),
            client,
            options,
            tokens,
        }
    }

    /// Sign the current user up for the given shift numbers
    pub async fn signup(&self, shifts: &[u32]) -> Result<(), Error> {
        let url = self.options.endpoint(&self.url, "/signup");
        let token = self.tokens.bearer();

        Fetch::post(&self.client, &url)
            .header("X-Client-Info", &self.options.client_info)
            .maybe_bearer_auth(token.as_deref())
            .json(&SignupRequest { shifts })?
            .execute_unit()
            .await
    }
}

/// Callback into the page that shows the signup modal
#[async_trait]
pub trait SignupHost: Send + Sync {
    /// Reload the page's events after a signup
    async fn refresh(&self);
}

/// Whether the current visitor may sign up at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Open,
    /// Signup is unavailable; the text explains why
    Blocked(String),
}

/// One shift as listed in the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCard {
    pub shift_num: u32,
    /// `09:00 AM - 12:00 PM`
    pub times: String,
    pub date: Option<String>,
    pub notes: String,
    pub meals: Vec<String>,
    pub spots_taken: u32,
    pub max_spots: u32,
    pub button: ShiftButton,
}

#[derive(Debug, Default)]
struct ModalState {
    open: bool,
    selection: SignupSelection,
}

/// State behind the signup modal of one event
pub struct SignupModal {
    client: SignupClient,
    messages: MessageStore,
    event: Event,
    registration: Registration,
    state: Mutex<ModalState>,
    submitting: AtomicBool,
}

impl SignupModal {
    pub fn new(
        event: Event,
        registration: Registration,
        client: SignupClient,
        messages: MessageStore,
    ) -> Self {
        Self {
            client,
            messages,
            event,
            registration,
            state: Mutex::new(ModalState::default()),
            submitting: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ModalState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Show fresher event data, keeping the selection
    pub fn set_event(&mut self, event: Event) {
        self.event = event;
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn open(&self) {
        self.lock().open = true;
    }

    pub fn close(&self) {
        self.lock().open = false;
    }

    pub fn is_open(&self) -> bool {
        self.lock().open
    }

    /// The trigger button is disabled once the event is full
    pub fn is_event_full(&self) -> bool {
        self.event.is_full()
    }

    /// Add or remove a shift number from the selection
    pub fn toggle(&self, shift_num: u32) -> bool {
        self.lock().selection.toggle(shift_num)
    }

    pub fn selection(&self) -> SignupSelection {
        self.lock().selection.clone()
    }

    pub fn confirm_disabled(&self) -> bool {
        self.lock().selection.is_empty()
    }

    pub fn confirm_text(&self) -> String {
        self.lock().selection.confirm_text()
    }

    /// Button state for every shift, in event order
    pub fn buttons(&self) -> Vec<(u32, ShiftButton)> {
        let state = self.lock();
        self.event
            .shifts
            .iter()
            .map(|shift| (shift.shift_num, ShiftButton::for_shift(shift, &state.selection)))
            .collect()
    }

    /// Display data for every shift, in event order
    pub fn cards(&self) -> Vec<ShiftCard> {
        let state = self.lock();
        self.event
            .shifts
            .iter()
            .map(|shift| {
                let start = format_shift_time(&shift.start_time).unwrap_or_else(|| shift.start_time.clone());
                let end = format_shift_time(&shift.end_time).unwrap_or_else(|| shift.end_time.clone());
                ShiftCard {
                    shift_num: shift.shift_num,
                    times: format!("{} - {}", start, end),
                    date: shift.date.as_deref().and_then(format_shift_date),
                    notes: shift.notes.clone(),
                    meals: shift.meals.iter().map(|m| format!("{} provided", m)).collect(),
                    spots_taken: shift.spots_taken,
                    max_spots: shift.max_spots,
                    button: ShiftButton::for_shift(shift, &state.selection),
                }
            })
            .collect()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Submit the selected shifts.
    ///
    /// On success the page is refreshed and the selection cleared. On failure the
    /// selection is kept for a retry and a negative notification is added. The
    /// submitting flag is cleared either way.
    pub async fn submit(&self, host: &dyn SignupHost) -> Result<(), Error> {
        if let Registration::Blocked(reason) = &self.registration {
            return Err(Error::general(reason));
        }
        let shifts = self.selection().to_vec();
        if shifts.is_empty() {
            return Err(Error::general("No shifts selected"));
        }

        let _busy = BusyGuard::acquire(&self.submitting, |_| {})?;

        match self.client.signup(&shifts).await {
            Ok(()) => {
                info!("Signed up for shifts {:?} of event {}", shifts, self.event.event_id);
                host.refresh().await;
                self.lock().selection.clear();
                Ok(())
            }
            Err(err) => {
                self.messages.add(Message::from_error(&err));
                Err(err)
            }
        }
    }
}
