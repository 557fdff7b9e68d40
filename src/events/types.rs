//! Types for events and their shifts

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Food provided during a shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl Meal {
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snack];

    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
            Meal::Snack => "snack",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bounded time slot within an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub shift_id: u64,

    /// Position of the shift within its event, shown to volunteers as `#n`
    pub shift_num: u32,

    /// Calendar day the shift runs on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    pub start_time: String,

    pub end_time: String,

    pub max_spots: u32,

    #[serde(default)]
    pub spots_taken: u32,

    #[serde(default)]
    pub meals: BTreeSet<Meal>,

    #[serde(default)]
    pub notes: String,

    /// Whether the current user already holds this shift
    #[serde(default)]
    pub signed_up: bool,
}

impl Shift {
    pub fn spots_left(&self) -> u32 {
        self.max_spots.saturating_sub(self.spots_taken)
    }

    pub fn is_full(&self) -> bool {
        self.spots_taken == self.max_spots
    }

    pub fn has_meal(&self, meal: Meal) -> bool {
        self.meals.contains(&meal)
    }
}

/// An event and its ordered shifts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: u64,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub transport: String,

    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub shifts: Vec<Arc<Shift>>,
}

impl Event {
    pub fn total_spots(&self) -> u64 {
        self.shifts.iter().map(|s| u64::from(s.max_spots)).sum()
    }

    pub fn total_taken(&self) -> u64 {
        self.shifts.iter().map(|s| u64::from(s.spots_taken)).sum()
    }

    /// An event is full when every spot across its shifts is taken.
    /// An event without shifts counts as full.
    pub fn is_full(&self) -> bool {
        self.total_spots() == self.total_taken()
    }

    pub fn shift(&self, shift_id: u64) -> Option<&Arc<Shift>> {
        self.shifts.iter().find(|s| s.shift_id == shift_id)
    }
}

/// Top-level event fields sent when saving the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUpdate {
    pub name: String,
    pub description: String,
    pub address: String,
    pub transport: String,
    pub active: bool,
}

impl From<&Event> for EventUpdate {
    fn from(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            description: event.description.clone(),
            address: event.address.clone(),
            transport: event.transport.clone(),
            active: event.active,
        }
    }
}
