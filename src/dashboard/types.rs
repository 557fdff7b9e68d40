//! Types for the signed-in user and their signups

use serde::{Deserialize, Serialize};

/// Confirmation tier of a signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmLevel {
    pub id: i32,
    pub name: String,
}

impl ConfirmLevel {
    pub fn is_confirmed(&self) -> bool {
        self.id >= 100
    }

    pub fn is_planned(&self) -> bool {
        (0..100).contains(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentEvent {
    pub event_id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRef {
    pub shift_id: u64,
    pub shift_num: u32,
}

/// A user's signup against one shift
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserShift {
    pub user_shift_id: u64,

    #[serde(rename = "confirmLevel")]
    pub confirm_level: ConfirmLevel,

    #[serde(rename = "parentEvent")]
    pub parent_event: ParentEvent,

    pub shift: ShiftRef,

    /// Recorded hours, `HH:MM:SS`
    #[serde(default)]
    pub hours: String,

    /// Uploaded hours letter
    #[serde(default)]
    pub letter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: u64,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(rename = "userShifts", default)]
    pub user_shifts: Vec<UserShift>,
}

/// Where the signed-in user is in the login lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserState {
    Out,
    Loading,
    In(User),
}
