//! Shifts picked for signup and the per-shift button state

use std::collections::BTreeSet;

use crate::events::Shift;
use crate::format::{listify, pluralize};

/// Set of shift numbers the user has picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupSelection {
    shifts: BTreeSet<u32>,
}

impl SignupSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the shift if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, shift_num: u32) -> bool {
        if self.shifts.remove(&shift_num) {
            false
        } else {
            self.shifts.insert(shift_num);
            true
        }
    }

    pub fn contains(&self, shift_num: u32) -> bool {
        self.shifts.contains(&shift_num)
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn clear(&mut self) {
        self.shifts.clear();
    }

    /// Selected shift numbers in ascending order
    pub fn to_vec(&self) -> Vec<u32> {
        self.shifts.iter().copied().collect()
    }

    /// Question asked before submitting
    pub fn confirm_text(&self) -> String {
        format!(
            "Are you sure you want to sign up for {} {}?",
            pluralize("shift", self.len()),
            listify(&self.to_vec(), "#")
        )
    }
}

/// What the select button of a shift shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftButton {
    Select,
    Selected,
    Full,
    AlreadySignedUp,
}

impl ShiftButton {
    /// Later conditions win: signed up beats full, full beats selected.
    pub fn for_shift(shift: &Shift, selection: &SignupSelection) -> Self {
        if shift.signed_up {
            ShiftButton::AlreadySignedUp
        } else if shift.is_full() {
            ShiftButton::Full
        } else if selection.contains(shift.shift_num) {
            ShiftButton::Selected
        } else {
            ShiftButton::Select
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShiftButton::Select => "Select this shift",
            ShiftButton::Selected => "Selected",
            ShiftButton::Full => "FULL :(",
            ShiftButton::AlreadySignedUp => "Already signed up!",
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, ShiftButton::Full | ShiftButton::AlreadySignedUp)
    }
}
