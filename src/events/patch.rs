//! Staged edits to a single shift of an event being edited.
//!
//! Edits never mutate a shift in place. [`apply_shift_edit`] returns a new list in
//! which every untouched shift is the same `Arc` as before, so callers can detect
//! what changed with `Arc::ptr_eq`.

use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

use super::types::{Meal, Shift};

/// Which end of a shift a date edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

/// Plain value edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarEdit {
    MaxSpots(u32),
    Notes(String),
}

/// One edit to the selected shift
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftEdit {
    /// A meal checkbox was ticked or cleared
    MealToggle { meal: Meal, checked: bool },
    /// A date picker produced a new instant
    Date { field: DateField, value: DateTime<Utc> },
    Scalar(ScalarEdit),
}

impl ShiftEdit {
    pub fn max_spots(value: u32) -> Self {
        ShiftEdit::Scalar(ScalarEdit::MaxSpots(value))
    }

    pub fn notes(value: impl Into<String>) -> Self {
        ShiftEdit::Scalar(ScalarEdit::Notes(value.into()))
    }

    /// Name of the form field the edit came from
    pub fn field_name(&self) -> &'static str {
        match self {
            ShiftEdit::MealToggle { meal, .. } => match meal {
                Meal::Breakfast => "meals-breakfast",
                Meal::Lunch => "meals-lunch",
                Meal::Dinner => "meals-dinner",
                Meal::Snack => "meals-snack",
            },
            ShiftEdit::Date { field: DateField::Start, .. } => "start_time",
            ShiftEdit::Date { field: DateField::End, .. } => "end_time",
            ShiftEdit::Scalar(ScalarEdit::MaxSpots(_)) => "max_spots",
            ShiftEdit::Scalar(ScalarEdit::Notes(_)) => "notes",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("no shift is selected")]
    NoShiftSelected,

    #[error("shift {0} is not part of this event")]
    UnknownShift(u64),
}

/// Canonical string form stored for shift instants, e.g. `2018-06-01T13:30:00.000Z`
pub fn canonical_instant(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Add or remove a single meal
pub fn toggle_meal(meals: &BTreeSet<Meal>, meal: Meal, checked: bool) -> BTreeSet<Meal> {
    let mut next = meals.clone();
    if checked {
        next.insert(meal);
    } else {
        next.remove(&meal);
    }
    next
}

/// Apply `edit` to the shift whose id is `selected`.
///
/// Fails without touching anything when nothing is selected or the id is not in `shifts`.
pub fn apply_shift_edit(
    shifts: &[Arc<Shift>],
    selected: Option<u64>,
    edit: &ShiftEdit,
) -> Result<Vec<Arc<Shift>>, EditError> {
    let selected = selected.ok_or(EditError::NoShiftSelected)?;
    let index = shifts
        .iter()
        .position(|s| s.shift_id == selected)
        .ok_or(EditError::UnknownShift(selected))?;

    let mut shift = Shift::clone(&shifts[index]);
    match edit {
        ShiftEdit::MealToggle { meal, checked } => {
            shift.meals = toggle_meal(&shift.meals, *meal, *checked);
        }
        ShiftEdit::Date { field, value } => {
            let value = canonical_instant(value);
            match field {
                DateField::Start => shift.start_time = value,
                DateField::End => shift.end_time = value,
            }
        }
        ShiftEdit::Scalar(ScalarEdit::MaxSpots(value)) => shift.max_spots = *value,
        ShiftEdit::Scalar(ScalarEdit::Notes(value)) => shift.notes = value.clone(),
    }

    let mut next = shifts.to_vec();
    next[index] = Arc::new(shift);
    Ok(next)
}
