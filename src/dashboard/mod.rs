//! User dashboard: hour totals and the signup table

mod types;

use chrono::Duration;
use log::warn;

use crate::format::{format_duration, parse_hours};

pub use types::*;

/// One row of the signup table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRow {
    pub user_shift_id: u64,
    pub status: String,
    pub event: String,
    pub shift_num: u32,
    pub hours: String,
    /// Link to the uploaded hours letter
    pub letter_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub shift_count: usize,
    pub planned: Duration,
    pub confirmed: Duration,
    pub rows: Vec<DashboardRow>,
}

impl DashboardSummary {
    pub fn planned_text(&self) -> String {
        format_duration(self.planned)
    }

    pub fn confirmed_text(&self) -> String {
        format_duration(self.confirmed)
    }
}

/// What the dashboard page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    /// Signed out; send the visitor to this path
    Redirect(&'static str),
    /// The user is still loading; render nothing
    Pending,
    Ready(DashboardSummary),
}

fn hours_of(user_shift: &UserShift) -> Duration {
    parse_hours(&user_shift.hours).unwrap_or_else(|| {
        warn!(
            "Unreadable hours {:?} on signup {}",
            user_shift.hours, user_shift.user_shift_id
        );
        Duration::zero()
    })
}

/// Sum the hours of the signups accepted by `filter`
pub fn total_hours<F>(user_shifts: &[UserShift], filter: F) -> Duration
where
    F: Fn(&ConfirmLevel) -> bool,
{
    user_shifts
        .iter()
        .filter(|us| filter(&us.confirm_level))
        .fold(Duration::zero(), |acc, us| {
            acc.checked_add(&hours_of(us)).unwrap_or_else(|| {
                warn!(
                    "Hours {:?} on signup {} overflow the total, skipping",
                    us.hours, us.user_shift_id
                );
                acc
            })
        })
}

pub fn confirmed_hours(user_shifts: &[UserShift]) -> Duration {
    total_hours(user_shifts, ConfirmLevel::is_confirmed)
}

pub fn planned_hours(user_shifts: &[UserShift]) -> Duration {
    total_hours(user_shifts, ConfirmLevel::is_planned)
}

pub fn summarize(user: &User) -> DashboardSummary {
    let rows = user
        .user_shifts
        .iter()
        .map(|us| DashboardRow {
            user_shift_id: us.user_shift_id,
            status: us.confirm_level.name.clone(),
            event: us.parent_event.name.clone(),
            shift_num: us.shift.shift_num,
            hours: us.hours.clone(),
            letter_url: us.letter.as_ref().map(|letter| format!("/upload/{}", letter)),
        })
        .collect();

    DashboardSummary {
        shift_count: user.user_shifts.len(),
        planned: planned_hours(&user.user_shifts),
        confirmed: confirmed_hours(&user.user_shifts),
        rows,
    }
}

pub fn dashboard(state: &UserState) -> DashboardView {
    match state {
        UserState::Out => DashboardView::Redirect("/"),
        UserState::Loading => DashboardView::Pending,
        UserState::In(user) => DashboardView::Ready(summarize(user)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(id: u64, level: i32, hours: &str) -> UserShift {
        UserShift {
            user_shift_id: id,
            confirm_level: ConfirmLevel {
                id: level,
                name: format!("level {}", level),
            },
            parent_event: ParentEvent {
                event_id: 1,
                name: "Food Drive".to_string(),
            },
            shift: ShiftRef {
                shift_id: 10 + id,
                shift_num: id as u32,
            },
            hours: hours.to_string(),
            letter: None,
        }
    }

    fn user(user_shifts: Vec<UserShift>) -> User {
        User {
            user_id: 1,
            first_name: "Sam".to_string(),
            last_name: "Lee".to_string(),
            email: "sam@example.com".to_string(),
            user_shifts,
        }
    }

    #[test]
    fn totals_split_by_confirmation_level() {
        let shifts = vec![
            signup(1, 150, "02:00:00"),
            signup(2, 50, "03:00:00"),
            signup(3, 200, "04:00:00"),
        ];
        assert_eq!(confirmed_hours(&shifts), Duration::hours(6));
        assert_eq!(planned_hours(&shifts), Duration::hours(3));
    }

    #[test]
    fn boundaries_and_negative_levels() {
        let shifts = vec![
            signup(1, 100, "1:00"),
            signup(2, 0, "2:00"),
            signup(3, 99, "0:30"),
            signup(4, -1, "8:00"),
        ];
        assert_eq!(confirmed_hours(&shifts), Duration::hours(1));
        assert_eq!(planned_hours(&shifts), Duration::minutes(150));
    }

    #[test]
    fn totals_do_not_depend_on_order() {
        let mut shifts = vec![
            signup(1, 150, "1:15"),
            signup(2, 120, "2:50"),
            signup(3, 180, "0:05"),
        ];
        let forward = confirmed_hours(&shifts);
        shifts.reverse();
        assert_eq!(confirmed_hours(&shifts), forward);
        assert_eq!(format_duration(forward), "4:10");
    }

    #[test]
    fn unreadable_hours_count_as_zero() {
        let shifts = vec![signup(1, 150, "tbd"), signup(2, 150, "1:00")];
        assert_eq!(confirmed_hours(&shifts), Duration::hours(1));
    }

    #[test]
    fn out_of_range_hours_count_as_zero() {
        let shifts = vec![signup(1, 150, "10000000000000"), signup(2, 150, "1:00")];
        assert_eq!(confirmed_hours(&shifts), Duration::hours(1));

        let shifts = vec![signup(1, 150, "9999999999999999:00"), signup(2, 150, "2:00")];
        assert_eq!(confirmed_hours(&shifts), Duration::hours(2));
    }

    #[test]
    fn total_skips_signups_that_overflow_it() {
        let shifts = vec![signup(1, 150, "2000000000000"), signup(2, 150, "2000000000000")];
        assert_eq!(confirmed_hours(&shifts), Duration::hours(2_000_000_000_000));

        let state = UserState::In(user(shifts));
        assert!(matches!(dashboard(&state), DashboardView::Ready(_)));
    }

    #[test]
    fn view_follows_user_state() {
        assert_eq!(dashboard(&UserState::Out), DashboardView::Redirect("/"));
        assert_eq!(dashboard(&UserState::Loading), DashboardView::Pending);

        let mut with_letter = signup(2, 150, "04:00:00");
        with_letter.letter = Some("abc.pdf".to_string());
        let state = UserState::In(user(vec![signup(1, 50, "03:00:00"), with_letter]));

        match dashboard(&state) {
            DashboardView::Ready(summary) => {
                assert_eq!(summary.shift_count, 2);
                assert_eq!(summary.planned_text(), "3:00");
                assert_eq!(summary.confirmed_text(), "4:00");
                assert_eq!(summary.rows[0].letter_url, None);
                assert_eq!(summary.rows[1].letter_url.as_deref(), Some("/upload/abc.pdf"));
                assert_eq!(summary.rows[1].status, "level 150");
                assert_eq!(summary.rows[1].event, "Food Drive");
            }
            other => panic!("Expected DashboardView::Ready, got {:?}", other),
        }
    }
}
