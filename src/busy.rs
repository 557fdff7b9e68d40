//! In-flight flag shared by the forms that talk to the backend

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Error;

/// Holds a form's in-flight flag for the duration of one request.
///
/// `notify(true)` runs on acquire and `notify(false)` runs on drop, so the
/// busy indicator is cleared on every exit path.
pub(crate) struct BusyGuard<'a, F: Fn(bool)> {
    flag: &'a AtomicBool,
    notify: F,
}

impl<'a, F: Fn(bool)> BusyGuard<'a, F> {
    pub(crate) fn acquire(flag: &'a AtomicBool, notify: F) -> Result<Self, Error> {
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::Busy);
        }
        notify(true);
        Ok(Self { flag, notify })
    }
}

impl<F: Fn(bool)> Drop for BusyGuard<'_, F> {
    fn drop(&mut self) {
        (self.notify)(false);
        self.flag.store(false, Ordering::Release);
    }
}
