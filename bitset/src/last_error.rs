//! Process-wide last-error slot
//!
//! The C boundary cannot return structured errors, so every entry point runs
//! inside [`checked`]: the slot is cleared on entry, and a failure stores its
//! message and makes the entry point return a sentinel. The slot is shared
//! by all threads, not thread-local.

use std::ffi::{c_char, CString};
use std::panic::{self, AssertUnwindSafe};

use parking_lot::Mutex;

use crate::error::{CallError, CallResult};

static LAST_ERROR: Mutex<Option<CString>> = parking_lot::const_mutex(None);

/// Forget any previously recorded failure
pub(crate) fn clear() {
    *LAST_ERROR.lock() = None;
}

/// Overwrite the slot with the message of `err`
pub(crate) fn record(err: &CallError) {
    // Interior NULs would truncate the C string.
    let message = err.to_string().replace('\0', " ");
    *LAST_ERROR.lock() = Some(CString::new(message).unwrap_or_default());
}

/// Whether the most recent call failed
pub fn has_error() -> bool {
    LAST_ERROR.lock().is_some()
}

/// Copy of the recorded message, if any
pub fn message() -> Option<String> {
    LAST_ERROR
        .lock()
        .as_ref()
        .map(|msg| msg.to_string_lossy().into_owned())
}

/// Pointer to the recorded message, or null
///
/// Valid until the next boundary call clears or overwrites the slot.
pub(crate) fn message_ptr() -> *const c_char {
    LAST_ERROR
        .lock()
        .as_ref()
        .map_or(std::ptr::null(), |msg| msg.as_ptr())
}

/// Run `call` as one fault-capture region
///
/// Engine errors and panics are recorded in the slot and replaced by
/// `sentinel`; nothing unwinds across the C boundary.
pub(crate) fn checked<T>(sentinel: T, call: impl FnOnce() -> CallResult<T>) -> T {
    clear();
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(value)) => value,
        Ok(Err(err)) => {
            record(&err);
            sentinel
        }
        Err(payload) => {
            let err = CallError::from_panic(payload);
            log::debug!("caught panic at bitset boundary: {err}");
            record(&err);
            sentinel
        }
    }
}

#[cfg(test)]
pub(crate) static TEST_LOCK: Mutex<()> = parking_lot::const_mutex(());

#[cfg(test)]
mod tests {
    use super::*;
    use bitset_core::BitSetError;

    #[test]
    fn test_success_clears_slot() {
        let _guard = TEST_LOCK.lock();
        record(&CallError::NullHandle);
        assert!(has_error());

        assert_eq!(checked(0, || Ok(5)), 5);
        assert!(!has_error());
        assert!(message_ptr().is_null());
    }

    #[test]
    fn test_failure_returns_sentinel_and_records() {
        let _guard = TEST_LOCK.lock();
        let value = checked(false, || {
            Err(BitSetError::IndexOutOfRange {
                index: 9,
                universe_size: 8,
            }
            .into())
        });

        assert!(!value);
        assert!(has_error());
        assert_eq!(
            message().as_deref(),
            Some("Bit index 9 out of range for universe of size 8")
        );
    }

    #[test]
    fn test_panic_is_captured() {
        let _guard = TEST_LOCK.lock();
        let value = checked(0u64, || -> CallResult<u64> { panic!("boom") });

        assert_eq!(value, 0);
        assert_eq!(message().as_deref(), Some("Internal error: boom"));
    }
}
