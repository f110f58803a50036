//! Shared output buffer for string-returning entry points
//!
//! `eus_bitset_to_string` hands out a pointer into this single buffer. The
//! storage is reused, so the text behind an earlier pointer is overwritten
//! by the next string-returning call from any thread; callers copy the text
//! if they need it longer.

use std::ffi::c_char;

use parking_lot::Mutex;

use crate::error::{CallError, CallResult};

/// NUL-terminated bytes of the most recent output
static OUTPUT_BUFFER: Mutex<Vec<u8>> = parking_lot::const_mutex(Vec::new());

/// Replace the buffer contents with `text` and return a pointer to them
pub(crate) fn publish(text: String) -> CallResult<*const c_char> {
    if text.contains('\0') {
        return Err(CallError::InvalidString);
    }

    let mut buffer = OUTPUT_BUFFER.lock();
    buffer.clear();
    buffer.extend_from_slice(text.as_bytes());
    buffer.push(0);
    Ok(buffer.as_ptr().cast())
}
