//! Bitset - C-callable boundary over the fixed-universe bitset engine
//!
//! This library exposes [`bitset_core::BitSet`] to foreign callers through
//! opaque handles, a process-wide last-error slot and sentinel return values.
//!
//! ## Architecture
//!
//! The workspace follows a clean engine/boundary separation:
//!
//! - **bitset-core**: the engine; typed `Result` errors, no global state
//! - **bitset**: the `extern "C"` surface; converts engine errors into the
//!   last-error/sentinel protocol and owns the shared output buffer
//!
//! ## Quick Start
//!
//! ```rust
//! use bitset::capi::*;
//! use std::ffi::CStr;
//!
//! let bits = eus_bitset_construct(8, false);
//! unsafe {
//!     eus_bitset_set_bit(bits, 3);
//!     eus_bitset_set_bit(bits, 5);
//!     assert_eq!(eus_bitset_get_length(bits), 2);
//!
//!     let text = CStr::from_ptr(eus_bitset_to_string(bits));
//!     assert_eq!(text.to_str(), Ok("00010100"));
//!
//!     // Out-of-range writes are reported, not raised.
//!     eus_bitset_set_bit(bits, 8);
//!     assert!(eus_check_error());
//!
//!     eus_bitset_destroy(bits);
//! }
//! ```
//!
//! ## Logging
//!
//! Handle lifecycle events are emitted at `trace` level through the `log`
//! facade. The library installs no logger.

// Re-export the engine
pub use bitset_core::{
    // Engine types
    BitSet, BitSetFactory, Ones, Word, WORD_BITS,
    // Error handling
    BitSetError, Result,
};

pub mod capi;
pub mod error;
pub mod last_error;
mod output;

pub use error::{CallError, CallResult};
