//! C ABI over the bitset engine
//!
//! Every bitset crosses the boundary as an opaque `void*` owning a boxed
//! [`BitSet`]. Handles returned by `construct`, `clone`, `from_string` and
//! the `*_functional` operations belong to the caller and must be released
//! with [`eus_bitset_destroy`]. Passing a destroyed handle is undefined
//! behavior; a null handle is reported as an error.
//!
//! Failures never cross the boundary as panics. Each entry point clears the
//! process-wide last-error slot, and on failure records a message there and
//! returns a sentinel (null, `false` or `0`). A `false` or `0` result is
//! ambiguous, so callers check [`eus_check_error`] after such calls.

use std::ffi::{c_char, c_void, CStr};
use std::ptr;

use bitset_core::BitSet;

use crate::error::{CallError, CallResult};
use crate::last_error::{self, checked};
use crate::output;

/// Borrow the bitset behind `handle`
///
/// # Safety
/// `handle` must be null or a live handle from this library.
unsafe fn bitset_ref<'a>(handle: *const c_void) -> CallResult<&'a BitSet> {
    unsafe { handle.cast::<BitSet>().as_ref() }.ok_or(CallError::NullHandle)
}

/// Mutably borrow the bitset behind `handle`
///
/// # Safety
/// `handle` must be null or a live handle from this library, not aliased
/// by any other borrow for the duration of the call.
unsafe fn bitset_mut<'a>(handle: *mut c_void) -> CallResult<&'a mut BitSet> {
    unsafe { handle.cast::<BitSet>().as_mut() }.ok_or(CallError::NullHandle)
}

/// Move a bitset to the heap and hand ownership to the caller
fn into_handle(bits: BitSet) -> *mut c_void {
    let universe_size = bits.size_of_universe();
    let handle = Box::into_raw(Box::new(bits)).cast::<c_void>();
    log::trace!("created bitset handle {handle:p} over {universe_size} elements");
    handle
}

/// Apply an in-place binary operation, allowing `target` and `operand` to
/// be the same handle
///
/// # Safety
/// Both handles must be null or live handles from this library.
unsafe fn apply_in_place(
    target: *mut c_void,
    operand: *const c_void,
    op: fn(&mut BitSet, &BitSet) -> bitset_core::Result<()>,
) -> CallResult<()> {
    if ptr::eq(target.cast_const(), operand) {
        let bits = unsafe { bitset_mut(target)? };
        let copy = bits.try_clone()?;
        op(bits, &copy)?;
    } else {
        let operand = unsafe { bitset_ref(operand)? };
        let target = unsafe { bitset_mut(target)? };
        op(target, operand)?;
    }
    Ok(())
}

/// Binary predicate returning `false` on failure
macro_rules! relation {
    ($(#[$meta:meta])* $name:ident => $method:ident) => {
        $(#[$meta])*
        ///
        /// # Safety
        /// Both handles must be null or live handles from this library.
        #[no_mangle]
        pub unsafe extern "C" fn $name(bitset1: *const c_void, bitset2: *const c_void) -> bool {
            checked(false, || {
                let (a, b) = unsafe { (bitset_ref(bitset1)?, bitset_ref(bitset2)?) };
                Ok(a.$method(b)?)
            })
        }
    };
}

/// Binary operation producing a new caller-owned handle, null on failure
macro_rules! functional {
    ($(#[$meta:meta])* $name:ident => $method:ident) => {
        $(#[$meta])*
        ///
        /// # Safety
        /// Both handles must be null or live handles from this library.
        #[no_mangle]
        pub unsafe extern "C" fn $name(
            bitset1: *const c_void,
            bitset2: *const c_void,
        ) -> *mut c_void {
            checked(ptr::null_mut(), || {
                let (a, b) = unsafe { (bitset_ref(bitset1)?, bitset_ref(bitset2)?) };
                Ok(into_handle(a.$method(b)?))
            })
        }
    };
}

/// Binary operation mutating its first operand
macro_rules! in_place {
    ($(#[$meta:meta])* $name:ident => $method:ident) => {
        $(#[$meta])*
        ///
        /// # Safety
        /// Both handles must be null or live handles from this library.
        #[no_mangle]
        pub unsafe extern "C" fn $name(bitset1_and_result: *mut c_void, bitset2: *const c_void) {
            checked((), || unsafe {
                apply_in_place(bitset1_and_result, bitset2, BitSet::$method)
            })
        }
    };
}

/// Nearest-element query; `-1` when nothing is found, `0` on failure
macro_rules! scan {
    ($(#[$meta:meta])* $name:ident => $method:ident) => {
        $(#[$meta])*
        ///
        /// # Safety
        /// `bitset` must be null or a live handle from this library.
        #[no_mangle]
        pub unsafe extern "C" fn $name(bitset: *const c_void, position: u64) -> i64 {
            checked(0, || {
                let bits = unsafe { bitset_ref(bitset)? };
                // Elements lie below the universe size, which storage limits
                // keep far under i64::MAX.
                Ok(bits.$method(position).map_or(-1, |element| element as i64))
            })
        }
    };
}

/// Create a bitset over `size_of_universe` elements, all set or all clear
#[no_mangle]
pub extern "C" fn eus_bitset_construct(size_of_universe: u64, initial_value: bool) -> *mut c_void {
    checked(ptr::null_mut(), || {
        Ok(into_handle(BitSet::new(size_of_universe, initial_value)?))
    })
}

/// Release a handle; null is ignored
///
/// # Safety
/// `bitset` must be null or a live handle from this library, and must not
/// be used again afterwards.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_destroy(bitset: *mut c_void) {
    checked((), || {
        if !bitset.is_null() {
            log::trace!("destroying bitset handle {bitset:p}");
            drop(unsafe { Box::from_raw(bitset.cast::<BitSet>()) });
        }
        Ok(())
    })
}

/// Deep copy into a new caller-owned handle
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_clone(bitset: *const c_void) -> *mut c_void {
    checked(ptr::null_mut(), || {
        let bits = unsafe { bitset_ref(bitset)? };
        Ok(into_handle(bits.try_clone()?))
    })
}

relation!(
    /// Same universe and membership
    eus_bitsets_equal => equal
);
relation!(
    /// Same universe and different membership
    eus_bitsets_not_equal => not_equal
);
relation!(
    /// `bitset1 ⊂ bitset2`
    eus_bitset_is_proper_subset => is_proper_subset
);
relation!(
    /// `bitset1 ⊆ bitset2`
    eus_bitset_is_subset => is_subset
);
relation!(
    /// `bitset1 ⊃ bitset2`
    eus_bitset_is_proper_superset => is_proper_superset
);
relation!(
    /// `bitset1 ⊇ bitset2`
    eus_bitset_is_superset => is_superset
);

/// Add `bit_num` to the set
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_set_bit(bitset: *mut c_void, bit_num: u64) {
    checked((), || Ok(unsafe { bitset_mut(bitset)? }.set_bit(bit_num)?))
}

/// Remove `bit_num` from the set
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_clear_bit(bitset: *mut c_void, bit_num: u64) {
    checked((), || Ok(unsafe { bitset_mut(bitset)? }.clear_bit(bit_num)?))
}

/// Toggle `bit_num` and return its new value
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_flip_bit(bitset: *mut c_void, bit_num: u64) -> bool {
    checked(false, || Ok(unsafe { bitset_mut(bitset)? }.flip_bit(bit_num)?))
}

/// Whether `bit_num` is in the set
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_test_bit(bitset: *const c_void, bit_num: u64) -> bool {
    checked(false, || Ok(unsafe { bitset_ref(bitset)? }.test_bit(bit_num)?))
}

/// Add every element of the universe
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_set_all(bitset: *mut c_void) {
    checked((), || {
        unsafe { bitset_mut(bitset)? }.set_all();
        Ok(())
    })
}

/// Remove every element
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_clear_all(bitset: *mut c_void) {
    checked((), || {
        unsafe { bitset_mut(bitset)? }.clear_all();
        Ok(())
    })
}

/// Complement in place
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_flip_all(bitset: *mut c_void) {
    checked((), || {
        unsafe { bitset_mut(bitset)? }.flip_all();
        Ok(())
    })
}

/// Number of representable elements
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_get_size_of_universe(bitset: *const c_void) -> u64 {
    checked(0, || Ok(unsafe { bitset_ref(bitset)? }.size_of_universe()))
}

/// Number of elements in the set
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_get_length(bitset: *const c_void) -> u64 {
    checked(0, || Ok(unsafe { bitset_ref(bitset)? }.length()))
}

/// Whether every element is set
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_is_full(bitset: *const c_void) -> bool {
    checked(false, || Ok(unsafe { bitset_ref(bitset)? }.is_full()))
}

/// Whether no element is set
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_is_empty(bitset: *const c_void) -> bool {
    checked(false, || Ok(unsafe { bitset_ref(bitset)? }.is_empty()))
}

functional!(
    /// New handle holding the intersection
    eus_bitset_and_functional => intersection_with
);
functional!(
    /// New handle holding the union
    eus_bitset_or_functional => union_with
);
functional!(
    /// New handle holding the symmetric difference
    eus_bitset_xor_functional => symmetric_difference_with
);
functional!(
    /// New handle holding `bitset1 \ bitset2`
    eus_bitset_minus_functional => difference_with
);

/// New handle holding the complement
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_negate_functional(bitset: *const c_void) -> *mut c_void {
    checked(ptr::null_mut(), || {
        let bits = unsafe { bitset_ref(bitset)? };
        Ok(into_handle(bits.negate()?))
    })
}

in_place!(
    /// Intersect the first operand with the second
    eus_bitset_inplace_and => intersect_with_in_place
);
in_place!(
    /// Union the second operand into the first
    eus_bitset_inplace_or => union_with_in_place
);
in_place!(
    /// Symmetric difference into the first operand
    eus_bitset_inplace_xor => symmetric_difference_with_in_place
);
in_place!(
    /// Remove the second operand's elements from the first
    eus_bitset_inplace_minus => difference_with_in_place
);

/// Complement in place
///
/// # Safety
/// `bitset_and_result` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_inplace_negate(bitset_and_result: *mut c_void) {
    checked((), || {
        unsafe { bitset_mut(bitset_and_result)? }.negate_in_place();
        Ok(())
    })
}

/// Overwrite `destination` with `source`, whose universe may be smaller
///
/// # Safety
/// Both handles must be null or live handles from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_copy_in(destination: *mut c_void, source: *const c_void) {
    checked((), || unsafe {
        apply_in_place(destination, source, BitSet::copy_in)
    })
}

scan!(
    /// Smallest element `>= position`
    eus_bitset_get_next_element_greater_than_or_equal_to => next_set_bit_at_or_after
);
scan!(
    /// Smallest element `> position`
    eus_bitset_get_next_element_greater_than => next_set_bit_after
);
scan!(
    /// Largest element `<= position`
    eus_bitset_get_prev_element_lesser_than_or_equal_to => prev_set_bit_at_or_before
);
scan!(
    /// Largest element `< position`
    eus_bitset_get_prev_element_lesser_than => prev_set_bit_before
);

/// Structural hash; equal sets hash equal
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_get_hash(bitset: *const c_void) -> u64 {
    checked(0, || Ok(unsafe { bitset_ref(bitset)? }.structural_hash()))
}

/// Render as `'0'`/`'1'` characters, element 0 first
///
/// The returned string lives in a shared buffer that the next call
/// overwrites.
///
/// # Safety
/// `bitset` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_to_string(bitset: *const c_void) -> *const c_char {
    checked(ptr::null(), || {
        let bits = unsafe { bitset_ref(bitset)? };
        output::publish(bits.to_string())
    })
}

/// Parse the rendered form into a new caller-owned handle
///
/// # Safety
/// `text` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn eus_bitset_from_string(text: *const c_char) -> *mut c_void {
    checked(ptr::null_mut(), || {
        if text.is_null() {
            return Err(CallError::InvalidString);
        }
        let text = unsafe { CStr::from_ptr(text) }
            .to_str()
            .map_err(|_| CallError::InvalidString)?;
        Ok(into_handle(text.parse::<BitSet>()?))
    })
}

/// Whether the most recent call recorded a failure
#[no_mangle]
pub extern "C" fn eus_check_error() -> bool {
    last_error::has_error()
}

/// Message of the most recent failure, or null
///
/// The pointer is valid until the next call into this library.
#[no_mangle]
pub extern "C" fn eus_get_last_error_string() -> *const c_char {
    last_error::message_ptr()
}
