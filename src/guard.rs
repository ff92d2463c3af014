//! Guarded execution: turning panics into [`Fallible`] errors.
//!
//! [`guarded`] is the bridge from Rust's unwinding mechanism to typed
//! failures. Whatever the closure panics with is caught and reported as an
//! [`ErrorKind::Exception`](crate::ErrorKind::Exception) error; the panic never
//! reaches the caller.
//!
//! Panics are only catchable with `panic = "unwind"`; under `panic = "abort"`
//! the process still aborts.
//!
//! # Examples
//!
//! ```
//! use value_rail::{guarded, Fallible};
//!
//! assert_eq!(guarded(|| 2 + 2), Fallible::Ok(4));
//!
//! let caught = guarded(|| -> i32 { panic!("index out of range") });
//! let fault = caught.unwrap_err();
//! assert_eq!(fault.fault().map(|f| f.message()), Some("index out of range".to_string()));
//! ```
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::types::{Error, Fallible, Fault};

/// Runs `f`, converting a panic into an exception error.
///
/// The closure is treated as unwind safe: state it touched may be observed
/// half-updated after a caught panic.
pub fn guarded<T, F>(f: F) -> Fallible<T, Error>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Fallible::Ok(value),
        Err(payload) => Fallible::Err(Error::exception(Fault::from_panic_payload(payload))),
    }
}

/// Runs a closure that already reports failures through `Result`.
///
/// Returned errors become exception errors wrapping the source error; a panic
/// becomes an exception error exactly as in [`guarded`].
///
/// # Examples
///
/// ```
/// use value_rail::guarded_result;
///
/// let parsed = guarded_result(|| "42".parse::<u32>());
/// assert_eq!(parsed.unwrap(), 42);
///
/// let failed = guarded_result(|| "forty-two".parse::<u32>());
/// assert!(failed.unwrap_err().to_string().contains("invalid digit"));
/// ```
pub fn guarded_result<T, E, F>(f: F) -> Fallible<T, Error>
where
    F: FnOnce() -> Result<T, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    guarded(f).and_then(|result| Fallible::from(result).map_err(Error::from_std))
}
