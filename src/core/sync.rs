//! Synchronization utilities for robust mutex handling
//!
//! This module provides utilities for handling mutex poisoning in a consistent
//! manner across the codebase.

use std::sync::{LockResult, PoisonError};

/// Handle poisoned mutex cases with consistent error handling
///
/// Converts a poison error from `Mutex::lock` or any `Condvar` wait into an
/// application-specific error using the provided constructor.
///
/// # Examples
/// ```
/// use std::sync::Mutex;
/// use blocking_queue::core::sync::handle_mutex_poison;
/// use blocking_queue::queue::api::QueueError;
///
/// let mutex = Mutex::new(42);
/// let guard = handle_mutex_poison(
///     mutex.lock(),
///     |message| QueueError::Poisoned { message }
/// ).unwrap();
/// assert_eq!(*guard, 42);
/// ```
pub fn handle_mutex_poison<T, E>(
    result: LockResult<T>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<T, E> {
    result.map_err(|poison_err| {
        error_constructor(format!(
            "Internal synchronisation error (mutex poisoned). This indicates a panic occurred while holding a lock. PoisonError: {:?}",
            poison_err
        ))
    })
}

/// Take the guard out of a possibly poisoned lock result
///
/// For call sites that must not fail (snapshots, close on drop). Only valid
/// where the guarded state is never left half-updated by a panic.
pub fn recover_poison<T>(result: LockResult<T>) -> T {
    result.unwrap_or_else(PoisonError::into_inner)
}
