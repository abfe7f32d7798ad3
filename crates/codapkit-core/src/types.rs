//! Shared-state wrapper for views reachable from event bus handlers.

use parking_lot::Mutex;
use std::sync::Arc;

/// A view shared between its owner and bus handlers.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
