//! Named, optional, order-independent function arguments.
//!
//! A [`Store`] maps argument names to scalar [`Value`]s. Functions receive a
//! store and read their arguments through the typed accessors of [`Lookup`],
//! which fall back to the process-wide [`global()`] store and then to a
//! caller-supplied default:
//!
//! ```
//! use named_args::{args, global, Lookup};
//!
//! global().add("DoPrint", true);
//! let args = args! { "Cutoff" => 1E-10 };
//!
//! assert!(args.get_bool_or("DoPrint", false).unwrap());
//! assert_eq!(args.get_real_or("Cutoff", 1E-5).unwrap(), 1E-10);
//! assert_eq!(args.get_int_or("Maxm", 5000).unwrap(), 5000);
//! ```

mod error;
mod global;
pub mod grammar;
mod lookup;
mod store;
mod value;

pub use crate::error::{Error, Result};
pub use crate::global::{global, GlobalStore};
pub use crate::lookup::{Layered, Lookup};
pub use crate::store::Store;
pub use crate::value::{FromValue, Value, ValueKind};

/// Builds a [`Store`] from `key => value` pairs at the call site.
///
/// Later pairs overwrite earlier ones with the same key.
#[macro_export]
macro_rules! args {
    () => {
        $crate::Store::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut store = $crate::Store::new();
        $(store.add($key, $value);)+
        store
    }};
}

/// Serializes tests that read or write the process-wide store.
#[cfg(test)]
pub(crate) fn global_test_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, PoisonError};
    static LOCK: Mutex<()> = Mutex::new(());
    let guard = LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    global().clear();
    guard
}
