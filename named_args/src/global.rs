use crate::{Store, Value};
use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

static GLOBAL: Lazy<GlobalStore> = Lazy::new(GlobalStore::default);

/// The process-wide fallback arguments.
///
/// Anything added here is visible to every later lookup whose instance store
/// does not define the same key.
pub fn global() -> &'static GlobalStore {
    &GLOBAL
}

/// The store behind [`global()`].
///
/// Its lock is never handed out; work with a [`GlobalStore::snapshot`]:
///
/// ```compile_fail
/// let _guard = named_args::global().read();
/// ```
///
/// ```
/// use named_args::{global, Lookup};
///
/// global().add("Maxm", 5000);
/// assert_eq!(global().snapshot().get_int("Maxm").unwrap(), 5000);
/// ```
#[derive(Debug, Default)]
pub struct GlobalStore(RwLock<Store>);

impl GlobalStore {
    /// Read access to the current contents.
    ///
    /// Taking any other lock on the global store from the same thread while
    /// the guard is alive can deadlock.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        log::debug!("Setting global argument {key} = {value:?}");
        self.write().add(key, value);
    }

    /// Adds every entry of `store`, overwriting existing keys.
    pub fn extend(&self, store: Store) {
        log::debug!("Setting {} global arguments", store.len());
        self.write().merge(store);
    }

    pub fn defined(&self, key: &str) -> bool {
        self.read().defined(key)
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.read().get(key).cloned()
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        log::debug!("Removing global argument {key}");
        self.write().remove(key)
    }

    pub fn snapshot(&self) -> Store {
        self.read().clone()
    }

    pub fn clear(&self) {
        log::debug!("Clearing global arguments");
        *self.write() = Store::new();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{global_test_lock, Lookup};

    #[test]
    fn starts_empty_after_clear() {
        let _lock = global_test_lock();
        assert!(global().snapshot().is_empty());
        assert!(!global().defined("DoPrint"));
    }

    #[test]
    fn add_get_remove() {
        let _lock = global_test_lock();
        global().add("DoPrint", true);
        global().add("DoPrint", false);
        assert!(global().defined("DoPrint"));
        assert_eq!(global().get("DoPrint"), Some(Value::Bool(false)));
        assert_eq!(global().snapshot().len(), 1);

        assert_eq!(global().remove("DoPrint"), Some(Value::Bool(false)));
        assert!(!global().defined("DoPrint"));
    }

    #[test]
    fn snapshot_is_detached() {
        let _lock = global_test_lock();
        global().add("Maxm", 100);
        let snapshot = global().snapshot();
        global().add("Maxm", 200);
        assert_eq!(snapshot.get("Maxm"), Some(&Value::Int(100)));
        assert_eq!(global().get("Maxm"), Some(Value::Int(200)));
    }

    #[test]
    fn extends() {
        let _lock = global_test_lock();
        global().add("A", 1);
        global().extend("A=2,B=x".parse().unwrap());
        assert_eq!(global().get("A"), Some(Value::Int(2)));
        assert_eq!(global().get("B"), Some(Value::from("x")));
    }

    #[test]
    fn lookup_through_snapshot() {
        let _lock = global_test_lock();
        global().add("Maxm", 5000);
        let snapshot = global().snapshot();
        assert_eq!(snapshot.get_int("Maxm").unwrap(), 5000);
        assert_eq!(snapshot.get_int_or("Cutoff", 7).unwrap(), 7);
    }

    #[test]
    fn shared_across_threads() {
        let _lock = global_test_lock();
        std::thread::scope(|scope| {
            for i in 0..4 {
                scope.spawn(move || global().add(format!("Worker{i}"), i));
            }
        });
        let snapshot = global().snapshot();
        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot.get("Worker3"), Some(&Value::Int(3)));
    }
}
