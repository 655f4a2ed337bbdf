use crate::{global, Error, FromValue, Result, Store, Value};

/// Typed access to named arguments.
///
/// The mandatory forms fail with [`Error::MissingRequiredArgument`] when no
/// layer defines the key; the `_or` forms return the default instead. Both
/// fail with [`Error::TypeMismatch`] when the value found has another type.
pub trait Lookup {
    fn lookup<T: FromValue>(&self, key: &str) -> Result<T>;

    fn lookup_or<T: FromValue>(&self, key: &str, default: T) -> Result<T>;

    fn get_int(&self, key: &str) -> Result<i64> {
        self.lookup(key)
    }

    fn get_int_or(&self, key: &str, default: i64) -> Result<i64> {
        self.lookup_or(key, default)
    }

    fn get_real(&self, key: &str) -> Result<f64> {
        self.lookup(key)
    }

    fn get_real_or(&self, key: &str, default: f64) -> Result<f64> {
        self.lookup_or(key, default)
    }

    fn get_bool(&self, key: &str) -> Result<bool> {
        self.lookup(key)
    }

    fn get_bool_or(&self, key: &str, default: bool) -> Result<bool> {
        self.lookup_or(key, default)
    }

    fn get_string(&self, key: &str) -> Result<String> {
        self.lookup(key)
    }

    fn get_string_or(&self, key: &str, default: impl Into<String>) -> Result<String> {
        self.lookup_or(key, default.into())
    }
}

/// An instance store layered over a fallback store.
///
/// The instance always shadows the fallback, which always shadows the
/// caller's default.
#[derive(Copy, Clone, Debug)]
pub struct Layered<'a> {
    local: &'a Store,
    global: &'a Store,
}

impl<'a> Layered<'a> {
    pub fn new(local: &'a Store, global: &'a Store) -> Self {
        Self { local, global }
    }

    pub fn resolve(&self, key: &str) -> Option<&'a Value> {
        self.local.get(key).or_else(|| self.global.get(key))
    }
}

impl Lookup for Layered<'_> {
    fn lookup<T: FromValue>(&self, key: &str) -> Result<T> {
        let value = self
            .resolve(key)
            .ok_or_else(|| Error::MissingRequiredArgument {
                key: key.to_string(),
            })?;
        coerce(key, value)
    }

    fn lookup_or<T: FromValue>(&self, key: &str, default: T) -> Result<T> {
        match self.resolve(key) {
            Some(value) => coerce(key, value),
            None => Ok(default),
        }
    }
}

/// Looks through the instance to the process-wide [`global()`] store.
impl Lookup for Store {
    fn lookup<T: FromValue>(&self, key: &str) -> Result<T> {
        let global = global().read();
        Layered::new(self, &global).lookup(key)
    }

    fn lookup_or<T: FromValue>(&self, key: &str, default: T) -> Result<T> {
        let global = global().read();
        Layered::new(self, &global).lookup_or(key, default)
    }
}

fn coerce<T: FromValue>(key: &str, value: &Value) -> Result<T> {
    T::from_value(value).ok_or_else(|| Error::TypeMismatch {
        key: key.to_string(),
        found: value.kind(),
        requested: T::KIND,
    })
}
