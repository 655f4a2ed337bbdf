use crate::arguments::Kind;
use crate::command::Command;
use anyhow::Context;
use named_args::{global, FromValue, Lookup, Store, Value};
use std::str::FromStr;

pub const HELP: &str = "\
set <Key=Value,...>          add arguments to this session
global <Key=Value,...>       add arguments to the global defaults
unset <Key>                  remove a session argument
get <kind> <Key> [default]   look up an argument (kind: int, real, bool, string)
defined <Key>                check both layers for an argument
show                         print session and global arguments
clear                        remove all session arguments
help                         print this text";

/// The local arguments of an interactive session.
#[derive(Debug, Default)]
pub struct Session {
    local: Store,
}

impl Session {
    pub fn execute(&mut self, command: Command) -> anyhow::Result<String> {
        tracing::debug!("Executing {command:?}");
        match command {
            Command::Set(store) => {
                let count = store.len();
                self.local.merge(store);
                Ok(format!("Set {count} arguments"))
            }
            Command::Global(store) => {
                let count = store.len();
                global().extend(store);
                Ok(format!("Set {count} global arguments"))
            }
            Command::Unset(key) => match self.local.remove(&key) {
                Some(value) => Ok(format!("Removed {key}={value}")),
                None => Ok(format!("{key} is not set")),
            },
            Command::Get { kind, key, default } => {
                let value = resolve(&self.local, kind, &key, default.as_deref())?;
                Ok(value.to_string())
            }
            Command::Defined(key) => Ok(format!(
                "local: {}, global: {}",
                self.local.defined(&key),
                global().defined(&key)
            )),
            Command::Show => Ok(format!(
                "local: {}\nglobal: {}",
                ron::to_string(&self.local)?,
                ron::to_string(&global().snapshot())?
            )),
            Command::Clear => {
                self.local = Store::new();
                Ok("Cleared session arguments".to_string())
            }
            Command::Help => Ok(HELP.to_string()),
        }
    }
}

/// Looks up `key` as `kind`, parsing `default` as that same kind.
pub fn resolve(
    store: &Store,
    kind: Kind,
    key: &str,
    default: Option<&str>,
) -> anyhow::Result<Value> {
    match kind {
        Kind::Int => lookup::<i64>(store, key, default),
        Kind::Real => lookup::<f64>(store, key, default),
        Kind::Bool => lookup::<bool>(store, key, default),
        Kind::String => lookup::<String>(store, key, default),
    }
}

fn lookup<T>(store: &Store, key: &str, default: Option<&str>) -> anyhow::Result<Value>
where
    T: FromValue + FromStr + Into<Value>,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = match default {
        Some(default) => {
            let default = default
                .parse::<T>()
                .with_context(|| format!("Failed to parse default {default:?} as {}", T::KIND))?;
            store.lookup_or(key, default)?
        }
        None => store.lookup::<T>(key)?,
    };
    Ok(value.into())
}
