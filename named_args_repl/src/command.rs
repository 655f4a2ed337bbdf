use crate::arguments::Kind;
use anyhow::{anyhow, Context};
use clap::ValueEnum;
use named_args::Store;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Set(Store),
    Global(Store),
    Unset(String),
    Get {
        kind: Kind,
        key: String,
        default: Option<String>,
    },
    Defined(String),
    Show,
    Clear,
    Help,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let rest = rest.trim();
        match verb {
            "set" => Ok(Self::Set(
                rest.parse::<Store>().context("Failed to parse arguments")?,
            )),
            "global" => Ok(Self::Global(
                rest.parse::<Store>().context("Failed to parse global arguments")?,
            )),
            "unset" => Ok(Self::Unset(single_key(verb, rest)?)),
            "defined" => Ok(Self::Defined(single_key(verb, rest)?)),
            "get" => {
                let mut words = rest.split_whitespace();
                let kind = words.next().context("Missing argument type")?;
                let kind = <Kind as ValueEnum>::from_str(kind, true)
                    .map_err(|e| anyhow!("Invalid argument type {kind}: {e}"))?;
                let key = words.next().context("Missing argument name")?.to_string();
                let default = words.next().map(str::to_string);
                anyhow::ensure!(words.next().is_none(), "Too many words for get: {rest}");
                Ok(Self::Get { kind, key, default })
            }
            "show" => Ok(Self::Show),
            "clear" => Ok(Self::Clear),
            "help" => Ok(Self::Help),
            other => Err(anyhow!("Unknown command {other}, try `help`")),
        }
    }
}

fn single_key(verb: &str, rest: &str) -> anyhow::Result<String> {
    anyhow::ensure!(!rest.is_empty(), "Missing argument name for {verb}");
    anyhow::ensure!(
        !rest.contains(char::is_whitespace),
        "{verb} takes exactly one argument name"
    );
    Ok(rest.to_string())
}
