use clap::{Parser, Subcommand, ValueEnum};
use std::{fmt::Display, path::PathBuf};

#[derive(Copy, Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Int,
    Real,
    Bool,
    String,
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

#[derive(Debug, Parser)]
#[command(author, version)]
pub struct Arguments {
    /// TOML file of global default arguments [default: nargs.toml, if present]
    #[arg(short, long)]
    pub defaults: Option<PathBuf>,

    /// Global arguments, such as `DoPrint=true,Maxm=5000`
    #[arg(short, long)]
    pub global: Vec<String>,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Debug, Subcommand)]
pub enum Mode {
    /// Parse an argument string and print the resulting arguments
    Parse {
        /// Arguments, such as `Name=psi,Maxm=200,Cutoff=1E-10`
        text: String,
    },
    /// Look up one argument, falling back to the global arguments
    Get {
        /// Arguments, such as `Name=psi,Maxm=200,Cutoff=1E-10`
        text: String,

        /// Expected type of the argument
        kind: Kind,

        key: String,

        /// Returned when neither layer defines the key
        #[arg(long)]
        default: Option<String>,
    },
    Repl,
}
