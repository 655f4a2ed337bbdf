use anyhow::Context;
use arguments::{Arguments, Mode};
use clap::Parser;
use command::Command;
use named_args::{global, Store};
use rustyline::{error::ReadlineError, history::DefaultHistory};
use session::Session;
use tracing_subscriber::EnvFilter;

mod arguments;
mod command;
mod defaults;
mod session;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Arguments::parse();

    defaults::load(args.defaults.as_deref())?;
    for text in &args.global {
        let store = text
            .parse::<Store>()
            .with_context(|| format!("Failed to parse global arguments {text:?}"))?;
        global().extend(store);
    }

    match args.mode {
        Mode::Parse { text } => {
            let store = text.parse::<Store>().context("Failed to parse arguments")?;
            println!(
                "{}",
                ron::to_string(&store).context("Failed to serialize arguments")?
            );
        }
        Mode::Get {
            text,
            kind,
            key,
            default,
        } => {
            let store = text.parse::<Store>().context("Failed to parse arguments")?;
            let value = session::resolve(&store, kind, &key, default.as_deref())
                .with_context(|| format!("Failed to get {kind} argument {key}"))?;
            println!("{value}");
        }
        Mode::Repl => repl()?,
    }

    Ok(())
}

fn repl() -> anyhow::Result<()> {
    println!("Enter `help` for the list of commands.");
    println!("CTRL+C to clear and CTRL+D to quit.");
    let mut session = Session::default();
    let mut rl = rustyline::Editor::<(), DefaultHistory>::new()?;
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(&line)?;
                let output = line
                    .parse::<Command>()
                    .and_then(|command| session.execute(command));
                match output {
                    Ok(output) => println!("{output}"),
                    Err(e) => println!("{e:#}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL+D");
                break;
            }
            Err(e) => {
                anyhow::bail!("{e:?}");
            }
        }
    }
    Ok(())
}
