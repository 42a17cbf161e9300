// SPDX-License-Identifier: MPL-2.0
use locale_store::config::paths;
use locale_store::{FileStore, LocaleStore, TranslationTable};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: locale-store [--config-dir DIR] [--table FILE] <COMMAND>

Commands:
  show           Print the current locale
  get <KEY>      Print the translation for a dotted key
  set <LOCALE>   Select a locale
  toggle         Switch between en and ar, then print the new locale
  locales        List the locales in the translation table

Options:
  --config-dir DIR   Directory holding settings.toml
  --table FILE       JSON translation table (defaults to the bundled one)
  -h, --help         Print this help
";

#[derive(Debug)]
enum Command {
    Show,
    Get(String),
    Set(String),
    Toggle,
    Locales,
}

#[derive(Debug)]
enum CliError {
    Usage(String),
    Runtime(locale_store::Error),
}

impl CliError {
    /// Process exit status: 2 for usage errors, 1 for runtime failures.
    fn exit_status(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Runtime(_) => 1,
        }
    }
}

impl From<pico_args::Error> for CliError {
    fn from(err: pico_args::Error) -> Self {
        CliError::Usage(err.to_string())
    }
}

impl From<locale_store::Error> for CliError {
    fn from(err: locale_store::Error) -> Self {
        CliError::Runtime(err)
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            match &error {
                CliError::Usage(message) => eprintln!("{message}\n\n{USAGE}"),
                CliError::Runtime(error) => eprintln!("error: {error}"),
            }
            ExitCode::from(error.exit_status())
        }
    }
}

fn run() -> Result<(), CliError> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let table_path: Option<PathBuf> = args.opt_value_from_str("--table")?;
    let command = parse_command(&mut args)?;

    let leftover = args.finish();
    if !leftover.is_empty() {
        return Err(CliError::Usage(format!(
            "unexpected arguments: {:?}",
            leftover
        )));
    }

    paths::init_cli_override(config_dir);

    let table = match table_path {
        Some(path) => TranslationTable::load_from_path(&path)?,
        None => TranslationTable::bundled()?,
    };
    let storage = FileStore::open_with_override(None)?;
    tracing::debug!(settings = %storage.path().display(), "Opened settings file");

    let mut store = LocaleStore::new(Arc::new(table), storage);

    match command {
        Command::Show => println!("{}", store.locale()),
        Command::Get(key) => println!("{}", store.lookup(&key)),
        Command::Set(locale) => store.set_locale(locale),
        Command::Toggle => {
            store.toggle_locale();
            println!("{}", store.locale());
        }
        Command::Locales => {
            for locale in store.table().locales() {
                println!("{locale}");
            }
        }
    }

    Ok(())
}

fn parse_command(args: &mut pico_args::Arguments) -> Result<Command, CliError> {
    let Some(name) = args.opt_free_from_str::<String>()? else {
        return Err(CliError::Usage("missing command".to_string()));
    };

    match name.as_str() {
        "show" => Ok(Command::Show),
        "get" => Ok(Command::Get(args.free_from_str()?)),
        "set" => Ok(Command::Set(args.free_from_str()?)),
        "toggle" => Ok(Command::Toggle),
        "locales" => Ok(Command::Locales),
        other => Err(CliError::Usage(format!("unknown command: {other}"))),
    }
}
