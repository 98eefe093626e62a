use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use langpack_cli::LangError;
use langpack_cli::cli::commands::{clean, compile, config, dump, get};
use langpack_cli::cli::{Args, Command};
use langpack_cli::output::{self, OutputConfig};
use langpack_cli::ui::Style;

fn main() -> ExitCode {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", Style::error("Error:"));
            ExitCode::from(exit_status(&err) as u8)
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config_path = args.config.as_deref();

    match args.command {
        Command::Get {
            key,
            source,
            args,
            set,
            show_keys,
        } => {
            let options = get::GetOptions {
                key,
                source,
                args,
                set,
                show_keys,
            };
            get::run_get(config_path, &options)?;
        }
        Command::Compile { source, force } => {
            compile::run_compile(config_path, &source, force)?;
        }
        Command::Dump { source, json } => {
            dump::run_dump(config_path, &source, json)?;
        }
        Command::Clean { source } => {
            clean::run_clean(config_path, &source)?;
        }
        Command::Config { source, init } => {
            if init {
                config::init_config(config_path)?;
            } else {
                config::show_config(config_path, &source)?;
            }
        }
    }

    Ok(())
}

fn exit_status(err: &anyhow::Error) -> exitcode::ExitCode {
    if let Some(lang_err) = err.chain().find_map(|e| e.downcast_ref::<LangError>()) {
        return match lang_err {
            LangError::InvalidLanguage { .. } => exitcode::USAGE,
            LangError::NoTranslationSource { .. } => exitcode::NOINPUT,
            LangError::MissingInheritanceTarget { .. } => exitcode::DATAERR,
            LangError::Read { .. } | LangError::CacheIo { .. } => exitcode::IOERR,
            LangError::Serialization { .. } => exitcode::SOFTWARE,
        };
    }

    if err
        .chain()
        .any(|e| e.downcast_ref::<toml::de::Error>().is_some())
    {
        return exitcode::CONFIG;
    }

    exitcode::SOFTWARE
}
