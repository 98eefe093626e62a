use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "langpack")]
#[command(about = "Compile and query cached key/value translation files")]
#[command(version)]
pub struct Args {
    /// Config file (defaults to ~/.config/langpack/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Options selecting which translations to load.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Language identifier (defaults to the default language)
    #[arg(short = 'l', long = "lang")]
    pub lang: Option<String>,

    /// Directory containing translation files
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Directory for compiled cache files
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Language used when the requested file is missing
    #[arg(long = "default-lang")]
    pub default_lang: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a translation
    Get {
        /// Translation key
        key: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Positional substitution value for {0}, {1}, ... (repeatable)
        #[arg(short = 'a', long = "arg", value_name = "VALUE", conflicts_with = "set")]
        args: Vec<String>,

        /// Named substitution for {NAME} (repeatable)
        #[arg(short = 's', long = "set", value_name = "NAME=VALUE", value_parser = parse_named)]
        set: Vec<(String, String)>,

        /// Print the key instead of the translation (if allowed by config)
        #[arg(long)]
        show_keys: bool,
    },
    /// Compile translations and refresh the cache
    Compile {
        #[command(flatten)]
        source: SourceArgs,

        /// Recompile even if the cache is up to date
        #[arg(short = 'f', long)]
        force: bool,
    },
    /// Print every compiled translation
    Dump {
        #[command(flatten)]
        source: SourceArgs,

        /// Print as a JSON object
        #[arg(long)]
        json: bool,
    },
    /// Remove the cache file for a language
    Clean {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Show resolved settings
    Config {
        #[command(flatten)]
        source: SourceArgs,

        /// Write a config file with the default settings
        #[arg(long)]
        init: bool,
    },
}

fn parse_named(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}
