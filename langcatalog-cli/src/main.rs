mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{parse_param, run_check, run_keys, run_languages, run_render};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a catalog and report translation counts and missing keys.
    Check {
        /// Directory containing `<code>.json` files
        dir: PathBuf,

        /// Default language the catalog must contain
        #[arg(short, long, default_value = "en")]
        default: String,
    },

    /// List the languages of a catalog.
    Languages {
        dir: PathBuf,

        #[arg(short, long, default_value = "en")]
        default: String,
    },

    /// List the flattened keys of one language.
    Keys {
        dir: PathBuf,

        #[arg(short, long, default_value = "en")]
        default: String,

        /// Language to list; the default language when omitted
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Render a translation with `name=value` placeholder arguments.
    Render {
        dir: PathBuf,

        /// Dotted translation key, e.g. `menu.file.open`
        key: String,

        #[arg(short, long, default_value = "en")]
        default: String,

        /// Target language; falls back to the default language when invalid
        #[arg(short, long)]
        lang: Option<String>,

        /// Placeholder values as `name=value`
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match args.commands {
        Commands::Check { dir, default } => run_check(&dir, &default),
        Commands::Languages { dir, default } => run_languages(&dir, &default),
        Commands::Keys { dir, default, lang } => run_keys(&dir, &default, lang.as_deref()),
        Commands::Render {
            dir,
            key,
            default,
            lang,
            params,
        } => run_render(&dir, &default, lang.as_deref(), &key, params),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
