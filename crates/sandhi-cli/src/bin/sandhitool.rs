use std::path::Path;

use clap::{Parser, Subcommand};

use sandhi_cli::commands::{check_ops, config_ops, text_ops};
use sandhi_engine::script::ScriptKind;

#[derive(Parser)]
#[command(name = "sandhitool", about = "Sanskrit script and sandhi diagnostics")]
struct Cli {
    /// Write JSON traces to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Custom lexical exceptions TOML
    #[arg(long, global = true)]
    exceptions: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect the script of a text and show the character census
    Detect {
        text: String,
    },
    /// Split a text into phoneme tokens
    Tokenize {
        text: String,
        /// Script to tokenize in (iast, devanagari); detected when omitted
        #[arg(long)]
        script: Option<ScriptKind>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Transliterate between IAST and Devanagari
    Translit {
        text: String,
        /// Target script
        #[arg(long)]
        to: ScriptKind,
        /// Source script; detected when omitted
        #[arg(long)]
        from: Option<ScriptKind>,
        /// Fold case, decomposed and alternate IAST spellings first (lossy)
        #[arg(long)]
        fold: bool,
    },
    /// Show the features of one phoneme (canonical id or spelling)
    Classify {
        phoneme: String,
    },
    /// Join two morphemes with sandhi
    Join {
        left: String,
        right: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show every sandhi rule's verdict at a boundary
    Explain {
        left: String,
        right: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run a sandhi accuracy corpus
    Check {
        /// Corpus TOML with [[case]] entries
        corpus_file: String,
        /// Only run cases expecting this rule
        #[arg(long)]
        rule: Option<String>,
        /// Also list passing cases
        #[arg(short, long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        file: String,
    },
    /// Print the default lexical exceptions TOML
    ExceptionsExport,
    /// Validate a lexical exceptions TOML file
    ExceptionsValidate {
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.trace_dir {
        sandhi_engine::trace_init::init_tracing(Path::new(dir));
    }
    config_ops::load_custom(cli.settings.as_deref(), cli.exceptions.as_deref());

    match cli.command {
        Command::Detect { text } => text_ops::detect_cmd(&text),
        Command::Tokenize { text, script, json } => text_ops::tokenize_cmd(&text, script, json),
        Command::Translit {
            text,
            to,
            from,
            fold,
        } => text_ops::translit_cmd(&text, from, to, fold),
        Command::Classify { phoneme } => text_ops::classify_cmd(&phoneme),
        Command::Join { left, right, json } => text_ops::join_cmd(&left, &right, json),
        Command::Explain { left, right, json } => text_ops::explain_cmd(&left, &right, json),
        Command::Check {
            corpus_file,
            rule,
            verbose,
            json,
        } => check_ops::check_cmd(&corpus_file, rule.as_deref(), verbose, json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::ExceptionsExport => config_ops::exceptions_export(),
        Command::ExceptionsValidate { file } => config_ops::exceptions_validate(&file),
    }
}
