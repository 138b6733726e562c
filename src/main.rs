// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use typeahead::{
    load_frequency_table, load_vocabulary, vocabulary, FrequencyOracle, NoFrequencies, Result,
    SuggestConfig, Suggestion, SuggestionEngine, TypeaheadError, UsageLog,
};

mod cli;
use cli::display::{suggestion_line, use_colors};
use cli::state::{load_usage, save_usage};
use cli::{Cli, Commands};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Suggest {
            query,
            vocab,
            frequencies,
            config,
            limit,
            json,
        } => run_suggest(&query, vocab.as_deref(), frequencies.as_deref(), config.as_deref(), limit, json),
        Commands::Repl { vocab, state, config } => run_repl(vocab.as_deref(), state, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine-readable. `TYPEAHEAD_LOG` wins
/// over `RUST_LOG`; with neither set only warnings are shown.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("TYPEAHEAD_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_engine(vocab: Option<&Path>, config: Option<&Path>) -> Result<SuggestionEngine> {
    let config = match config {
        Some(path) => SuggestConfig::load(path)?,
        None => SuggestConfig::default(),
    };
    let words = match vocab {
        Some(path) => load_vocabulary(path)?,
        None => vocabulary::demo(),
    };
    Ok(SuggestionEngine::with_config(words, config))
}

fn stdout_error(source: std::io::Error) -> TypeaheadError {
    TypeaheadError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    }
}

fn run_suggest(
    query: &str,
    vocab: Option<&Path>,
    frequencies: Option<&Path>,
    config: Option<&Path>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut engine = build_engine(vocab, config)?;
    if let Some(cap) = limit {
        let mut config = engine.config().clone();
        config.cap = cap;
        engine.set_config(config);
    }

    let table = frequencies.map(load_frequency_table).transpose()?;
    let oracle: &dyn FrequencyOracle = match &table {
        Some(table) => table,
        None => &NoFrequencies,
    };

    let suggestions = engine.suggest_highlighted(query, oracle);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        let rendered = serde_json::to_string_pretty(&suggestions).map_err(|source| TypeaheadError::Json {
            path: PathBuf::from("<stdout>"),
            source,
        })?;
        writeln!(out, "{rendered}").map_err(stdout_error)?;
        return Ok(());
    }

    print_suggestions(&mut out, &suggestions, use_colors()).map_err(stdout_error)
}

fn print_suggestions(out: &mut impl Write, suggestions: &[Suggestion], colors: bool) -> std::io::Result<()> {
    if suggestions.is_empty() {
        writeln!(out, "No suggestions found")?;
    }
    for (i, suggestion) in suggestions.iter().enumerate() {
        writeln!(out, "{}", suggestion_line(i + 1, suggestion, colors))?;
    }
    Ok(())
}

/// What one REPL line asks for.
#[derive(Debug, PartialEq, Eq)]
enum ReplInput<'a> {
    Query(&'a str),
    PickRank(usize),
    PickTerm(&'a str),
    Recent,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_repl_line(line: &str) -> ReplInput<'_> {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return ReplInput::Query(line);
    };
    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };
    match name {
        "pick" | "p" if !arg.is_empty() => match arg.parse::<usize>() {
            Ok(rank) => ReplInput::PickRank(rank),
            Err(_) => ReplInput::PickTerm(arg),
        },
        "recent" | "r" => ReplInput::Recent,
        "help" | "h" | "?" => ReplInput::Help,
        "quit" | "q" | "exit" => ReplInput::Quit,
        _ => ReplInput::Unknown(line),
    }
}

const REPL_HELP: &str = "\
Type a query to see suggestions.
  :pick N     record suggestion N of the last query as selected
  :pick TERM  record a vocabulary term as selected
  :recent     list recent selections
  :quit       exit";

fn run_repl(vocab: Option<&Path>, state: Option<PathBuf>, config: Option<&Path>) -> Result<()> {
    let engine = build_engine(vocab, config)?;
    let mut usage = match &state {
        Some(path) => load_usage(path)?,
        None => UsageLog::new(),
    };
    let colors = use_colors();
    let interactive = atty::is(atty::Stream::Stdin);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut last: Vec<Suggestion> = Vec::new();

    if interactive {
        writeln!(out, "{} terms loaded. :help for commands.", engine.vocabulary().len()).map_err(stdout_error)?;
    }

    loop {
        if interactive {
            write!(out, "> ").map_err(stdout_error)?;
            out.flush().map_err(stdout_error)?;
        }

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).map_err(|source| TypeaheadError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
        if read == 0 {
            break;
        }

        let picked = match parse_repl_line(&line) {
            ReplInput::Query(query) => {
                last = engine.suggest_highlighted(query, &usage);
                print_suggestions(&mut out, &last, colors).map_err(stdout_error)?;
                None
            }
            ReplInput::PickRank(rank) => match rank.checked_sub(1).and_then(|i| last.get(i)) {
                Some(suggestion) => Some(suggestion.candidate.word.clone()),
                None => {
                    writeln!(out, "no suggestion #{rank}").map_err(stdout_error)?;
                    None
                }
            },
            ReplInput::PickTerm(term) if engine.contains(term) => Some(term.to_string()),
            ReplInput::PickTerm(term) => {
                writeln!(out, "'{term}' is not in the vocabulary").map_err(stdout_error)?;
                None
            }
            ReplInput::Recent => {
                for (i, term) in usage.recent().enumerate() {
                    writeln!(out, "{:>3}. {term}", i + 1).map_err(stdout_error)?;
                }
                None
            }
            ReplInput::Help => {
                writeln!(out, "{REPL_HELP}").map_err(stdout_error)?;
                None
            }
            ReplInput::Quit => break,
            ReplInput::Unknown(command) => {
                writeln!(out, "unknown command {command}; :help lists commands").map_err(stdout_error)?;
                None
            }
        };

        if let Some(word) = picked {
            let count = usage.record_selection(&word);
            tracing::info!(target: "typeahead::cli", word = %word, count, "selection recorded");
            writeln!(out, "picked {word} ({count}x)").map_err(stdout_error)?;
            if let Some(path) = &state {
                save_usage(path, &usage)?;
            }
        }
    }
    Ok(())
}
