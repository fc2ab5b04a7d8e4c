//! Shell completion backed by the command book.
//!
//! Completion scripts hand the words typed so far to `cb complete line --`.
//! The word under the cursor is classified against the clap definition and
//! answered from the stored prefixes and short names.

use std::path::PathBuf;

use clap::{Arg, Command, CommandFactory};

use crate::book::CommandBook;
use crate::cli::{Cli, CliShell};

/// Subcommands taking `<prefix> <short>` positionals.
const KEYED_SUBCOMMANDS: &[&str] = &["exec", "remove", "update"];

/// Flags whose value is an existing prefix.
const PREFIX_FLAGS: &[&str] = &["prefix", "new_prefix"];

/// What the word under the cursor stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// A subcommand name.
    Subcommand,
    /// A flag of the given subcommand, or of `cb` itself.
    Flag { subcommand: Option<String> },
    /// The value of the flag with this argument id.
    FlagValue { arg: String },
    /// The prefix positional of a keyed subcommand.
    Prefix,
    /// The short positional under `prefix`.
    Short { prefix: String },
    /// Anything the book cannot answer.
    Other,
}

/// A parsed completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Partial word being completed.
    pub current: String,
    /// Its role on the command line.
    pub slot: Slot,
    /// `--book` given on the line being completed.
    pub book: Option<PathBuf>,
}

impl CompletionRequest {
    /// Classify the last of `words`, the arguments after the program name.
    pub fn parse(words: &[String]) -> Self {
        let cmd = built_command();
        let (current, before) = match words.split_last() {
            Some((last, rest)) => (last.clone(), rest),
            None => (String::new(), &[][..]),
        };

        let mut subcommand: Option<String> = None;
        let mut positionals: Vec<&str> = Vec::new();
        let mut pending: Option<String> = None;
        let mut book = None;

        for word in before {
            if let Some(id) = pending.take() {
                if id == "book" {
                    book = Some(PathBuf::from(word));
                }
                continue;
            }

            if word.len() > 1 && word.starts_with('-') {
                let (name, inline) = match word.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (word.as_str(), None),
                };
                let Some(arg) = find_arg(&cmd, subcommand.as_deref(), name) else {
                    continue;
                };
                if !arg.get_action().takes_values() {
                    continue;
                }
                let id = arg.get_id().as_str();
                match inline {
                    Some(value) if id == "book" => book = Some(PathBuf::from(value)),
                    Some(_) => {}
                    None => pending = Some(id.to_string()),
                }
                continue;
            }

            match subcommand {
                None => {
                    let name = cmd
                        .find_subcommand(word)
                        .map_or(word.as_str(), Command::get_name);
                    subcommand = Some(name.to_string());
                }
                Some(_) => positionals.push(word),
            }
        }

        let slot = if let Some(arg) = pending {
            Slot::FlagValue { arg }
        } else if current.starts_with('-') {
            Slot::Flag { subcommand }
        } else {
            match subcommand.as_deref() {
                None => Slot::Subcommand,
                Some(name) if KEYED_SUBCOMMANDS.contains(&name) => match positionals.as_slice() {
                    [] => Slot::Prefix,
                    [prefix] => Slot::Short {
                        prefix: (*prefix).to_string(),
                    },
                    _ => Slot::Other,
                },
                Some(_) => Slot::Other,
            }
        };

        Self {
            current,
            slot,
            book,
        }
    }

    /// Candidates for the current word, sorted and filtered by what is typed.
    pub fn candidates(&self, book: &CommandBook) -> Vec<String> {
        let all: Vec<String> = match &self.slot {
            Slot::Subcommand => built_command()
                .get_subcommands()
                .filter(|sub| !sub.is_hide_set())
                .map(|sub| sub.get_name().to_string())
                .collect(),
            Slot::Flag { subcommand } => {
                let cmd = built_command();
                let target = subcommand
                    .as_deref()
                    .and_then(|name| cmd.find_subcommand(name))
                    .unwrap_or(&cmd);
                target
                    .get_arguments()
                    .filter(|arg| !arg.is_hide_set())
                    .filter_map(Arg::get_long)
                    .map(|long| format!("--{long}"))
                    .collect()
            }
            Slot::FlagValue { arg } if PREFIX_FLAGS.contains(&arg.as_str()) => {
                owned(book.prefixes())
            }
            Slot::Prefix => owned(book.prefixes()),
            Slot::Short { prefix } => owned(book.shortcuts(prefix)),
            Slot::FlagValue { .. } | Slot::Other => Vec::new(),
        };

        all.into_iter()
            .filter(|candidate| candidate.starts_with(&self.current))
            .collect()
    }
}

/// Completion script calling back into `cb complete line`.
///
/// Shells without a script here get clap's static completions.
pub fn dynamic_script(shell: CliShell) -> Option<&'static str> {
    match shell {
        CliShell::Bash => Some(BASH_SCRIPT),
        CliShell::Zsh => Some(ZSH_SCRIPT),
        CliShell::Fish => Some(FISH_SCRIPT),
        CliShell::Powershell | CliShell::Elvish => None,
    }
}

fn built_command() -> Command {
    let mut cmd = Cli::command();
    cmd.build();
    cmd
}

fn find_arg<'a>(cmd: &'a Command, subcommand: Option<&str>, word: &str) -> Option<&'a Arg> {
    let target = subcommand
        .and_then(|name| cmd.find_subcommand(name))
        .unwrap_or(cmd);

    target.get_arguments().find(|arg| match word.strip_prefix("--") {
        Some(long) => arg.get_long() == Some(long),
        None => {
            let mut chars = word.chars().skip(1);
            match (chars.next(), chars.next()) {
                (Some(short), None) => arg.get_short() == Some(short),
                _ => false,
            }
        }
    })
}

fn owned(items: Vec<&str>) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}

const BASH_SCRIPT: &str = r#"_cb() {
    local IFS=$'\n'
    COMPREPLY=($(cb complete line -- "${COMP_WORDS[@]:1:COMP_CWORD}" 2>/dev/null))
}

complete -o default -F _cb cb
"#;

const ZSH_SCRIPT: &str = r#"#compdef cb

_cb() {
    local -a candidates
    candidates=(${(f)"$(cb complete line -- "${(@)words[2,CURRENT]}" 2>/dev/null)"})
    if (( ${#candidates} )); then
        compadd -a candidates
    else
        _files
    fi
}

if [ "$funcstack[1]" = "_cb" ]; then
    _cb "$@"
else
    compdef _cb cb
fi
"#;

const FISH_SCRIPT: &str = r#"function __cb_complete
    set -l tokens (commandline -opc)
    set -e tokens[1]
    set -l current (commandline -ct)
    cb complete line -- $tokens "$current" 2>/dev/null
end

complete -c cb -f -a '(__cb_complete)'
"#;
