//! Command-line argument parsing.
//!
//! Megatron takes at most one option, so arguments are matched by hand.

use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: megatron [-d DIR | -c]

  (no args)  Browse the root_dir set in the config file
  -d DIR     Browse DIR
  -c         Edit the config file in $EDITOR";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Browse the given directory, or the configured root when `None`.
    Browse(Option<PathBuf>),
    EditConfig,
}

/// Parses the arguments following the program name.
///
/// Returns `None` for any combination other than the three accepted forms.
pub fn parse_args<I>(args: I) -> Option<CliCommand>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.as_slice() {
        [] => Some(CliCommand::Browse(None)),
        [flag] if flag == "-c" => Some(CliCommand::EditConfig),
        [flag, dir] if flag == "-d" && !dir.is_empty() => {
            Some(CliCommand::Browse(Some(PathBuf::from(dir))))
        }
        _ => None,
    }
}
