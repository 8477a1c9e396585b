//! Command-line argument parsing for the `transpose` binary.

use super::types::error::{Result, TranspositionError};
use super::types::models::{FillMode, ReadMode, TranspositionOptions};

pub const USAGE: &str = "\
Usage: transpose <encrypt|decrypt> <TEXT> --key1 <KEY> [--key2 <KEY>] [--double]
                 [--fill <row-lr|row-rl|col-tb|col-bt>] [--read <row-lr|row-rl|col-tb|col-bt>]
                 [--pad <CHAR>] [--normalize] [--letters-only] [--show-grid]";

/// Direction of the requested transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Encrypt,
    Decrypt,
}

/// A fully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub text: String,
    pub options: TranspositionOptions,
    /// Print the first-stage grid to stderr.
    pub show_grid: bool,
}

impl CliArgs {
    /// Parses `args` without the program name.
    ///
    /// Unlike the library, mode strings are parsed strictly here: a typo on the
    /// command line is reported instead of silently replaced by a default.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let mut args = args.iter().map(AsRef::<str>::as_ref);

        let command = match args.next() {
            Some("encrypt") => Command::Encrypt,
            Some("decrypt") => Command::Decrypt,
            Some(other) => return Err(TranspositionError::UnknownCommand(other.to_string())),
            None => return Err(TranspositionError::MissingArgument("command")),
        };

        let mut text: Option<String> = None;
        let mut key1: Option<String> = None;
        let mut options = TranspositionOptions::default();
        let mut show_grid = false;

        while let Some(arg) = args.next() {
            match arg {
                "--key1" => key1 = Some(flag_value(&mut args, "--key1")?.to_string()),
                "--key2" => options = options.with_key2(flag_value(&mut args, "--key2")?),
                "--double" => options = options.double(true),
                "--fill" => options = options.fill_mode(flag_value(&mut args, "--fill")?.parse::<FillMode>()?),
                "--read" => options = options.read_mode(flag_value(&mut args, "--read")?.parse::<ReadMode>()?),
                "--pad" => {
                    let value = flag_value(&mut args, "--pad")?;
                    if value.is_empty() {
                        return Err(TranspositionError::InvalidArgument {
                            flag: "--pad",
                            value: value.to_string(),
                        });
                    }
                    options = options.pad_str(value);
                }
                "--normalize" => options = options.normalize(true),
                "--letters-only" => options = options.letters_only(true),
                "--show-grid" => show_grid = true,
                flag if flag.starts_with("--") => {
                    return Err(TranspositionError::Usage(format!("Unknown flag: {}", flag)));
                }
                positional => {
                    if text.is_some() {
                        return Err(TranspositionError::Usage(format!(
                            "Unexpected extra argument: {}",
                            positional
                        )));
                    }
                    text = Some(positional.to_string());
                }
            }
        }

        let text = text.ok_or(TranspositionError::MissingArgument("TEXT"))?;
        let key1 = key1.ok_or(TranspositionError::MissingArgument("--key1"))?;

        Ok(Self {
            command,
            text,
            options: options.with_key1(key1),
            show_grid,
        })
    }
}

fn flag_value<'a>(args: &mut impl Iterator<Item = &'a str>, flag: &'static str) -> Result<&'a str> {
    args.next().ok_or(TranspositionError::MissingArgument(flag))
}
