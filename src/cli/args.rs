/// CLI argument definitions: clap entry point plus the permissive flag scanner.
use clap::Parser;

const AFTER_HELP: &str = "\
Flags (each takes exactly one value, except --debug):
  --out <PATH>            Write the payload to PATH instead of stdout
  --vars <KEY=VALUE>      Add an entry to the `vars` map (repeatable)
  --fields <KEY=VALUE>    Add an entry to the `fields` map (repeatable)
  --debug                 Print stage timings to stderr

A VALUE starting with @ is read from the named file. Literal \\n sequences
in any value are turned into real newlines. Unrecognized arguments are
ignored.

Examples:
  make-payload --vars project=K8s --fields 'subject=Hello {{project}}' --fields 'message=Line1\\nLine2'
  make-payload --out payload.txt --fields message=@message.txt";

/// make-payload — build a base64url(JSON) prefill payload.
#[derive(Debug, Parser)]
#[command(
    name = "make-payload",
    about = "Build a base64url(JSON) prefill payload from key=value pairs",
    version,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Payload flags, scanned left to right (see below).
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

/// A recognized flag together with the value it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flag {
    /// `--out <path>`. Empty when the flag was the last token.
    Out(String),
    /// `--vars <key=value>`, unparsed.
    Vars(String),
    /// `--fields <key=value>`, unparsed.
    Fields(String),
    /// `--debug`.
    Debug,
}

/// Scan raw arguments into recognized flags, in order.
///
/// A value-taking flag always consumes the next token, even one that looks
/// like another flag. A value-taking flag with nothing after it gets an
/// empty value. Everything else is skipped.
#[must_use]
pub fn scan<S: AsRef<str>>(args: &[S]) -> Vec<Flag> {
    let mut flags = Vec::new();
    let mut tokens = args.iter().map(AsRef::as_ref);

    while let Some(token) = tokens.next() {
        let ctor: fn(String) -> Flag = match token {
            "--out" => Flag::Out,
            "--vars" => Flag::Vars,
            "--fields" => Flag::Fields,
            "--debug" => {
                flags.push(Flag::Debug);
                continue;
            }
            _ => continue,
        };
        let value = tokens.next().unwrap_or_default();
        flags.push(ctor(value.to_owned()));
    }

    flags
}

/// Whether `--debug` appeared as a flag (not as some other flag's value).
#[must_use]
pub fn debug_requested(flags: &[Flag]) -> bool {
    flags.contains(&Flag::Debug)
}
