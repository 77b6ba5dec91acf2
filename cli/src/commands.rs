//! CLI command definitions

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};
use std::io::Read;
use std::path::{Path, PathBuf};

/// CLI arguments for interlog
#[derive(Parser, Debug)]
#[command(name = "interlog")]
#[command(author, version, about = "Record an LLM request/response pair to a log file")]
#[command(long_about = r#"
interlog writes one LLM interaction to its own file:

  <log_dir>/llm_interaction_<micros>.log

Logging is best-effort. If the directory cannot be created or the file cannot
be written, a diagnostic is printed to stderr and the command still succeeds.

Configuration files are loaded from (in priority order):
1. INTERLOG_LOGGING__DIR / INTERLOG_LOGGING__ENABLED
2. --config <path>     Explicit config file
3. ./interlog.toml     Project-level config
4. ~/.config/interlog/config.toml   Global config

Example:
  interlog --request "Hello" --response "World"
  curl ... | interlog --request-file prompt.txt --response-file -
"#)]
#[command(group(ArgGroup::new("request_input").args(["request", "request_file"])))]
#[command(group(ArgGroup::new("response_input").args(["response", "response_file"])))]
pub struct Cli {
    /// Request text sent to the model
    #[arg(long, value_name = "TEXT")]
    pub request: Option<String>,

    /// Read the request from a file (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    pub request_file: Option<PathBuf>,

    /// Response text returned by the model
    #[arg(long, value_name = "TEXT")]
    pub response: Option<String>,

    /// Read the response from a file (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    pub response_file: Option<PathBuf>,

    /// Directory for interaction logs (overrides configuration)
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Resolve request and response text from literals, files or stdin.
    pub fn read_interaction(&self, stdin: &mut dyn Read) -> Result<(String, String)> {
        if is_stdin(self.request_file.as_deref()) && is_stdin(self.response_file.as_deref()) {
            bail!("Only one of --request-file and --response-file can read from stdin");
        }

        let request = read_text(
            "request",
            self.request.as_deref(),
            self.request_file.as_deref(),
            stdin,
        )?;
        let response = read_text(
            "response",
            self.response.as_deref(),
            self.response_file.as_deref(),
            stdin,
        )?;
        Ok((request, response))
    }
}

fn is_stdin(path: Option<&Path>) -> bool {
    path.is_some_and(|p| p == Path::new("-"))
}

fn read_text(
    what: &str,
    literal: Option<&str>,
    file: Option<&Path>,
    stdin: &mut dyn Read,
) -> Result<String> {
    match (literal, file) {
        (Some(text), _) => Ok(text.to_string()),
        (None, Some(path)) if is_stdin(Some(path)) => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .with_context(|| format!("Failed to read {} from stdin", what))?;
            Ok(text)
        }
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {} from {}", what, path.display())),
        (None, None) => bail!("No {what} given. Use --{what} or --{what}-file."),
    }
}
