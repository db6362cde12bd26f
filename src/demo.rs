// Shared entry point for the pattern binaries.

use std::fmt;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::PatternError;

#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(about = "Run a narrated design pattern demo")]
pub struct DemoArgs {
    /// Variant key to select (case-insensitive). Defaults to the demo's own key.
    pub key: Option<String>,

    /// Print the recognized keys and exit
    #[arg(long)]
    pub list: bool,
}

/// Everything a binary needs to narrate one pattern.
#[derive(Clone, Copy)]
pub struct Demo {
    pub title: &'static str,
    pub default_key: &'static str,
    pub keys: fn() -> Vec<&'static str>,
    pub run: fn(&str) -> Result<Vec<String>, PatternError>,
}

impl fmt::Debug for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Demo")
            .field("title", &self.title)
            .field("default_key", &self.default_key)
            .finish_non_exhaustive()
    }
}

impl Demo {
    /// Lines the demo writes to stdout for the given arguments.
    pub fn render(&self, args: &DemoArgs) -> Result<Vec<String>> {
        if args.list {
            return Ok((self.keys)().into_iter().map(str::to_string).collect());
        }

        let key = args.key.as_deref().unwrap_or(self.default_key);
        info!(demo = self.title, key, "running demo");

        let mut lines = vec![format!("=== {} ===", self.title).bold().to_string()];
        lines.extend(
            (self.run)(key).with_context(|| format!("{} demo failed", self.title))?,
        );
        Ok(lines)
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse the command line, run the demo, and report any failure on stderr.
pub fn run_main(demo: &Demo) -> ExitCode {
    init_tracing();
    let args = DemoArgs::parse();

    match demo.render(&args) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_keys() -> Vec<&'static str> {
        vec!["alpha", "beta"]
    }

    fn sample_run(key: &str) -> Result<Vec<String>, PatternError> {
        match key.to_lowercase().as_str() {
            "alpha" => Ok(vec!["I am a Alpha".to_string()]),
            "beta" => Ok(vec!["I am a Beta".to_string()]),
            _ => Err(PatternError::unknown_variant("sample", key, sample_keys())),
        }
    }

    const SAMPLE: Demo = Demo {
        title: "Sample",
        default_key: "alpha",
        keys: sample_keys,
        run: sample_run,
    };

    #[test]
    fn test_parse_defaults() {
        let args = DemoArgs::try_parse_from(["demo"]).unwrap();
        assert_eq!(args, DemoArgs::default());
    }

    #[test]
    fn test_parse_key_and_list() {
        let args = DemoArgs::try_parse_from(["demo", "Beta"]).unwrap();
        assert_eq!(args.key.as_deref(), Some("Beta"));

        let args = DemoArgs::try_parse_from(["demo", "--list"]).unwrap();
        assert!(args.list);
    }

    #[test]
    fn test_render_uses_default_key() {
        let lines = SAMPLE.render(&DemoArgs::default()).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("=== Sample ==="));
        assert_eq!(lines[1], "I am a Alpha");
    }

    #[test]
    fn test_render_explicit_key() {
        let args = DemoArgs {
            key: Some("BETA".to_string()),
            list: false,
        };
        let lines = SAMPLE.render(&args).unwrap();
        assert_eq!(lines.last().unwrap(), "I am a Beta");
    }

    #[test]
    fn test_render_list() {
        let args = DemoArgs {
            key: None,
            list: true,
        };
        assert_eq!(SAMPLE.render(&args).unwrap(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_render_unknown_key() {
        let args = DemoArgs {
            key: Some("gamma".to_string()),
            list: false,
        };
        let err = SAMPLE.render(&args).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Sample demo failed"));
        assert!(message.contains("gamma"));
        assert!(err.downcast_ref::<PatternError>().is_some());
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
