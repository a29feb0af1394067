use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde_json::Value;

use orbitrace::config::load_raw_config;
use orbitrace::observability::logging::{init_logging, DEFAULT_DIRECTIVE};
use orbitrace::{CaptureOutcome, CapturedError, HttpTransport, Metadata, TelemetryClient};

#[derive(Debug, Parser)]
#[command(name = "orbitrace-cli")]
#[command(about = "Send a one-off telemetry event to an Orbitrace collector", long_about = None)]
struct Cli {
    /// Path to a TOML or JSON client configuration.
    #[arg(short, long)]
    config: PathBuf,

    /// Request timeout in seconds.
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,

    /// Metadata entry as key=value (repeatable). Values that parse as JSON are sent as JSON.
    #[arg(short, long = "meta", value_parser = parse_meta, global = true)]
    meta: Vec<(String, Value)>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Capture a plain message
    Message { text: String },
    /// Capture an exception
    Exception {
        message: String,
        #[arg(long)]
        stack: Option<String>,
    },
}

fn parse_meta(input: &str) -> Result<(String, Value), String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", input))?;
    if key.is_empty() {
        return Err("metadata key must not be empty".to_string());
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging(DEFAULT_DIRECTIVE);

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let raw = load_raw_config(&cli.config)?;
    let transport = HttpTransport::with_timeout(Duration::from_secs(cli.timeout))?;
    let client = TelemetryClient::with_transport(&raw, transport)?;

    let metadata: Metadata = cli.meta.into_iter().collect();

    let outcome = match cli.command {
        Commands::Message { text } => client.capture_message(text, metadata).await?,
        Commands::Exception { message, stack } => {
            let mut error = CapturedError::new(message);
            error.stack = stack;
            client.capture_exception(error, metadata).await?
        }
    };

    match outcome {
        CaptureOutcome::Delivered(body) => println!("{}", serde_json::to_string_pretty(&body)?),
        CaptureOutcome::Disabled => println!("disabled"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meta_after_message_subcommand() {
        let cli = Cli::try_parse_from([
            "orbitrace-cli", "--config", "c.toml", "message", "hi", "--meta", "a=b",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("c.toml"));
        assert_eq!(cli.meta, vec![("a".to_string(), json!("b"))]);
        assert!(matches!(cli.command, Commands::Message { ref text } if text == "hi"));
    }

    #[test]
    fn test_meta_before_subcommand() {
        let cli = Cli::try_parse_from([
            "orbitrace-cli", "-c", "c.toml", "-m", "a=b", "message", "hi",
        ])
        .unwrap();
        assert_eq!(cli.meta.len(), 1);
        assert_eq!(cli.timeout, 10);
    }

    #[test]
    fn test_exception_with_stack_and_meta() {
        let cli = Cli::try_parse_from([
            "orbitrace-cli",
            "--config",
            "c.json",
            "--timeout",
            "3",
            "exception",
            "boom",
            "--stack",
            "at main",
            "--meta",
            "user=7",
            "--meta",
            "region=eu",
        ])
        .unwrap();
        assert_eq!(cli.timeout, 3);
        assert_eq!(
            cli.meta,
            vec![
                ("user".to_string(), json!(7)),
                ("region".to_string(), json!("eu")),
            ]
        );
        match cli.command {
            Commands::Exception { message, stack } => {
                assert_eq!(message, "boom");
                assert_eq!(stack.as_deref(), Some("at main"));
            }
            other => panic!("expected exception, got {:?}", other),
        }
    }

    #[test]
    fn test_config_is_required() {
        assert!(Cli::try_parse_from(["orbitrace-cli", "message", "hi"]).is_err());
    }

    #[test]
    fn test_parse_meta_values() {
        assert_eq!(parse_meta("a=b").unwrap(), ("a".to_string(), json!("b")));
        assert_eq!(parse_meta("n=42").unwrap(), ("n".to_string(), json!(42)));
        assert_eq!(parse_meta("ok=true").unwrap(), ("ok".to_string(), json!(true)));
        assert_eq!(
            parse_meta(r#"tags=["x","y"]"#).unwrap(),
            ("tags".to_string(), json!(["x", "y"]))
        );
        assert_eq!(parse_meta("q=a=b").unwrap(), ("q".to_string(), json!("a=b")));
        assert_eq!(parse_meta("e=").unwrap(), ("e".to_string(), json!("")));
    }

    #[test]
    fn test_parse_meta_rejects_bad_input() {
        assert!(parse_meta("=value").is_err());
        assert!(parse_meta("novalue").is_err());
    }
}
