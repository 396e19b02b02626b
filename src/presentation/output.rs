//! Warning and error rendering for the CLI

use serde_json::json;

use crate::config::ConfigWarning;
use crate::error::AssembleError;
use crate::ui::{ColoredText, Icons, TerminalCapabilities};

/// Print unknown-key warnings from the config file to stderr
pub fn print_config_warnings(warnings: &[ConfigWarning], caps: &TerminalCapabilities) {
    let icons = Icons::new(caps.supports_unicode);
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        let text = format!(
            "{} Unknown config key '{}' in {}",
            icons.warning, w.key, location
        );
        eprintln!("{}", ColoredText::warning(text).render(caps.supports_color));

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

/// JSON `error` event for a failed run
pub fn error_json(err: &anyhow::Error) -> serde_json::Value {
    let kind = err.downcast_ref::<AssembleError>().map(error_kind);
    let path = err
        .downcast_ref::<AssembleError>()
        .and_then(AssembleError::path)
        .map(|p| p.display().to_string());

    json!({
        "event": "error",
        "kind": kind.unwrap_or("other"),
        "message": format!("{:#}", err),
        "path": path,
    })
}

/// Report a fatal error: a JSON event on stdout, or a message on stderr
pub fn print_error(err: &anyhow::Error, json: bool, caps: &TerminalCapabilities) {
    if json {
        println!("{}", error_json(err));
        return;
    }

    let icons = Icons::new(caps.supports_unicode);
    let text = format!("{} {:#}", icons.error, err);
    eprintln!("{}", ColoredText::error(text).render(caps.supports_color));

    if let Some(hint) = err.downcast_ref::<AssembleError>().and_then(hint) {
        eprintln!("  {}", ColoredText::dim(hint).render(caps.supports_color));
    }
}

/// Exit status for a fatal error
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<AssembleError>()
        .map(AssembleError::exit_code)
        .unwrap_or(1)
}

fn error_kind(err: &AssembleError) -> &'static str {
    match err {
        AssembleError::UnsupportedPlatform { .. } => "unsupported_platform",
        AssembleError::BuildFailed { .. } => "build_failed",
        AssembleError::CommandSpawn { .. } => "command_spawn",
        AssembleError::Io { .. } => "io",
        AssembleError::Config { .. } => "config",
    }
}

fn hint(err: &AssembleError) -> Option<String> {
    match err {
        AssembleError::CommandSpawn { command, .. } => {
            let program = command.split_whitespace().next().unwrap_or(command);
            Some(format!(
                "Is '{}' installed and on PATH? Set REA_BUILD_TOOL or [build] tool to override.",
                program
            ))
        }
        AssembleError::BuildFailed { .. } => {
            Some("The engine build directory was removed; fix the build and run again.".into())
        }
        _ => None,
    }
}
