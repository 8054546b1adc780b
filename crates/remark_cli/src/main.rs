//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `remark_core` linkage.
//! - Run one description edit against the in-memory store and print the
//!   resulting flash and description.
//!
//! Usage: `remark_cli [old] [new] [--reject <reason>]`
//! Set `REMARK_LOG_DIR` to an absolute path to enable file logging.

use futures::executor::block_on;
use log::debug;
use remark_core::{
    Comment, CommentRecord, DescriptionEditor, EditEvent, FlashMessage, InMemoryCommentStore,
    NotifyTarget,
};
use std::process::ExitCode;

/// Prints flashes to stdout in their JSON form.
struct StdoutTarget;

impl NotifyTarget for StdoutTarget {
    fn notify(&self, channel: &str, payload: &FlashMessage) {
        println!("flash channel={channel} payload={}", payload.to_json());
    }
}

struct DemoArgs {
    old_value: String,
    new_value: String,
    reject_reason: Option<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<DemoArgs, String> {
    let mut positional = Vec::new();
    let mut reject_reason = None;
    let mut args = args;
    while let Some(arg) = args.next() {
        if arg == "--reject" {
            let reason = args
                .next()
                .ok_or_else(|| "--reject requires a reason".to_string())?;
            reject_reason = Some(reason);
        } else {
            positional.push(arg);
        }
    }
    if positional.len() > 2 {
        return Err(format!("unexpected argument `{}`", positional[2]));
    }
    let mut positional = positional.into_iter();
    Ok(DemoArgs {
        old_value: positional
            .next()
            .unwrap_or_else(|| "old description".to_string()),
        new_value: positional
            .next()
            .unwrap_or_else(|| "new description".to_string()),
        reject_reason,
    })
}

fn main() -> ExitCode {
    println!("remark_core ping={}", remark_core::ping());
    println!("remark_core version={}", remark_core::core_version());

    if let Ok(log_dir) = std::env::var("REMARK_LOG_DIR") {
        if let Err(err) = remark_core::init_logging(remark_core::default_log_level(), &log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("usage: remark_cli [old] [new] [--reject <reason>]");
            return ExitCode::from(2);
        }
    };

    let store = InMemoryCommentStore::new();
    let comment = Comment::new(args.old_value.clone());
    if let Err(err) = store.insert(comment.clone()) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    if let Some(reason) = args.reject_reason {
        store.reject_saves(reason);
    }

    let record = CommentRecord::new(comment, store);
    debug!("event=cli_edit module=cli comment_id={}", record.id());
    let editor = DescriptionEditor::new();
    let completion = block_on(editor.update_description(
        &record,
        &StdoutTarget,
        EditEvent::new(args.old_value, args.new_value),
    ));
    if let Some(refresh) = completion.refresh {
        if let Err(err) = block_on(refresh) {
            eprintln!("warning: refresh failed: {err}");
        }
    }

    println!("outcome={:?}", completion.outcome);
    println!("display_name={}", record.display_name());
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::parse_args;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parse_args_defaults_to_demo_values() {
        let parsed = parse_args(args(&[])).unwrap();
        assert_eq!(parsed.old_value, "old description");
        assert_eq!(parsed.new_value, "new description");
        assert_eq!(parsed.reject_reason, None);
    }

    #[test]
    fn parse_args_reads_reject_reason() {
        let parsed = parse_args(args(&["a", "--reject", "Server error", "b"])).unwrap();
        assert_eq!(parsed.old_value, "a");
        assert_eq!(parsed.new_value, "b");
        assert_eq!(parsed.reject_reason.as_deref(), Some("Server error"));
    }

    #[test]
    fn parse_args_rejects_missing_reason_and_extras() {
        assert!(parse_args(args(&["--reject"])).is_err());
        assert!(parse_args(args(&["a", "b", "c"])).is_err());
    }
}
