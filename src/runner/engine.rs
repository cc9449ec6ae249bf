//! The platform's own engine: executes commands against the `regex` crate.
//!
//! # Responsibilities
//! - Map command options to `RegexBuilder` flags
//! - Report match spans, capture groups, and replacement output per input
//! - Surface pattern compile errors inside the payload, never as HTTP errors
//!
//! # Design Decisions
//! - Unknown options are ignored (clients may send flags for other engines)
//! - Execution is synchronous; the trait's future exists for runners that
//!   cross a process or network boundary

use std::future::Future;
use std::pin::Pin;

use regex::RegexBuilder;
use serde_json::{json, Value};

use crate::runner::{TestCommand, TestResult, TestRunner};

/// Runs test commands against Rust's `regex` crate.
pub struct RustRunner;

impl TestRunner for RustRunner {
    fn run<'a>(
        &'a self,
        command: &'a TestCommand,
    ) -> Pin<Box<dyn Future<Output = TestResult> + Send + 'a>> {
        Box::pin(async move { self.execute(command) })
    }
}

impl RustRunner {
    fn execute(&self, command: &TestCommand) -> TestResult {
        let mut builder = RegexBuilder::new(&command.regex);
        for option in &command.options {
            match option.as_str() {
                "i" => builder.case_insensitive(true),
                "m" => builder.multi_line(true),
                "s" => builder.dot_matches_new_line(true),
                "x" => builder.ignore_whitespace(true),
                "U" => builder.swap_greed(true),
                _ => &mut builder,
            };
        }

        let regex = match builder.build() {
            Ok(regex) => regex,
            Err(e) => {
                return json!({
                    "success": false,
                    "message": e.to_string(),
                });
            }
        };

        let results: Vec<Value> = command
            .inputs
            .iter()
            .map(|input| {
                let matches: Vec<Value> = regex
                    .captures_iter(input)
                    .filter_map(|caps| {
                        let whole = caps.get(0)?;
                        let groups: Vec<Value> = (1..caps.len())
                            .map(|i| match caps.get(i) {
                                Some(group) => json!(group.as_str()),
                                None => Value::Null,
                            })
                            .collect();
                        Some(json!({
                            "start": whole.start(),
                            "end": whole.end(),
                            "text": whole.as_str(),
                            "groups": groups,
                        }))
                    })
                    .collect();

                let mut entry = json!({ "input": input, "matches": matches });
                if !command.replacement.is_empty() {
                    entry["replacement"] =
                        json!(regex.replace_all(input, command.replacement.as_str()));
                }
                entry
            })
            .collect();

        json!({
            "success": true,
            "engine": command.engine,
            "regex": command.regex,
            "results": results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(regex: &str, options: &[&str], inputs: &[&str]) -> TestCommand {
        TestCommand {
            regex: regex.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..TestCommand::default()
        }
    }

    #[tokio::test]
    async fn test_reports_match_spans_and_groups() {
        let result = RustRunner.run(&command(r"(a)(b)?", &[], &["ab a"])).await;
        assert_eq!(result["success"], true);

        let matches = &result["results"][0]["matches"];
        assert_eq!(matches[0]["start"], 0);
        assert_eq!(matches[0]["end"], 2);
        assert_eq!(matches[0]["text"], "ab");
        assert_eq!(matches[0]["groups"][0], "a");
        assert_eq!(matches[0]["groups"][1], "b");
        // second match: optional group did not participate
        assert_eq!(matches[1]["text"], "a");
        assert_eq!(matches[1]["groups"][1], Value::Null);
    }

    #[tokio::test]
    async fn test_case_insensitive_option() {
        let result = RustRunner.run(&command("abc", &["i"], &["ABC"])).await;
        assert_eq!(result["results"][0]["matches"][0]["text"], "ABC");
    }

    #[tokio::test]
    async fn test_unknown_options_are_ignored() {
        let result = RustRunner
            .run(&command("a", &["g", "sticky"], &["a"]))
            .await;
        assert_eq!(result["success"], true);
    }

    #[tokio::test]
    async fn test_replacement_applied_when_present() {
        let mut cmd = command(r"\d+", &[], &["a1b22"]);
        cmd.replacement = "#".to_string();
        let result = RustRunner.run(&cmd).await;
        assert_eq!(result["results"][0]["replacement"], "a#b#");
    }

    #[tokio::test]
    async fn test_compile_error_stays_in_payload() {
        let result = RustRunner.run(&command("(unclosed", &[], &["x"])).await;
        assert_eq!(result["success"], false);
        assert!(result["message"].as_str().unwrap().contains("regex"));
    }
}
