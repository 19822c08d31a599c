//! Check workflow orchestration logic
//!
//! Connects the version arguments, the bump validator, and the result sink.
//! This module is decoupled from clap so the workflow can be called
//! programmatically without depending on argument parsing.

use crate::config::Config;
use crate::error::Result;
use crate::sink::ResultSink;
use crate::ui;
use crate::validator;
use crate::version::BumpKind;

/// Arguments for the check workflow
///
/// Mirrors the CLI args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckWorkflowArgs {
    /// Previously released version, optionally `v`-prefixed
    pub previous: String,

    /// Proposed next version, optionally `v`-prefixed
    pub next: String,

    /// Validate and report only - do not write to the sink
    pub dry_run: bool,
}

/// Result of a successful check workflow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckOutcome {
    /// Classification of the validated bump
    pub bump: BumpKind,

    /// Whether the result line was written to the sink
    pub recorded: bool,
}

/// Strips a single leading lowercase `v` from a version argument.
///
/// Only a prefix match is stripped, never occurrences elsewhere in the
/// string: `"vv1.2.3"` becomes `"v1.2.3"`, and `"V1.2.3"` is left untouched.
pub fn strip_v_prefix(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Main check workflow
///
/// Orchestrates the entire validation:
/// 1. Strip the optional `v` prefix from both versions
/// 2. Validate the bump and classify it
/// 3. Append `<key>=<kind>` to the result sink (skipped on dry run)
///
/// The sink is only touched after validation has succeeded; on failure
/// nothing is written.
///
/// # Arguments
///
/// * `args` - Workflow arguments (versions, dry_run)
/// * `config` - Output sink configuration
/// * `sink` - Destination for the classification result
///
/// # Returns
///
/// Result containing the bump classification or the validation error
pub fn run_check_workflow(
    args: &CheckWorkflowArgs,
    config: &Config,
    sink: &dyn ResultSink,
) -> Result<CheckOutcome> {
    let previous = strip_v_prefix(&args.previous);
    let next = strip_v_prefix(&args.next);

    let bump = validator::validate_bump(previous, next)?;

    if args.dry_run {
        ui::display_status(&format!(
            "Dry run: skipping {}={} write",
            config.output.key,
            bump.name()
        ));
        return Ok(CheckOutcome {
            bump,
            recorded: false,
        });
    }

    sink.append(&config.output.key, bump.name())?;

    Ok(CheckOutcome {
        bump,
        recorded: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MockSink;

    fn check_args(previous: &str, next: &str) -> CheckWorkflowArgs {
        CheckWorkflowArgs {
            previous: previous.to_string(),
            next: next.to_string(),
            dry_run: false,
        }
    }

    #[test]
    fn test_workflow_records_bump() {
        let sink = MockSink::new();
        let outcome =
            run_check_workflow(&check_args("1.2.3", "2.0.0"), &Config::default(), &sink).unwrap();

        assert_eq!(outcome.bump, BumpKind::Major);
        assert!(outcome.recorded);
        assert_eq!(
            sink.records(),
            vec![("bump_type".to_string(), "major".to_string())]
        );
    }

    #[test]
    fn test_workflow_strips_v_prefix() {
        let sink = MockSink::new();
        let outcome =
            run_check_workflow(&check_args("v1.2.3", "v1.3.0"), &Config::default(), &sink).unwrap();

        assert_eq!(outcome.bump, BumpKind::Minor);
        assert_eq!(
            sink.records(),
            vec![("bump_type".to_string(), "minor".to_string())]
        );
    }

    #[test]
    fn test_workflow_dry_run_skips_sink() {
        let sink = MockSink::new();
        let mut args = check_args("1.2.3", "1.2.4");
        args.dry_run = true;

        let outcome = run_check_workflow(&args, &Config::default(), &sink).unwrap();

        assert_eq!(outcome.bump, BumpKind::Patch);
        assert!(!outcome.recorded);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_workflow_failure_leaves_sink_untouched() {
        let sink = MockSink::new();
        let err =
            run_check_workflow(&check_args("1.2.3", "1.4.0"), &Config::default(), &sink)
                .unwrap_err();

        assert!(err.to_string().contains("Invalid version bump"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_workflow_custom_output_key() {
        let sink = MockSink::new();
        let mut config = Config::default();
        config.output.key = "release_kind".to_string();

        run_check_workflow(&check_args("0.1.0", "0.2.0"), &config, &sink).unwrap();

        assert_eq!(
            sink.records(),
            vec![("release_kind".to_string(), "minor".to_string())]
        );
    }

    #[test]
    fn test_workflow_rejects_uppercase_prefix() {
        let sink = MockSink::new();
        let err =
            run_check_workflow(&check_args("V1.2.3", "V1.3.0"), &Config::default(), &sink)
                .unwrap_err();

        assert!(err.to_string().contains("Invalid version format"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_strip_v_prefix() {
        assert_eq!(strip_v_prefix("v1.2.3"), "1.2.3");
        assert_eq!(strip_v_prefix("1.2.3"), "1.2.3");
        assert_eq!(strip_v_prefix("V1.2.3"), "V1.2.3");
        assert_eq!(strip_v_prefix("vv1.2.3"), "v1.2.3");
    }
}
