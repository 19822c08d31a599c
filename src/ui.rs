//! Display helpers for pipeline diagnostics.
//!
//! Everything printed here is human-readable progress information; none of it
//! affects the validation result or the output sink.

use crate::version::BumpKind;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Announce which two versions are being compared.
pub fn display_comparison(previous: &str, next: &str) {
    display_status(&format!(
        "Comparing next version {} with previous version {}",
        next, previous
    ));
}

/// Report the detected bump kind.
pub fn display_bump(kind: BumpKind) {
    display_success(&format!("{} version bump", kind));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_success() {
        // Visual verification test - output is printed to stdout
        display_success("test success");
    }

    #[test]
    fn test_display_status() {
        // Visual verification test - output is printed to stdout
        display_status("test status");
    }

    #[test]
    fn test_display_bump() {
        display_bump(BumpKind::Patch);
    }
}
