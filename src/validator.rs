use crate::error::{BumpCheckError, Result};
use crate::ui;
use crate::version::{BumpKind, Version};

/// Version components in the order they are checked, most significant first.
const BUMP_ORDER: [BumpKind; 3] = [BumpKind::Major, BumpKind::Minor, BumpKind::Patch];

/// Validates that `next` is a correct single-step bump of `previous` and
/// classifies which component was bumped.
///
/// A bump is valid when exactly one component is incremented by one and every
/// less-significant component resets to zero. Both arguments must already be
/// in plain `major.minor.patch` form; any `v` prefix is stripped by the
/// caller before validation.
///
/// Progress diagnostics are printed while comparing; they never affect the
/// returned classification.
///
/// # Arguments
/// * `previous` - Last released version (e.g., "1.2.3")
/// * `next` - Proposed next version (e.g., "1.3.0")
///
/// # Returns
/// * `Ok(BumpKind)` - The component that was incremented
/// * `Err(InvalidFormat)` - Either string is not three dot-separated integers
/// * `Err(NoChange)` - The versions are identical, textually or numerically
/// * `Err(InvalidBump)` - The first differing component was not incremented
///   by exactly one, or a lower component was not reset to zero
pub fn validate_bump(previous: &str, next: &str) -> Result<BumpKind> {
    let previous_version = Version::parse(previous)?;
    let next_version = Version::parse(next)?;

    if previous == next {
        return Err(BumpCheckError::no_change(format!(
            "previous and next are both '{}'",
            previous
        )));
    }

    ui::display_comparison(previous, next);

    let previous_parts = previous_version.components();
    let next_parts = next_version.components();

    for (idx, kind) in BUMP_ORDER.iter().enumerate() {
        if next_parts[idx] != previous_parts[idx] {
            // First differing component; everything above idx is unchanged
            let incremented_once = previous_parts[idx].checked_add(1) == Some(next_parts[idx]);
            let lower_components_reset = next_parts[idx + 1..].iter().all(|&part| part == 0);

            if incremented_once && lower_components_reset {
                ui::display_bump(*kind);
                return Ok(*kind);
            }

            if !incremented_once {
                return Err(BumpCheckError::invalid_bump(format!(
                    "{} component changed from {} to {} - expected an increment of exactly one",
                    kind, previous_parts[idx], next_parts[idx]
                )));
            }

            return Err(BumpCheckError::invalid_bump(format!(
                "components below {} must reset to zero, got '{}'",
                kind, next
            )));
        }
    }

    // Different strings, identical components (e.g. "1.02.0" vs "1.2.0").
    // Numerically nothing was bumped, so this is a hard failure.
    Err(BumpCheckError::no_change(format!(
        "'{}' and '{}' contain the same version components",
        previous, next
    )))
}
