use crate::error::{BumpCheckError, Result};
use std::fmt;

/// Represents a semantic version with major, minor, and patch components.
///
/// Follows the strict, suffix-free form of semantic versioning
/// (major.minor.patch): no pre-release or build metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Creates a new Version with the specified major, minor, and patch components.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parses a version from a plain `major.minor.patch` string.
    ///
    /// The string must consist of exactly three dot-separated segments, each
    /// made of one or more ASCII digits and nothing else: no `v` prefix, no
    /// pre-release or build suffix, no signs, no whitespace. Leading zeros
    /// are accepted, so `"1.02.0"` parses to the same components as `"1.2.0"`.
    ///
    /// # Arguments
    /// * `text` - Version string to parse (e.g., "1.2.3")
    ///
    /// # Returns
    /// * `Ok(Version)` - Successfully parsed version
    /// * `Err(InvalidFormat)` - Wrong segment count, empty or non-digit
    ///   segments, or a component too large to represent
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(Version::parse("1.2.3").unwrap(), Version::new(1, 2, 3));
    /// assert!(Version::parse("v1.2.3").is_err()); // prefix is the caller's job
    /// assert!(Version::parse("1.2").is_err());    // too few components
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(BumpCheckError::invalid_format(format!(
                "'{}' - expected X.Y.Z",
                text
            )));
        }

        // u32 parsing alone would accept a leading '+', so require digits
        for part in &parts {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(BumpCheckError::invalid_format(format!(
                    "'{}' - expected X.Y.Z",
                    text
                )));
            }
        }

        let major = parts[0].parse::<u32>().map_err(|_| {
            BumpCheckError::invalid_format(format!("major component '{}' out of range", parts[0]))
        })?;
        let minor = parts[1].parse::<u32>().map_err(|_| {
            BumpCheckError::invalid_format(format!("minor component '{}' out of range", parts[1]))
        })?;
        let patch = parts[2].parse::<u32>().map_err(|_| {
            BumpCheckError::invalid_format(format!("patch component '{}' out of range", parts[2]))
        })?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Version components in order of significance, major first.
    pub fn components(&self) -> [u32; 3] {
        [self.major, self.minor, self.patch]
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Identifies which version component a bump incremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    /// Get the bump kind as a lowercase string
    pub fn name(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
