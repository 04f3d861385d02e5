//! Input sanitization utilities for security
//!
//! Package names are forwarded to an external package manager; validation
//! here prevents command injection and path traversal.

use crate::error::{Result, UndepError};
use regex::Regex;
use std::sync::LazyLock;

/// Safe characters for npm-style package names.
/// Allows: alphanumeric, dash, underscore, dot, plus, at sign, slash (for scoped packages)
static SAFE_PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9@._+/-]+$").expect("Invalid regex pattern"));

/// Characters that could be dangerous in shell contexts
static SHELL_DANGEROUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[;`$(){}|&<>\\'"\n\r\t]"#).expect("Invalid regex pattern"));

/// Validate a package name is safe to hand to a subprocess.
///
/// # Security
/// Package names like `foo; rm -rf /` will be rejected.
pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(UndepError::InvalidPackageName(
            "package name cannot be empty".to_string(),
        ));
    }

    if name.len() > 256 {
        // Truncate on a char boundary; the name may be multibyte.
        let preview: String = name.chars().take(50).collect();
        return Err(UndepError::InvalidPackageName(format!(
            "package name too long (max 256 chars): {preview}"
        )));
    }

    // Check for dangerous shell characters
    if SHELL_DANGEROUS.is_match(name) {
        return Err(UndepError::InvalidPackageName(format!(
            "package name contains unsafe characters: {name}"
        )));
    }

    // Validate against safe pattern
    if !SAFE_PACKAGE_NAME.is_match(name) {
        return Err(UndepError::InvalidPackageName(format!(
            "package name contains invalid characters: {name}"
        )));
    }

    // Prevent path traversal
    if name.contains("..") {
        return Err(UndepError::InvalidPackageName(format!(
            "package name cannot contain path traversal: {name}"
        )));
    }

    Ok(())
}

/// Validate a whole list, failing on the first offender.
pub fn validate_package_names(names: &[String]) -> Result<()> {
    for name in names {
        validate_package_name(name)?;
    }
    Ok(())
}
