//! Input validation for keys and environment assignments.

/// Validate a dotenv key name.
///
/// Keys must be valid environment variable names:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Errors
///
/// Returns a description of the first violation. The description never
/// includes the key's value.
pub fn validate_key(key: &str) -> Result<(), String> {
    let Some(first_char) = key.chars().next() else {
        return Err("key cannot be empty".to_string());
    };

    if first_char.is_ascii_digit() {
        return Err("key cannot start with a digit".to_string());
    }

    for (i, ch) in key.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' && ch != '.' {
            return Err(format!(
                "invalid character '{}' at position {} in key. Only A-Z, 0-9, '.' and underscore are allowed",
                ch.escape_default(),
                i + 1
            ));
        }
    }

    Ok(())
}

/// Validate a process environment assignment.
///
/// Rejects what the host cannot represent: empty names, names containing
/// `=` or NUL, and values containing NUL.
///
/// # Errors
///
/// Returns a description of the violation.
pub fn validate_assignment(name: &str, value: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".to_string());
    }
    if name.contains('=') {
        return Err("name cannot contain '='".to_string());
    }
    if name.contains('\0') {
        return Err("name cannot contain NUL".to_string());
    }
    if value.contains('\0') {
        return Err("value cannot contain NUL".to_string());
    }
    Ok(())
}
