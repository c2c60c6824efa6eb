/// Validates an engine module name.
///
/// Checks:
/// - Non-empty
/// - Characters are ASCII alphanumeric (engine module names carry no
///   separators, spaces, or punctuation)
pub fn validate_module_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}
