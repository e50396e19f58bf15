//! Normalization of free-form location dimensions.

/// CSS units stripped from dimensions; `rem` is checked before `em`.
const UNITS: &[&str] = &["rem", "px", "pt", "em"];

/// Strips a trailing CSS unit and surrounding whitespace.
///
/// Percentages are kept as-is. An empty result means "not set".
///
/// ```ignore
/// assert_eq!(normalize_dimension("300px").as_deref(), Some("300"));
/// assert_eq!(normalize_dimension("100%").as_deref(), Some("100%"));
/// ```
pub fn normalize_dimension(input: &str) -> Option<String> {
    let mut value = input.trim();

    for unit in UNITS {
        if let Some(stripped) = value.strip_suffix(unit) {
            value = stripped.trim_end();
            break;
        }
    }

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_units() {
        assert_eq!(normalize_dimension("300px").as_deref(), Some("300"));
        assert_eq!(normalize_dimension("12pt").as_deref(), Some("12"));
        assert_eq!(normalize_dimension("20em").as_deref(), Some("20"));
        assert_eq!(normalize_dimension("2rem").as_deref(), Some("2"));
        assert_eq!(normalize_dimension(" 250 px ").as_deref(), Some("250"));
    }

    #[test]
    fn test_keeps_plain_and_percent() {
        assert_eq!(normalize_dimension("728").as_deref(), Some("728"));
        assert_eq!(normalize_dimension("100%").as_deref(), Some("100%"));
    }

    #[test]
    fn test_empty_is_none() {
        assert!(normalize_dimension("").is_none());
        assert!(normalize_dimension("  ").is_none());
        assert!(normalize_dimension("px").is_none());
    }
}
