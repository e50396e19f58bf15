//! Destination link validation for ads.
//!
//! A link that fails validation is never stored; callers skip the write and
//! keep whatever link the ad already had.

use url::Url;

/// Reasons a destination link is rejected.
#[derive(Debug, thiserror::Error)]
pub enum LinkValidationError {
    #[error("Link is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS links are allowed")]
    UnsupportedProtocol,

    #[error("Link has no host")]
    MissingHost,
}

/// Validates a destination link and returns its canonical form.
///
/// # Rules
///
/// 1. Surrounding whitespace is ignored
/// 2. Only `http` and `https` schemes are accepted
/// 3. A host is required
///
/// Rejects script-capable schemes such as `javascript:` and `data:` since the
/// link ends up in an `href` served to visitors.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     validate_link(" HTTPS://Shop.Example.com/sale ").unwrap(),
///     "https://shop.example.com/sale"
/// );
/// assert!(validate_link("javascript:alert(1)").is_err());
/// ```
pub fn validate_link(input: &str) -> Result<String, LinkValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LinkValidationError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|e| LinkValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(LinkValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(LinkValidationError::MissingHost);
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_https_link() {
        let result = validate_link("https://example.com/landing?utm_source=ad");
        assert_eq!(result.unwrap(), "https://example.com/landing?utm_source=ad");
    }

    #[test]
    fn test_host_is_lowercased_and_whitespace_trimmed() {
        let result = validate_link("  HTTP://EXAMPLE.COM/Path  ");
        assert_eq!(result.unwrap(), "http://example.com/Path");
    }

    #[test]
    fn test_fragment_is_kept() {
        let result = validate_link("https://example.com/page#offer");
        assert_eq!(result.unwrap(), "https://example.com/page#offer");
    }

    #[test]
    fn test_empty_link() {
        assert!(matches!(validate_link("   "), Err(LinkValidationError::Empty)));
    }

    #[test]
    fn test_not_a_url() {
        assert!(matches!(
            validate_link("not a url"),
            Err(LinkValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_script_schemes_rejected() {
        assert!(matches!(
            validate_link("javascript:alert(1)"),
            Err(LinkValidationError::UnsupportedProtocol)
        ));
        assert!(matches!(
            validate_link("data:text/html,<b>x</b>"),
            Err(LinkValidationError::UnsupportedProtocol)
        ));
        assert!(matches!(
            validate_link("ftp://example.com/file"),
            Err(LinkValidationError::UnsupportedProtocol)
        ));
    }
}
