//! Input resolution for address bar
//!
//! 1. Empty input → nothing to load
//! 2. Input starting with `http://`/`https://`, or with an `about:`,
//!    `file:` or `data:` URL → load as typed
//! 3. Anything else → prefix the default scheme

use url::Url;

/// Prefix added to input that has no scheme of its own
pub const DEFAULT_SCHEME: &str = "https://";

/// Prefixes that mark input as a web address already
const WEB_PREFIXES: &[&str] = &["http://", "https://"];
/// Non-web schemes that are loaded exactly as typed
const LOCAL_SCHEMES: &[&str] = &["about", "file", "data"];

#[derive(Debug, Clone)]
pub struct InputResolver {
    default_scheme: String,
}

impl InputResolver {
    pub fn new() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
        }
    }

    pub fn with_default_scheme(scheme: impl Into<String>) -> Self {
        Self {
            default_scheme: scheme.into(),
        }
    }

    pub fn default_scheme(&self) -> &str {
        &self.default_scheme
    }

    /// Resolve address bar text into the URL to load
    pub fn resolve(&self, input: &str) -> Option<String> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if Self::has_web_prefix(input) || Self::has_local_scheme(input) {
            return Some(input.to_string());
        }

        let url = format!("{}{}", self.default_scheme, input);
        tracing::debug!(input = %input, url = %url, "Added default scheme");
        Some(url)
    }

    /// Checked on the text alone: a malformed `http://` address is still
    /// explicit and must not get a second scheme.
    fn has_web_prefix(input: &str) -> bool {
        WEB_PREFIXES.iter().any(|prefix| {
            input
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    }

    /// `localhost:8080` parses with scheme `localhost`, so only the listed
    /// schemes count as explicit.
    fn has_local_scheme(input: &str) -> bool {
        Url::parse(input)
            .map(|url| LOCAL_SCHEMES.contains(&url.scheme()))
            .unwrap_or(false)
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let resolver = InputResolver::new();

        // Full URL
        assert_eq!(
            resolver.resolve("https://example.com").as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            resolver.resolve("http://example.com/a?b=c").as_deref(),
            Some("http://example.com/a?b=c")
        );

        // Domain only
        assert_eq!(
            resolver.resolve("example.com").as_deref(),
            Some("https://example.com")
        );

        // localhost
        assert_eq!(
            resolver.resolve("localhost:8080").as_deref(),
            Some("https://localhost:8080")
        );
    }

    #[test]
    fn test_resolve_trims() {
        let resolver = InputResolver::new();
        assert_eq!(
            resolver.resolve("  example.com/path \n").as_deref(),
            Some("https://example.com/path")
        );
    }

    #[test]
    fn test_resolve_empty() {
        let resolver = InputResolver::new();
        assert!(resolver.resolve("").is_none());
        assert!(resolver.resolve("   ").is_none());
    }

    #[test]
    fn test_special_schemes_pass_through() {
        let resolver = InputResolver::new();
        assert_eq!(resolver.resolve("about:blank").as_deref(), Some("about:blank"));
        assert_eq!(
            resolver.resolve("file:///tmp/index.html").as_deref(),
            Some("file:///tmp/index.html")
        );
        assert_eq!(
            resolver.resolve("HTTPS://EXAMPLE.COM").as_deref(),
            Some("HTTPS://EXAMPLE.COM")
        );
    }

    #[test]
    fn test_malformed_web_address_keeps_scheme() {
        let resolver = InputResolver::new();
        assert_eq!(
            resolver.resolve("http://exa mple.com").as_deref(),
            Some("http://exa mple.com")
        );
        assert_eq!(
            resolver.resolve("https://example.com:99999").as_deref(),
            Some("https://example.com:99999")
        );
        assert_eq!(resolver.resolve("https://").as_deref(), Some("https://"));
        assert_eq!(resolver.resolve("Http://x").as_deref(), Some("Http://x"));
    }

    #[test]
    fn test_custom_default_scheme() {
        let resolver = InputResolver::with_default_scheme("http://");
        assert_eq!(
            resolver.resolve("example.com").as_deref(),
            Some("http://example.com")
        );
    }
}
