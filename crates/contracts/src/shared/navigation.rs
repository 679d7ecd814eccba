//! Logical page names and their navigable paths.
//!
//! The page set and base prefix are injected into the shell at startup
//! rather than read from a module-level constant, so tests can run the
//! chrome against an alternate page set.

/// Logical pages of the site, in navigation order.
pub const DEFAULT_PAGES: [&str; 5] = ["Home", "About", "Projects", "Blog", "Contact"];

/// Site-wide navigation configuration, provided via context at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub base_prefix: String,
    pub pages: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new("/", DEFAULT_PAGES.iter().map(|p| p.to_string()).collect())
    }
}

impl SiteConfig {
    pub fn new(base_prefix: impl Into<String>, pages: Vec<String>) -> Self {
        Self {
            base_prefix: base_prefix.into(),
            pages,
        }
    }

    /// Navigable path for a logical page name: base prefix + lowercased name.
    ///
    /// Callers pass logical names ("Projects"), never full paths; an already
    /// prefixed path would be prefixed again.
    pub fn resolve(&self, page: &str) -> String {
        format!("{}{}", self.base_prefix, page.to_lowercase())
    }

    /// Whether `path` is the resolved path of `page`. Drives the active
    /// link highlight in the navigation bar.
    pub fn is_active(&self, page: &str, path: &str) -> bool {
        path == self.resolve(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_lowercases_and_prefixes() {
        let config = SiteConfig::default();
        assert_eq!(config.resolve("Projects"), "/projects");
        assert_eq!(config.resolve("HOME"), "/home");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let config = SiteConfig::default();
        assert_eq!(config.resolve("Blog"), config.resolve("Blog"));
    }

    #[test]
    fn test_resolve_tolerates_empty_input() {
        let config = SiteConfig::default();
        assert_eq!(config.resolve(""), "/");
    }

    #[test]
    fn test_resolve_with_custom_prefix() {
        let config = SiteConfig::new("/folio/", vec!["Home".to_string()]);
        assert_eq!(config.resolve("Home"), "/folio/home");
    }

    #[test]
    fn test_is_active_matches_resolved_path_only() {
        let config = SiteConfig::default();
        assert!(config.is_active("About", "/about"));
        assert!(!config.is_active("About", "/about/"));
        assert!(!config.is_active("About", "/blog"));
    }

    #[test]
    fn test_default_page_set() {
        let config = SiteConfig::default();
        assert_eq!(config.pages.len(), 5);
        assert_eq!(config.pages[0], "Home");
        assert_eq!(config.pages[4], "Contact");
    }
}
