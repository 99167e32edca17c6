//! Logging setup for cssref.
//!
//! The library crates log through `tracing`. Nothing is printed until a
//! subscriber is installed; the `cssref` binary does that with [`init`].
//!
//! Filtering follows `EnvFilter` syntax and is read from `CSSREF_LOG`:
//!
//! ```text
//! CSSREF_LOG=cssref_catalog=debug,cssref_highlight::classify=trace cssref show gap
//! ```

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const ENV_VAR: &str = "CSSREF_LOG";

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Declaration classification (fallbacks).
    pub const CLASSIFY: &str = "cssref_highlight::classify";
    /// Overlap resolution (dropped candidates).
    pub const RESOLVE: &str = "cssref_highlight::resolve";
    /// Catalog loading.
    pub const CATALOG: &str = "cssref_catalog::load";
    /// Catalog search.
    pub const SEARCH: &str = "cssref_catalog::search";
    /// Configuration loading.
    pub const CONFIG: &str = "cssref::config";
    /// Terminal and HTML rendering.
    pub const RENDER: &str = "cssref::render";
    /// Command dispatch.
    pub const CLI: &str = "cssref::cli";
}

/// Build the filter: `directives` if given, else `debug` when verbose and
/// `warn` otherwise.
pub fn build_filter(directives: Option<&str>, verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "warn" };
    match directives {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)
            .unwrap_or_else(|err| {
                eprintln!("ignoring invalid {ENV_VAR} ({err}), using '{default}'");
                EnvFilter::new(default)
            }),
        _ => EnvFilter::new(default),
    }
}

/// Install a stderr subscriber filtered by `CSSREF_LOG`.
///
/// Does nothing if a global subscriber is already set.
pub fn init(verbose: bool) {
    let directives = std::env::var(ENV_VAR).ok();
    let filter = build_filter(directives.as_deref(), verbose);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_levels() {
        assert_eq!(build_filter(None, false).to_string(), "warn");
        assert_eq!(build_filter(None, true).to_string(), "debug");
        assert_eq!(build_filter(Some("  "), false).to_string(), "warn");
    }

    #[test]
    fn directives_win_over_verbosity() {
        let filter = build_filter(Some("cssref_catalog=trace"), true);
        assert_eq!(filter.to_string(), "cssref_catalog=trace");
    }

    #[test]
    fn targets_are_crate_paths() {
        for target in [targets::CLASSIFY, targets::RESOLVE, targets::CATALOG, targets::SEARCH] {
            assert!(target.starts_with("cssref_"));
        }
    }
}
