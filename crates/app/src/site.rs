use shared_types::SiteConfig;
use std::sync::OnceLock;

static SITE: OnceLock<SiteConfig> = OnceLock::new();

/// Page copy bundled at build time; edit `site.toml` to change it.
const SITE_TOML: &str = include_str!("../site.toml");

/// Parse the bundled `site.toml` once. A broken file logs a warning and
/// yields the stock copy.
pub fn site_config() -> &'static SiteConfig {
    SITE.get_or_init(|| {
        let config = SiteConfig::from_toml_or_default(SITE_TOML);
        tracing::debug!(brand = %config.brand, "site config loaded");
        config
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_stock_copy() {
        assert_eq!(site_config(), &SiteConfig::default());
    }
}
