use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// A link in the top navigation bar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Hero banner copy and background.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroConfig {
    #[serde(default = "default_headline")]
    pub headline: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_image_url")]
    pub image_url: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            headline: default_headline(),
            tagline: default_tagline(),
            image_url: default_image_url(),
        }
    }
}

/// Which icon a trust indicator or step renders with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Users,
    Trophy,
    Shield,
    Clock,
    Search,
    Calendar,
    Car,
}

/// A titled item with an icon, used for trust badges and "how it works" steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Highlight {
    pub icon: IconKind,
    pub title: String,
    pub description: String,
}

/// Marketing copy for the landing page.
///
/// Parsed from `site.toml`. Every field has a default matching the stock
/// Royal Transfer copy, so a partial file only overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default = "default_nav")]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default = "default_trust")]
    pub trust: Vec<Highlight>,
    #[serde(default = "default_steps")]
    pub steps: Vec<Highlight>,
    #[serde(default = "default_copyright_year")]
    pub copyright_year: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            nav: default_nav(),
            hero: HeroConfig::default(),
            trust: default_trust(),
            steps: default_steps(),
            copyright_year: default_copyright_year(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse `contents`, falling back to the stock copy on any error.
    pub fn from_toml_or_default(contents: &str) -> Self {
        Self::from_toml(contents).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "site config unreadable, using defaults");
            Self::default()
        })
    }

    /// Brand in title case, e.g. "Royal Transfer" for "ROYAL TRANSFER".
    pub fn display_brand(&self) -> String {
        title_case(&self.brand)
    }

    /// Footer line, e.g. "© 2024 Royal Transfer. All rights reserved."
    pub fn copyright_line(&self) -> String {
        format!(
            "\u{a9} {} {}. All rights reserved.",
            self.copyright_year,
            self.display_brand()
        )
    }
}

/// "ROYAL TRANSFER" -> "Royal Transfer".
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn default_brand() -> String {
    "ROYAL TRANSFER".to_string()
}

fn default_headline() -> String {
    "The road is part of the adventure".to_string()
}

fn default_tagline() -> String {
    "Enjoy the trip - we'll handle the rest.".to_string()
}

fn default_image_url() -> String {
    "https://i.imgur.com/Y7GtfwS.jpeg".to_string()
}

fn default_copyright_year() -> u16 {
    2024
}

fn default_nav() -> Vec<NavLink> {
    [
        ("Destinations", "#destinations"),
        ("FAQ", "#faq"),
        ("Partner", "#partner"),
        ("Rent a Car", "#rent"),
    ]
    .into_iter()
    .map(|(label, href)| NavLink {
        label: label.to_string(),
        href: href.to_string(),
    })
    .collect()
}

fn highlight(icon: IconKind, title: &str, description: &str) -> Highlight {
    Highlight {
        icon,
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn default_trust() -> Vec<Highlight> {
    vec![
        highlight(IconKind::Users, "Trusted by Thousands", "Happy customers worldwide"),
        highlight(IconKind::Trophy, "15+ Years Experience", "Industry veterans"),
        highlight(IconKind::Shield, "Safety & Reliability", "Your security is our priority"),
        highlight(IconKind::Clock, "24/7 Support", "Always here to help"),
    ]
}

fn default_steps() -> Vec<Highlight> {
    vec![
        highlight(
            IconKind::Search,
            "Search your route",
            "Tell us where you start, where you are going and how many travel.",
        ),
        highlight(
            IconKind::Calendar,
            "Pick your dates",
            "Choose a departure day and, for return trips, when to bring you back.",
        ),
        highlight(
            IconKind::Car,
            "Enjoy the ride",
            "A professional driver meets you at the pickup point, on time.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_is_stock_copy() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.nav.len(), 4);
        assert_eq!(config.trust.len(), 4);
        assert_eq!(config.steps.len(), 3);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = SiteConfig::from_toml(
            r#"
            brand = "CROWN SHUTTLE"

            [hero]
            headline = "Door to door"
            "#,
        )
        .unwrap();
        assert_eq!(config.brand, "CROWN SHUTTLE");
        assert_eq!(config.hero.headline, "Door to door");
        assert_eq!(config.hero.tagline, "Enjoy the trip - we'll handle the rest.");
        assert_eq!(config.trust, SiteConfig::default().trust);
    }

    #[test]
    fn trust_items_parse_icons() {
        let config = SiteConfig::from_toml(
            r#"
            [[trust]]
            icon = "shield"
            title = "Insured"
            description = "Every ride"
            "#,
        )
        .unwrap();
        assert_eq!(config.trust.len(), 1);
        assert_eq!(config.trust[0].icon, IconKind::Shield);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(SiteConfig::from_toml("brand = ").is_err());
        assert!(SiteConfig::from_toml("copyright_year = \"soon\"").is_err());
    }

    #[test]
    fn invalid_toml_falls_back_to_default() {
        assert_eq!(
            SiteConfig::from_toml_or_default("[[trust]]\nicon = \"rocket\""),
            SiteConfig::default()
        );
    }

    #[test]
    fn copyright_line_uses_title_case_brand() {
        assert_eq!(
            SiteConfig::default().copyright_line(),
            "\u{a9} 2024 Royal Transfer. All rights reserved."
        );
    }
}
