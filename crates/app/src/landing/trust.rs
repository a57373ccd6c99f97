use super::icons::highlight_icon;
use dioxus::prelude::*;
use shared_types::Highlight;

/// Row of reassurance badges under the search panel.
#[component]
pub fn TrustIndicators(items: Vec<Highlight>) -> Element {
    rsx! {
        section { class: "trust", aria_label: "Why travel with us",
            for item in items {
                div { key: "{item.title}", class: "trust-item",
                    span { class: "trust-icon", {highlight_icon(item.icon, 32)} }
                    div {
                        h3 { class: "trust-title", "{item.title}" }
                        p { class: "trust-description", "{item.description}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::SiteConfig;

    #[test]
    fn renders_every_stock_item() {
        let items = SiteConfig::default().trust;
        let html = dioxus_ssr::render_element(rsx! { TrustIndicators { items } });
        assert_eq!(html.matches(r#"class="trust-item""#).count(), 4);
        assert!(html.contains("Trusted by Thousands"));
        assert!(html.contains("Safety &amp; Reliability"));
        assert!(html.contains("Always here to help"));
    }

    #[test]
    fn empty_list_renders_empty_section() {
        let html = dioxus_ssr::render_element(rsx! { TrustIndicators { items: Vec::new() } });
        assert!(html.contains(r#"class="trust""#));
        assert!(!html.contains("trust-item"));
    }
}
