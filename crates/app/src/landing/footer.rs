use dioxus::prelude::*;

#[component]
pub fn SiteFooter(line: String) -> Element {
    rsx! {
        footer { class: "site-footer",
            p { "{line}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_copyright_line() {
        let html = dioxus_ssr::render_element(rsx! {
            SiteFooter { line: "\u{a9} 2024 Royal Transfer. All rights reserved." }
        });
        assert!(html.contains("2024 Royal Transfer. All rights reserved."));
        assert!(html.contains(r#"class="site-footer""#));
    }
}
