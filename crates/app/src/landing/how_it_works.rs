use super::icons::highlight_icon;
use dioxus::prelude::*;
use shared_types::Highlight;
use shared_ui::{
    Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, Separator,
};

/// Numbered explainer cards, one per step.
#[component]
pub fn HowItWorks(steps: Vec<Highlight>) -> Element {
    rsx! {
        section { class: "how-it-works", id: "how-it-works",
            h2 { class: "section-title", "How it works" }
            Separator {}
            div { class: "steps",
                for (step, n) in steps.into_iter().zip(1u32..) {
                    Card { key: "{n}", class: "step",
                        CardHeader {
                            Badge { "Step {n}" }
                            span { class: "step-icon", {highlight_icon(step.icon, 28)} }
                            CardTitle { "{step.title}" }
                        }
                        CardContent {
                            CardDescription { "{step.description}" }
                        }
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
    fn numbers_steps_from_one() {
        let steps = SiteConfig::default().steps;
        let html = dioxus_ssr::render_element(rsx! { HowItWorks { steps } });
        assert!(html.contains("Step 1"));
        assert!(html.contains(r#"class="badge""#));
        assert!(html.contains("Step 3"));
        assert!(!html.contains("Step 4"));
        assert!(html.contains("Enjoy the ride"));
    }
}
