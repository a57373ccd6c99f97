use dioxus::prelude::*;

use crate::{Button, ButtonSize, ButtonVariant};

/// Increment/decrement control around a counted value.
///
/// The stepper only reports clicks; bounds are enforced by whoever owns the
/// value. `unit` is rendered after the number ("2 Passengers").
#[component]
pub fn Stepper(
    value: u32,
    #[props(default)] unit: String,
    on_decrement: EventHandler<()>,
    on_increment: EventHandler<()>,
    #[props(default)] icon: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "stepper", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "group",
            ..merged,
            if let Some(icon) = icon {
                span { class: "stepper-icon", aria_hidden: "true", {icon} }
            }
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Icon,
                aria_label: "Decrease",
                onclick: move |_| on_decrement.call(()),
                "-"
            }
            div { class: "stepper-value", aria_live: "polite",
                span { class: "stepper-count", "{value}" }
                if !unit.is_empty() {
                    span { class: "stepper-unit", "{unit}" }
                }
            }
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Icon,
                aria_label: "Increase",
                onclick: move |_| on_increment.call(()),
                "+"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_value_and_unit() {
        let html = dioxus_ssr::render_element(rsx! {
            Stepper {
                value: 3,
                unit: "Passengers",
                on_decrement: |_| {},
                on_increment: |_| {},
            }
        });
        assert!(html.contains(r#"class="stepper""#));
        assert!(html.contains("stepper-count"));
        assert!(html.contains(">3<"));
        assert!(html.contains("Passengers"));
        assert!(html.contains(r#"aria-label="Decrease""#));
        assert!(html.contains(r#"aria-label="Increase""#));
    }

    #[test]
    fn omits_empty_unit() {
        let html = dioxus_ssr::render_element(rsx! {
            Stepper { value: 1, on_decrement: |_| {}, on_increment: |_| {} }
        });
        assert!(!html.contains("stepper-unit"));
    }
}
