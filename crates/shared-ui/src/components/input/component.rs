use dioxus::prelude::*;

/// Text input with an optional leading icon.
///
/// The icon sits inside the field's left padding; pass any element, usually
/// a `dioxus_free_icons::Icon`.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] icon: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_icon = icon.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            div { class: "input-field", "data-icon": has_icon,
                if let Some(icon) = icon {
                    span { class: "input-icon", aria_hidden: "true", {icon} }
                }
                input {
                    r#type: "text",
                    value: value,
                    placeholder: placeholder,
                    oninput: move |evt| on_input.call(evt),
                    ..merged,
                }
            }
        }
    }
}
