use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

/// Size preset for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    /// Call-to-action size used for the main search button.
    Large,
    /// Round, square-sized button holding a single glyph.
    Icon,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Large => "large",
            ButtonSize::Icon => "icon",
        }
    }
}

/// A themed button.
///
/// `pressed` renders `aria-pressed`, turning the button into one half of a
/// segmented toggle.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default)]
    pub pressed: Option<bool>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
        Attribute::new("data-size", props.size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            "aria-pressed": props.pressed.map(|p| p.to_string()),
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_renders_aria_pressed() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { pressed: true, "With return" }
        });
        assert!(html.contains(r#"aria-pressed="true""#));
        assert!(html.contains(r#"data-style="primary""#));
    }

    #[test]
    fn plain_button_has_no_aria_pressed() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { variant: ButtonVariant::Ghost, size: ButtonSize::Large, "See Prices" }
        });
        assert!(!html.contains("aria-pressed"));
        assert!(html.contains(r#"data-size="large""#));
        assert!(html.contains("See Prices"));
    }
}
