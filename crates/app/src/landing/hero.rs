use dioxus::prelude::*;

#[component]
pub fn Hero(headline: String, tagline: String, image_url: String) -> Element {
    rsx! {
        header {
            class: "hero",
            style: "background-image: url({image_url});",
            div { class: "hero-overlay" }
            div { class: "hero-content",
                h1 { class: "hero-headline", "{headline}" }
                p { class: "hero-tagline", "{tagline}" }
            }
        }
    }
}
