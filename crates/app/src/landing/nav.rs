use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCrown;
use dioxus_free_icons::Icon;
use shared_types::NavLink;

/// Fixed top bar with the brand mark and in-page anchor links.
#[component]
pub fn SiteNav(brand: String, links: Vec<NavLink>) -> Element {
    rsx! {
        nav { class: "site-nav",
            div { class: "site-nav-inner",
                a { class: "site-nav-brand", href: "#",
                    span { class: "site-nav-mark",
                        Icon::<LdCrown> { icon: LdCrown, width: 32, height: 32 }
                    }
                    span { class: "site-nav-name", "{brand}" }
                }
                ul { class: "site-nav-links",
                    for link in links {
                        li { key: "{link.href}",
                            a { href: "{link.href}", "{link.label}" }
                        }
                    }
                }
            }
        }
    }
}
