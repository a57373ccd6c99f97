mod footer;
mod hero;
mod how_it_works;
mod icons;
mod nav;
mod search_panel;
mod trust;

use crate::use_site_config;
use dioxus::prelude::*;

use footer::SiteFooter;
use hero::Hero;
use how_it_works::HowItWorks;
use nav::SiteNav;
use search_panel::SearchPanel;
use trust::TrustIndicators;

/// The whole landing page, top to bottom.
#[component]
pub fn Landing() -> Element {
    let config = use_site_config();

    rsx! {
        div { class: "landing",
            SiteNav { brand: config.brand.clone(), links: config.nav.clone() }
            Hero {
                headline: config.hero.headline.clone(),
                tagline: config.hero.tagline.clone(),
                image_url: config.hero.image_url.clone(),
            }
            main { class: "landing-main",
                SearchPanel {}
                TrustIndicators { items: config.trust.clone() }
                HowItWorks { steps: config.steps.clone() }
            }
            SiteFooter { line: config.copyright_line() }
        }
    }
}
