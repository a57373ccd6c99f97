use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdCar, LdClock, LdSearch, LdShield, LdTrophy, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::IconKind;

/// Render the lucide icon configured for a highlight.
pub fn highlight_icon(kind: IconKind, size: u32) -> Element {
    match kind {
        IconKind::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: size, height: size } },
        IconKind::Trophy => rsx! { Icon::<LdTrophy> { icon: LdTrophy, width: size, height: size } },
        IconKind::Shield => rsx! { Icon::<LdShield> { icon: LdShield, width: size, height: size } },
        IconKind::Clock => rsx! { Icon::<LdClock> { icon: LdClock, width: size, height: size } },
        IconKind::Search => rsx! { Icon::<LdSearch> { icon: LdSearch, width: size, height: size } },
        IconKind::Calendar => {
            rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: size, height: size } }
        }
        IconKind::Car => rsx! { Icon::<LdCar> { icon: LdCar, width: size, height: size } },
    }
}
