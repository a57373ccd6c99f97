use dioxus::prelude::*;
use shared_types::{AppError, SearchAction, SearchFormState, SearchQuery, SiteConfig};
use time::{Date, OffsetDateTime};

mod format_helpers;
mod landing;
mod site;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const LANDING_CSS: Asset = asset!("/assets/landing.css");

/// Search form state shared by the search panel's controls.
///
/// Every control goes through [`SearchForm::dispatch`], so the reducer in
/// `shared_types::search` is the only code that mutates the state.
#[derive(Clone, Copy, PartialEq)]
pub struct SearchForm {
    pub state: Signal<SearchFormState>,
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            state: Signal::new(SearchFormState::default()),
        }
    }

    /// Run one action through the reducer and store the result.
    ///
    /// A rejected action leaves the state as it was.
    pub fn dispatch(&mut self, action: SearchAction) -> Result<(), AppError> {
        let name = action.name();
        let next = self.state.read().reduce(action, today());
        match next {
            Ok(next) => {
                tracing::debug!(action = name, "search form updated");
                self.state.set(next);
                Ok(())
            }
            Err(e) => {
                tracing::debug!(action = name, error = %e, "search form action rejected");
                Err(e)
            }
        }
    }

    /// Build the pricing request for the current form.
    pub fn query(&self) -> Result<SearchQuery, AppError> {
        self.state.read().to_query(today())
    }
}

/// Hook to access the search form.
pub fn use_search_form() -> SearchForm {
    use_context::<SearchForm>()
}

/// Current calendar date in the browser's time zone, used as the lower
/// bound for every date picker. Falls back to UTC when the local offset
/// can't be determined.
pub fn today() -> Date {
    calendar_date(OffsetDateTime::now_local(), OffsetDateTime::now_utc)
}

fn calendar_date<E>(local: Result<OffsetDateTime, E>, utc: impl FnOnce() -> OffsetDateTime) -> Date {
    local.unwrap_or_else(|_| utc()).date()
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| site::site_config().clone());
    use_context_provider(SearchForm::new);

    let title = config.display_brand();

    rsx! {
        document::Title { "{title}" }
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: LANDING_CSS }
        shared_ui::ToastProvider {
            landing::Landing {}
        }
    }
}

/// Hook to access the landing page copy.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn today_uses_local_calendar_date() {
        // 00:30 in UTC+2 is still the previous day in UTC
        let local = datetime!(2025-06-02 00:30 +02:00);
        let utc = || datetime!(2025-06-01 22:30 UTC);
        assert_eq!(calendar_date::<()>(Ok(local), utc), date!(2025 - 06 - 02));
    }

    #[test]
    fn today_falls_back_to_utc() {
        let utc = || datetime!(2025-06-01 22:30 UTC);
        assert_eq!(calendar_date(Err(()), utc), date!(2025 - 06 - 01));
    }
}
