use crate::format_helpers::pricing_pending_message;
use crate::{today, use_search_form};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdMapPin, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{AppError, SearchAction, TripType};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardVariant, Date, DateField, Input,
    Stepper, ToastOptions, Toasts,
};

/// Surface a rejected action to the user; accepted actions need no feedback.
fn report(toast: Toasts, result: Result<(), AppError>) {
    if let Err(e) = result {
        toast.error(e.friendly_message(), ToastOptions::new());
    }
}

/// The selected trip type is the primary-styled half of the toggle.
fn trip_variant(active: bool) -> ButtonVariant {
    if active {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    }
}

/// Trip-search card overlapping the bottom of the hero.
#[component]
pub fn SearchPanel() -> Element {
    let mut form = use_search_form();
    let toast = use_toast();
    let today = today();
    let state = form.state.read().clone();

    let on_see_prices = move |_: MouseEvent| match form.query() {
        Ok(query) => {
            tracing::info!(
                trip_type = query.trip_type.as_str(),
                passengers = query.passengers,
                departure = %query.departure_date,
                "price search requested"
            );
            toast.info(pricing_pending_message(&query), ToastOptions::new());
        }
        Err(e) => {
            tracing::debug!(error = %e, "price search blocked");
            toast.error(e.friendly_message(), ToastOptions::new());
        }
    };

    rsx! {
        section { class: "search-section", id: "search",
            Card { variant: CardVariant::Elevated, class: "search-card",
                div { class: "search-controls",
                    div { class: "trip-toggle", role: "group", aria_label: "Trip type",
                        Button {
                            variant: trip_variant(state.is_round_trip()),
                            pressed: state.is_round_trip(),
                            onclick: move |_| report(toast, form.dispatch(SearchAction::SetTripType(TripType::RoundTrip))),
                            {TripType::RoundTrip.display_name()}
                        }
                        Button {
                            variant: trip_variant(!state.is_round_trip()),
                            pressed: !state.is_round_trip(),
                            onclick: move |_| report(toast, form.dispatch(SearchAction::SetTripType(TripType::OneWay))),
                            {TripType::OneWay.display_name()}
                        }
                    }
                    Stepper {
                        class: "passenger-stepper",
                        value: state.passenger_count(),
                        unit: state.passenger_noun(),
                        icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
                        on_decrement: move |_| report(toast, form.dispatch(SearchAction::DecrementPassengers)),
                        on_increment: move |_| report(toast, form.dispatch(SearchAction::IncrementPassengers)),
                    }
                }

                div { class: "search-body",
                    div { class: "search-fields",
                        Input {
                            placeholder: "From",
                            aria_label: "From",
                            value: state.origin.clone(),
                            icon: rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 20, height: 20 } },
                            on_input: move |evt: FormEvent| {
                                report(toast, form.dispatch(SearchAction::SetOrigin(evt.value())))
                            },
                        }
                        Input {
                            placeholder: "To",
                            aria_label: "To",
                            value: state.destination.clone(),
                            icon: rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 20, height: 20 } },
                            on_input: move |evt: FormEvent| {
                                report(toast, form.dispatch(SearchAction::SetDestination(evt.value())))
                            },
                        }
                        DateField {
                            id: "departure-date",
                            label: "Departure",
                            selected: state.departure_date(),
                            min_date: state.departure_min_date(today),
                            icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 } },
                            on_change: move |date: Option<Date>| {
                                report(toast, form.dispatch(SearchAction::SetDepartureDate(date)))
                            },
                        }
                        DateField {
                            id: "return-date",
                            label: "Return",
                            selected: state.return_date(),
                            min_date: state.return_min_date(today),
                            disabled: state.return_disabled(),
                            icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 } },
                            on_change: move |date: Option<Date>| {
                                report(toast, form.dispatch(SearchAction::SetReturnDate(date)))
                            },
                        }
                    }

                    div { class: "search-actions",
                        Button {
                            size: ButtonSize::Large,
                            onclick: on_see_prices,
                            "See Prices"
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

    #[test]
    fn active_trip_is_primary() {
        assert_eq!(trip_variant(true), ButtonVariant::Primary);
        assert_eq!(trip_variant(false), ButtonVariant::Secondary);
    }
}
