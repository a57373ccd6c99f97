//! Trip-search form state.
//!
//! The form is driven by a reducer: every control interaction becomes a
//! [`SearchAction`], and [`SearchFormState::reduce`] returns the complete next
//! state or rejects the action without touching the current one. Cross-field
//! rules (return date never before departure) therefore happen in a single
//! transition.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// Whether a search is for a one-way or a return journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    OneWay,
    #[default]
    RoundTrip,
}

impl TripType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::OneWay => "one_way",
            TripType::RoundTrip => "round_trip",
        }
    }

    /// Label shown on the trip-type toggle.
    pub fn display_name(&self) -> &'static str {
        match self {
            TripType::OneWay => "One Way",
            TripType::RoundTrip => "With return",
        }
    }
}

/// A single user interaction with the search form.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    SetTripType(TripType),
    IncrementPassengers,
    DecrementPassengers,
    SetDepartureDate(Option<Date>),
    SetReturnDate(Option<Date>),
    SetOrigin(String),
    SetDestination(String),
}

impl SearchAction {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            SearchAction::SetTripType(_) => "set_trip_type",
            SearchAction::IncrementPassengers => "increment_passengers",
            SearchAction::DecrementPassengers => "decrement_passengers",
            SearchAction::SetDepartureDate(_) => "set_departure_date",
            SearchAction::SetReturnDate(_) => "set_return_date",
            SearchAction::SetOrigin(_) => "set_origin",
            SearchAction::SetDestination(_) => "set_destination",
        }
    }
}

/// Transient state of the trip-search form for one page view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFormState {
    pub trip_type: TripType,
    passenger_count: u32,
    departure_date: Option<Date>,
    return_date: Option<Date>,
    pub origin: String,
    pub destination: String,
}

impl Default for SearchFormState {
    fn default() -> Self {
        Self {
            trip_type: TripType::default(),
            passenger_count: 1,
            departure_date: None,
            return_date: None,
            origin: String::new(),
            destination: String::new(),
        }
    }
}

impl SearchFormState {
    /// Number of passengers; always at least one.
    pub fn passenger_count(&self) -> u32 {
        self.passenger_count
    }

    pub fn departure_date(&self) -> Option<Date> {
        self.departure_date
    }

    /// Chosen return date. Never earlier than the departure date; it is
    /// retained while the trip is one-way.
    pub fn return_date(&self) -> Option<Date> {
        self.return_date
    }

    pub fn is_round_trip(&self) -> bool {
        self.trip_type == TripType::RoundTrip
    }

    /// The return-date control is inert for one-way trips.
    ///
    /// A retained return date is kept; switching back to a return trip makes
    /// it visible again.
    pub fn return_disabled(&self) -> bool {
        !self.is_round_trip()
    }

    /// "Passenger" or "Passengers", agreeing with the current count.
    pub fn passenger_noun(&self) -> &'static str {
        if self.passenger_count == 1 {
            "Passenger"
        } else {
            "Passengers"
        }
    }

    /// "1 Passenger", "3 Passengers".
    pub fn passenger_label(&self) -> String {
        format!("{} {}", self.passenger_count, self.passenger_noun())
    }

    /// Earliest date the departure picker may offer.
    pub fn departure_min_date(&self, today: Date) -> Date {
        today
    }

    /// Earliest date the return picker may offer: the departure date when
    /// one is chosen, today otherwise.
    pub fn return_min_date(&self, today: Date) -> Date {
        self.departure_date.map_or(today, |d| d.max(today))
    }

    /// Apply one action and return the next state.
    ///
    /// Dates earlier than the relevant minimum are rejected and the current
    /// state is left as it was. All other actions always succeed.
    pub fn reduce(&self, action: SearchAction, today: Date) -> Result<Self, AppError> {
        let mut next = self.clone();
        match action {
            SearchAction::SetTripType(trip_type) => next.trip_type = trip_type,
            SearchAction::IncrementPassengers => {
                next.passenger_count = next.passenger_count.saturating_add(1);
            }
            SearchAction::DecrementPassengers => {
                next.passenger_count = next.passenger_count.saturating_sub(1).max(1);
            }
            SearchAction::SetDepartureDate(date) => {
                if let Some(d) = date {
                    let min = self.departure_min_date(today);
                    if d < min {
                        return Err(AppError::field(
                            "departure_date",
                            format!("Departure cannot be earlier than {min}"),
                        ));
                    }
                    if next.return_date.is_some_and(|r| r < d) {
                        next.return_date = None;
                    }
                }
                next.departure_date = date;
            }
            SearchAction::SetReturnDate(date) => {
                if let Some(d) = date {
                    let min = self.return_min_date(today);
                    if d < min {
                        return Err(AppError::field(
                            "return_date",
                            format!("Return cannot be earlier than {min}"),
                        ));
                    }
                }
                next.return_date = date;
            }
            SearchAction::SetOrigin(text) => next.origin = text,
            SearchAction::SetDestination(text) => next.destination = text,
        }
        Ok(next)
    }

    /// Build the request a pricing service would receive for this form.
    ///
    /// Collects every missing or stale field into one validation error.
    pub fn to_query(&self, today: Date) -> Result<SearchQuery, AppError> {
        let mut field_errors = BTreeMap::new();

        if self.origin.trim().is_empty() {
            field_errors.insert("origin".to_string(), "Enter a pickup location".to_string());
        }
        if self.destination.trim().is_empty() {
            field_errors.insert(
                "destination".to_string(),
                "Enter a drop-off location".to_string(),
            );
        }

        match self.departure_date {
            None => {
                field_errors.insert(
                    "departure_date".to_string(),
                    "Choose a departure date".to_string(),
                );
            }
            Some(d) if d < today => {
                field_errors.insert(
                    "departure_date".to_string(),
                    "Departure date is in the past".to_string(),
                );
            }
            Some(_) => {}
        }

        if self.is_round_trip() {
            match self.return_date {
                None => {
                    field_errors.insert(
                        "return_date".to_string(),
                        "Choose a return date".to_string(),
                    );
                }
                Some(r) if r < self.return_min_date(today) => {
                    field_errors.insert(
                        "return_date".to_string(),
                        "Return must be on or after departure".to_string(),
                    );
                }
                Some(_) => {}
            }
        }

        if !field_errors.is_empty() {
            return Err(AppError::validation("Search is incomplete", field_errors));
        }

        let departure_date = self
            .departure_date
            .ok_or_else(|| AppError::field("departure_date", "Choose a departure date"))?;

        Ok(SearchQuery {
            trip_type: self.trip_type,
            passengers: self.passenger_count,
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            departure_date,
            return_date: if self.is_round_trip() {
                self.return_date
            } else {
                None
            },
        })
    }
}

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Search request handed to a pricing service.
///
/// Dates are ISO `YYYY-MM-DD`; `return_date` is only present for return
/// trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub trip_type: TripType,
    pub passengers: u32,
    pub origin: String,
    pub destination: String,
    #[serde(with = "iso_date")]
    pub departure_date: Date,
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub return_date: Option<Date>,
}
