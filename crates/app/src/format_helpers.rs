//! Formatting utilities for the landing page.

use shared_types::{SearchQuery, TripType};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

const HUMAN_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// Format a date as "Jun 10, 2025".
pub fn format_date_human(date: Date) -> String {
    date.format(HUMAN_DATE).unwrap_or_else(|_| date.to_string())
}

/// Toast text shown when "See Prices" is pressed; pricing is not wired up.
pub fn pricing_pending_message(query: &SearchQuery) -> String {
    let when = match (query.trip_type, query.return_date) {
        (TripType::RoundTrip, Some(back)) => format!(
            "{} - {}",
            format_date_human(query.departure_date),
            format_date_human(back)
        ),
        _ => format_date_human(query.departure_date),
    };
    format!(
        "Prices for {} to {} ({when}) are coming soon.",
        query.origin.trim(),
        query.destination.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use time::macros::date;

    fn query(trip_type: TripType, return_date: Option<Date>) -> SearchQuery {
        SearchQuery {
            trip_type,
            passengers: 2,
            origin: " Split Airport ".into(),
            destination: "Dubrovnik".into(),
            departure_date: date!(2025 - 06 - 10),
            return_date,
        }
    }

    #[test]
    fn format_date_human_basic() {
        assert_eq!(format_date_human(date!(2025 - 06 - 10)), "Jun 10, 2025");
        assert_eq!(format_date_human(date!(2026 - 01 - 01)), "Jan 1, 2026");
        assert_eq!(format_date_human(date!(2024 - 12 - 31)), "Dec 31, 2024");
    }

    #[test]
    fn pricing_message_one_way() {
        assert_eq!(
            pricing_pending_message(&query(TripType::OneWay, None)),
            "Prices for Split Airport to Dubrovnik (Jun 10, 2025) are coming soon."
        );
    }

    #[test]
    fn pricing_message_round_trip() {
        assert_eq!(
            pricing_pending_message(&query(TripType::RoundTrip, Some(date!(2025 - 06 - 17)))),
            "Prices for Split Airport to Dubrovnik (Jun 10, 2025 - Jun 17, 2025) are coming soon."
        );
    }
}
