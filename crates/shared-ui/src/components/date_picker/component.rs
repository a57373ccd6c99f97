use dioxus::prelude::*;
use dioxus_primitives::calendar::CalendarProps;
use dioxus_primitives::date_picker as prim;

use crate::Label;

pub use time::Date;

#[component]
pub fn DatePicker(mut props: prim::DatePickerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "date-picker", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DatePicker { ..props }
    }
}

#[component]
pub fn DatePickerPopover(mut props: prim::DatePickerPopoverProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "date-picker-popover",
        None,
        false,
    ));

    rsx! {
        prim::DatePickerPopover { ..props }
    }
}

#[component]
pub fn DatePickerCalendar(mut props: prim::DatePickerCalendarProps<CalendarProps>) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "date-picker-calendar",
        None,
        false,
    ));

    rsx! {
        prim::DatePickerCalendar { ..props }
    }
}

#[component]
pub fn DatePickerInput(mut props: prim::DatePickerInputProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "date-picker-input",
        None,
        false,
    ));

    rsx! {
        prim::DatePickerInput { ..props }
    }
}

/// Labelled single-date picker bounded below by `min_date`.
///
/// The calendar never offers days before `min_date`. When `disabled` the
/// whole field is inert and rendered de-emphasized, but `selected` is still
/// shown so a retained value stays visible.
#[component]
pub fn DateField(
    id: String,
    label: String,
    selected: Option<Date>,
    min_date: Date,
    #[props(default = false)] disabled: bool,
    #[props(default)] icon: Option<Element>,
    on_change: EventHandler<Option<Date>>,
) -> Element {
    rsx! {
        div {
            class: "date-field",
            "data-disabled": disabled,
            "aria-disabled": disabled.to_string(),
            Label { html_for: id.clone(), "{label}" }
            div { class: "date-field-control",
                if let Some(icon) = icon {
                    span { class: "date-field-icon", aria_hidden: "true", {icon} }
                }
                DatePicker {
                    selected_date: selected,
                    min_date: min_date,
                    disabled: disabled,
                    on_value_change: move |value: Option<Date>| on_change.call(value),
                    DatePickerInput { id: id }
                    DatePickerPopover {
                        DatePickerCalendar {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn render_field(disabled: bool) -> String {
        dioxus_ssr::render_element(rsx! {
            DateField {
                id: "return-date",
                label: "Return",
                selected: None,
                min_date: date!(2025 - 06 - 01),
                disabled: disabled,
                on_change: |_| {},
            }
        })
    }

    #[test]
    fn disabled_field_is_marked_inert() {
        let html = render_field(true);
        assert!(html.contains(r#"data-disabled="true""#));
        assert!(html.contains(r#"aria-disabled="true""#));
    }

    #[test]
    fn enabled_field_is_not_marked_inert() {
        let html = render_field(false);
        assert!(!html.contains(r#"data-disabled="true""#));
        assert!(!html.contains(r#"aria-disabled="true""#));
        assert!(html.contains(r#"for="return-date""#));
    }
}
