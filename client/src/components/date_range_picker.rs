//! Availability calendar and two-click range picker.
//!
//! DESIGN
//! ======
//! Rendering asks [`day_state`] for each cell; clicks go through
//! [`RangeSelection::pick`], which applies the past/booked filter to the
//! clicked endpoint only. Rejected clicks are reported to the parent so it can
//! show a toast.

#[cfg(test)]
#[path = "date_range_picker_test.rs"]
mod date_range_picker_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use stays::availability::check_selectable;
use stays::{BookedRange, RangeSelection, SelectionError};
use time::Date;

use crate::util::calendar::{MonthView, WEEKDAY_LABELS};

/// How a calendar day renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayState {
    Past,
    Booked,
    Selected,
    Available,
}

impl DayState {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Past => "calendar__day calendar__day--past",
            Self::Booked => "calendar__day calendar__day--booked",
            Self::Selected => "calendar__day calendar__day--selected",
            Self::Available => "calendar__day",
        }
    }

    pub fn is_disabled(self) -> bool {
        matches!(self, Self::Past | Self::Booked)
    }
}

pub fn day_state(date: Date, today: Date, ranges: &[BookedRange], selection: &RangeSelection) -> DayState {
    match check_selectable(date, today, ranges) {
        Err(SelectionError::Past(_)) => DayState::Past,
        Err(SelectionError::Booked(_)) => DayState::Booked,
        Ok(()) if selection.covers(date) => DayState::Selected,
        Ok(()) => DayState::Available,
    }
}

/// User-facing text for a rejected click.
pub fn rejection_message(error: SelectionError) -> &'static str {
    match error {
        SelectionError::Past(_) => "You cannot pick a date in the past.",
        SelectionError::Booked(_) => "That date is already booked.",
    }
}

#[component]
pub fn DateRangePicker(
    ranges: Vec<BookedRange>,
    today: Date,
    selection: RwSignal<RangeSelection>,
    on_reject: Callback<SelectionError>,
) -> impl IntoView {
    let ranges = StoredValue::new(ranges);
    let month = RwSignal::new(MonthView::containing(today));
    let can_go_back = move || !month.get().previous().is_before_month_of(today);

    let on_pick = move |date: Date| {
        let mut next = selection.get_untracked();
        match ranges.with_value(|ranges| next.pick(date, today, ranges)) {
            Ok(()) => selection.set(next),
            Err(err) => on_reject.run(err),
        }
    };

    let cells = move || {
        let picked = selection.get();
        month
            .get()
            .cells()
            .into_iter()
            .map(|cell| match cell {
                None => view! { <span class="calendar__blank"></span> }.into_any(),
                Some(date) => {
                    let state = ranges.with_value(|ranges| day_state(date, today, ranges, &picked));
                    view! {
                        <button
                            type="button"
                            class=state.css_class()
                            disabled=state.is_disabled()
                            on:click=move |_| on_pick(date)
                        >
                            {date.day()}
                        </button>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    view! {
        <div class="calendar">
            <div class="calendar__header">
                <button
                    type="button"
                    class="calendar__nav"
                    aria-label="Previous month"
                    disabled=move || !can_go_back()
                    on:click=move |_| month.update(|m| *m = m.previous())
                >
                    "‹"
                </button>
                <span class="calendar__title">{move || month.get().title()}</span>
                <button
                    type="button"
                    class="calendar__nav"
                    aria-label="Next month"
                    on:click=move |_| month.update(|m| *m = m.next())
                >
                    "›"
                </button>
            </div>
            <div class="calendar__grid">
                {WEEKDAY_LABELS.iter().map(|label| view! { <span class="calendar__weekday">{*label}</span> }).collect_view()}
                {cells}
            </div>
        </div>
    }
}
