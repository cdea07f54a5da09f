//! Calendar projection of entries.
//!
//! Entries store an inclusive `[start_date, end_date]` range. Calendar
//! events use a half-open `[start, end)` range, so `end` is one day past
//! the entry's last day.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::entry::{Entry, EntryId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EntryId,
    pub title: String,
    pub start: NaiveDate,
    /// Exclusive.
    pub end: NaiveDate,
}

impl CalendarEvent {
    pub fn from_entry(entry: &Entry) -> Self {
        CalendarEvent {
            id: entry.id,
            title: entry.fields.label(),
            start: entry.fields.start_date,
            end: dates::day_after(entry.fields.end_date),
        }
    }

    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end
    }
}

pub fn to_calendar_events(entries: &[Entry]) -> Vec<CalendarEvent> {
    entries.iter().map(CalendarEvent::from_entry).collect()
}

/// Display options for a client-side month calendar widget. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarOptions {
    pub initial_view: String,
    pub editable: bool,
    pub event_display: String,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        CalendarOptions {
            initial_view: "dayGridMonth".to_string(),
            editable: false,
            event_display: "block".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    pub in_month: bool,
    /// Labels of the events covering this day, in event order.
    pub events: Vec<String>,
}

impl GridDay {
    /// Padding cell outside the representable date range.
    fn blank() -> Self {
        GridDay {
            date: NaiveDate::MAX,
            in_month: false,
            events: Vec::new(),
        }
    }
}

/// A Sunday-first month grid made of whole weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: NaiveDate,
    pub weeks: Vec<[GridDay; 7]>,
}

impl MonthGrid {
    /// Lay out the month containing `month` and place `events` on every day they cover.
    pub fn build(month: NaiveDate, events: &[CalendarEvent]) -> Self {
        let first = dates::first_of_month(month);
        let last = dates::last_of_month(first);
        let lead = u64::from(first.weekday().num_days_from_sunday());
        // Weeks are anchored on Sunday. When the leading days fall before
        // the first representable date they become blank padding cells.
        let (mut day, mut pad) = match first.checked_sub_days(Days::new(lead)) {
            Some(sunday) => (sunday, 0),
            None => (first, lead),
        };

        let mut weeks = Vec::new();
        loop {
            let week: [GridDay; 7] = std::array::from_fn(|offset| {
                let date = (offset as u64)
                    .checked_sub(pad)
                    .and_then(|n| day.checked_add_days(Days::new(n)));
                match date {
                    Some(date) => GridDay {
                        date,
                        in_month: date >= first && date <= last,
                        events: events
                            .iter()
                            .filter(|event| event.covers(date))
                            .map(|event| event.title.clone())
                            .collect(),
                    },
                    None => GridDay::blank(),
                }
            });
            weeks.push(week);

            match day.checked_add_days(Days::new(7 - pad)) {
                Some(next) if next <= last => day = next,
                _ => break,
            }
            pad = 0;
        }

        MonthGrid { month: first, weeks }
    }

    /// e.g. "June 2024"
    pub fn title(&self) -> String {
        self.month.format("%B %Y").to_string()
    }

    pub fn previous(&self) -> NaiveDate {
        dates::previous_month(self.month)
    }

    pub fn next(&self) -> NaiveDate {
        dates::next_month(self.month)
    }
}
