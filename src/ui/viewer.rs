//! Paged display of the raw filtered rows.

use crate::errors::AppResult;
use crate::models::{TripRecord, TripTable};
use crate::ui::prompt::Console;
use crate::utils::colors::{MISSING, colorize_optional};
use crate::utils::date::{format_timestamp, month_name, weekday_name};
use crate::utils::formatting::{fmt_number, separator};
use crate::utils::table::Table;
use std::io::{BufRead, Write};

pub const RAW_DATA_PROMPT: &str = "\nWould you like to see some (more) raw data (Yes or No)?";
pub const NO_MORE_DATA: &str = "No more raw data to display.";

/// Result of asking the viewer for its next page.
#[derive(Debug, PartialEq)]
pub enum Page<'a> {
    /// `rows` start at table position `start`.
    Rows { start: usize, rows: &'a [TripRecord] },
    Exhausted,
}

/// Cursor over a table, advanced only by `next_page`.
#[derive(Debug, Clone)]
pub struct RawDataViewer {
    cursor: usize,
    page_size: usize,
}

impl RawDataViewer {
    pub fn new(page_size: usize) -> Self {
        Self {
            cursor: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn next_page<'a>(&mut self, table: &'a TripTable) -> Page<'a> {
        if self.cursor >= table.len() {
            return Page::Exhausted;
        }

        let start = self.cursor;
        let end = (start + self.page_size).min(table.len());
        self.cursor = end;

        Page::Rows {
            start,
            rows: &table.trips[start..end],
        }
    }
}

/// Render rows with every source and derived column.
pub fn render_rows(start: usize, rows: &[TripRecord], demographics: bool, color: bool) -> String {
    let cell = |v: Option<String>| {
        if color {
            colorize_optional(v)
        } else {
            v.unwrap_or_else(|| MISSING.to_string())
        }
    };

    let mut headers = vec![
        "#",
        "Id",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if demographics {
        headers.extend(["Gender", "Birth Year"]);
    }
    headers.extend(["Month", "Weekday", "Hour", "Trip"]);

    let mut table = Table::with_headers(&headers);

    for (i, trip) in rows.iter().enumerate() {
        let mut row = vec![
            (start + i).to_string(),
            cell(trip.row_id.clone()),
            format_timestamp(&trip.start_time),
            cell(trip.end_time.as_ref().map(format_timestamp)),
            fmt_number(trip.duration_secs),
            trip.start_station.clone(),
            trip.end_station.clone(),
            cell(trip.user_type.clone()),
        ];
        if demographics {
            row.push(cell(trip.gender.clone()));
            row.push(cell(trip.birth_year.map(fmt_number)));
        }
        row.push(month_name(trip.month).to_string());
        row.push(weekday_name(trip.weekday).to_string());
        row.push(trip.hour.to_string());
        row.push(trip.trip_key());

        table.add_row(row);
    }

    table.render()
}

/// Interactive loop: "yes" shows the next page, "no" leaves, anything else
/// re-prompts.
pub fn show_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
    page_size: usize,
) -> AppResult<()> {
    let mut viewer = RawDataViewer::new(page_size);
    let demographics = table.city.has_demographics();

    loop {
        match console.ask_yes_no(RAW_DATA_PROMPT)? {
            Some(true) => match viewer.next_page(table) {
                Page::Rows { start, rows } => {
                    let text = render_rows(start, rows, demographics, console.color());
                    console.write_raw(&text)?;
                }
                Page::Exhausted => {
                    console.say(NO_MORE_DATA)?;
                    break;
                }
            },
            Some(false) => {
                console.say("\nOk - no more raw data.")?;
                break;
            }
            None => console.say("\nTypo - try again.")?,
        }
    }

    console.say(separator())
}
