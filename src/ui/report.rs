//! Human-readable rendering of the four statistics reports.

use crate::core::calculator::counting::ValueCount;
use crate::core::calculator::duration::DurationStats;
use crate::core::calculator::stations::StationStats;
use crate::core::calculator::travel_time::TravelTimeStats;
use crate::core::calculator::users::UserStats;
use crate::core::calculator::{duration, stations, travel_time, users};
use crate::errors::AppResult;
use crate::models::TripTable;
use crate::ui::messages::header;
use crate::ui::prompt::Console;
use crate::utils::date::{month_name, weekday_name};
use crate::utils::formatting::separator;
use crate::utils::secs2readable;
use ansi_term::Colour;
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::time::Instant;

pub const NO_DATA: &str = "No data available for the selected filters.";
pub const NOT_AVAILABLE: &str = "not available";

/// Label/heading styling, disabled for plain output.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn label(&self, s: &str) -> String {
        if self.color {
            Colour::Cyan.paint(s).to_string()
        } else {
            s.to_string()
        }
    }

    pub fn heading(&self, s: &str) -> String {
        header(s, self.color)
    }

    pub fn muted(&self, s: &str) -> String {
        if self.color {
            Colour::Fixed(245).paint(s).to_string()
        } else {
            s.to_string()
        }
    }
}

fn title(p: Palette, text: &str) -> String {
    format!("\n{}\n\n", p.heading(text))
}

pub fn render_travel_time(stats: Option<&TravelTimeStats>, p: Palette) -> String {
    let mut out = title(p, "Calculating The Most Frequent Times of Travel...");
    match stats {
        None => out.push_str(&format!("{}\n", p.muted(NO_DATA))),
        Some(s) => {
            let _ = writeln!(
                out,
                "{} {}",
                p.label("Most common month:"),
                month_name(s.most_common_month)
            );
            let _ = writeln!(
                out,
                "{} {}",
                p.label("Most common weekday:"),
                weekday_name(s.most_common_weekday)
            );
            let _ = writeln!(
                out,
                "{} {}",
                p.label("Most common starting hour for a trip:"),
                s.most_common_hour
            );
        }
    }
    out
}

pub fn render_stations(stats: Option<&StationStats>, p: Palette) -> String {
    let mut out = title(p, "Calculating The Most Popular Stations and Trip...");
    match stats {
        None => out.push_str(&format!("{}\n", p.muted(NO_DATA))),
        Some(s) => {
            let _ = writeln!(
                out,
                "{} {}",
                p.label("Most popular station for starting a trip:"),
                s.most_common_start
            );
            let _ = writeln!(
                out,
                "{} {}",
                p.label("Most popular station for ending a trip:"),
                s.most_common_end
            );
            let _ = writeln!(out, "{} {}", p.label("Most popular trip:"), s.most_common_trip);
        }
    }
    out
}

pub fn render_duration(stats: Option<&DurationStats>, p: Palette) -> String {
    let mut out = title(p, "Calculating Trip Duration...");
    match stats {
        None => out.push_str(&format!("{}\n", p.muted(NO_DATA))),
        Some(s) => {
            let _ = writeln!(out, "{} {}", p.label("Number of trips:"), s.trip_count);
            let _ = writeln!(
                out,
                "{} {:.2} ({})",
                p.label("Total travel time (h):"),
                s.total_hours,
                secs2readable(s.total_secs)
            );
            let _ = writeln!(
                out,
                "{} {:.2} ({})",
                p.label("Average travel time (min):"),
                s.mean_minutes,
                secs2readable(s.mean_secs)
            );
        }
    }
    out
}

fn render_counts(out: &mut String, counts: &[ValueCount<String>], missing: usize) {
    let width = counts
        .iter()
        .map(|c| c.value.chars().count())
        .chain(std::iter::once(if missing > 0 { 9 } else { 0 }))
        .max()
        .unwrap_or(0);

    if counts.is_empty() && missing == 0 {
        let _ = writeln!(out, "  {}", NOT_AVAILABLE);
        return;
    }
    for c in counts {
        let _ = writeln!(out, "  {:<width$}  {}", c.value, c.count, width = width);
    }
    if missing > 0 {
        let _ = writeln!(out, "  {:<width$}  {}", "(missing)", missing, width = width);
    }
}

fn year_or_na(year: Option<i32>) -> String {
    year.map(|y| y.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn render_users(stats: Option<&UserStats>, p: Palette) -> String {
    let mut out = title(p, "Calculating User Stats...");
    let Some(s) = stats else {
        out.push_str(&format!("{}\n", p.muted(NO_DATA)));
        return out;
    };

    let _ = writeln!(out, "{}", p.label("Number of different user types:"));
    render_counts(&mut out, &s.user_types, s.missing_user_types);

    let _ = writeln!(out, "\n{}", p.label("Number of users by gender:"));
    render_counts(&mut out, &s.genders, s.missing_genders);

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} {}",
        p.label("Youngest user, born in:"),
        year_or_na(s.youngest_birth_year)
    );
    let _ = writeln!(
        out,
        "{} {}",
        p.label("Oldest user, born in:"),
        year_or_na(s.oldest_birth_year)
    );
    let _ = writeln!(
        out,
        "{} {}",
        p.label("Most common year of birth:"),
        year_or_na(s.most_common_birth_year)
    );
    out
}

pub fn no_user_data_notice(table: &TripTable) -> String {
    format!("\nSorry - no user data for {}.\n", table.city)
}

/// Run one reporter, print its text, then the elapsed time and a separator.
fn timed<R, W, F>(console: &mut Console<R, W>, show_timing: bool, report: F) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    F: FnOnce() -> String,
{
    let started = Instant::now();
    let text = report();
    let elapsed = started.elapsed().as_secs_f64();

    console.write_raw(&text)?;
    if show_timing {
        console.say(format!("\nThis took {:.6} seconds.", elapsed))?;
    }
    console.say(separator())
}

/// All reporters for one table; user stats only where the city has them.
pub fn print_statistics<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
    show_timing: bool,
) -> AppResult<()> {
    let p = Palette::new(console.color());

    timed(console, show_timing, || {
        render_travel_time(travel_time::compute(table).as_ref(), p)
    })?;
    timed(console, show_timing, || {
        render_stations(stations::compute(table).as_ref(), p)
    })?;
    timed(console, show_timing, || {
        render_duration(duration::compute(table).as_ref(), p)
    })?;

    if table.city.has_demographics() {
        timed(console, show_timing, || {
            render_users(users::compute(table).as_ref(), p)
        })?;
    } else {
        console.write_raw(&no_user_data_notice(table))?;
        console.say(separator())?;
    }

    Ok(())
}
