use crate::errors::AppResult;
use crate::models::{City, DayFilter, FilterSelection, MonthFilter};
use crate::ui::prompt::Console;
use crate::utils::formatting::separator;
use std::io::{BufRead, Write};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

/// Ask city, month and day until each answer is in its vocabulary.
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> AppResult<FilterSelection> {
    console.say(GREETING)?;

    let city = console.prompt_until(
        "Please select a city - data available for: Chicago, New York City or Washington:",
        "Please select a city: Chicago, New York City or Washington:",
        "Typo? - Please try again!",
        City::from_input,
    )?;

    let month = console.prompt_until(
        "Is there a month you are interested in? Type in a month between January and June - or all (for all months):",
        "Type in a month between January and June - or all (for all months):",
        "Sorry - there is only data for January to June. Please try again.",
        MonthFilter::from_input,
    )?;

    let day = console.prompt_until(
        "Great - any day you'd like to see? - Please select one or type in all (for all days):",
        "Please select a day (Monday to Sunday) or type in all (for all days):",
        "Ups - please try again!",
        DayFilter::from_input,
    )?;

    console.say(separator())?;
    Ok(FilterSelection::new(city, month, day))
}
