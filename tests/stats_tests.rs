mod common;
use bikeshare::core::calculator::counting::{ValueCount, mode, value_counts};
use bikeshare::core::calculator::{duration, stations, travel_time, users};
use bikeshare::data::read_trips;
use bikeshare::models::{City, FilterSelection, TripRecord, TripTable};
use bikeshare::ui::report::{
    NO_DATA, Palette, render_duration, render_stations, render_travel_time, render_users,
};
use bikeshare::utils::date::parse_timestamp;
use chrono::{Month, Weekday};
use common::{PLACEHOLDER_CSV, fixture_dir, loader};
use std::fs;

fn trip(start: &str, from: &str, to: &str, secs: f64) -> TripRecord {
    TripRecord::new(
        None,
        parse_timestamp(start).unwrap(),
        None,
        secs,
        from.to_string(),
        to.to_string(),
        Some("Subscriber".to_string()),
        None,
        None,
    )
}

fn chicago(name: &str) -> TripTable {
    let dir = fixture_dir(name);
    loader(&dir)
        .load_data(&FilterSelection::whole_city(City::Chicago))
        .unwrap()
}

#[test]
fn test_mode_first_to_reach_max_wins() {
    assert_eq!(mode(["B", "A", "A", "B"]), Some("A"));
    assert_eq!(mode(["A", "B", "C"]), Some("A"));
    assert_eq!(mode(["C", "B", "B"]), Some("B"));
    assert_eq!(mode(Vec::<u32>::new()), None);
}

#[test]
fn test_value_counts_descending_then_first_seen() {
    let counts = value_counts(["x", "y", "y", "z", "x", "y"]);
    assert_eq!(
        counts,
        vec![
            ValueCount { value: "y", count: 3 },
            ValueCount { value: "x", count: 2 },
            ValueCount { value: "z", count: 1 },
        ]
    );

    let tied = value_counts(["b", "a"]);
    assert_eq!(tied[0].value, "b");
}

#[test]
fn test_duration_example() {
    let table = TripTable::new(
        City::Chicago,
        vec![
            trip("2017-06-05 08:00:00", "A", "X", 60.0),
            trip("2017-06-05 09:00:00", "A", "Y", 120.0),
            trip("2017-06-05 10:00:00", "B", "X", 180.0),
        ],
    );

    let stats = duration::compute(&table).unwrap();
    assert_eq!(stats.total_hours, 0.10);
    assert_eq!(stats.mean_minutes, 2.0);
    assert_eq!(stats.trip_count, 3);
}

#[test]
fn test_station_example() {
    let table = TripTable::new(
        City::Chicago,
        vec![
            trip("2017-06-05 08:00:00", "A", "X", 60.0),
            trip("2017-06-05 09:00:00", "A", "Y", 60.0),
            trip("2017-06-05 10:00:00", "B", "X", 60.0),
        ],
    );

    let stats = stations::compute(&table).unwrap();
    assert_eq!(stats.most_common_start, "A");
    assert_eq!(stats.most_common_end, "X");
    assert_eq!(stats.most_common_trip, "A - X");
}

#[test]
fn test_trip_key_is_directional() {
    let table = TripTable::new(
        City::Chicago,
        vec![
            trip("2017-06-05 08:00:00", "B", "A", 60.0),
            trip("2017-06-05 09:00:00", "A", "B", 60.0),
            trip("2017-06-05 10:00:00", "A", "B", 60.0),
        ],
    );

    let stats = stations::compute(&table).unwrap();
    assert_eq!(stats.most_common_trip, "A - B");
}

#[test]
fn test_travel_time_on_fixture() {
    let stats = travel_time::compute(&chicago("travel_time_fixture")).unwrap();
    assert_eq!(stats.most_common_month, Month::June);
    assert_eq!(stats.most_common_weekday, Weekday::Mon);
    assert_eq!(stats.most_common_hour, 8);
}

#[test]
fn test_duration_on_fixture() {
    let stats = duration::compute(&chicago("duration_fixture")).unwrap();
    assert_eq!(stats.total_secs, 1590.0);
    assert_eq!(stats.total_hours, 0.44);
    assert_eq!(stats.mean_minutes, 3.79);
}

#[test]
fn test_user_stats_skip_missing_values() {
    let stats = users::compute(&chicago("users_fixture")).unwrap();

    assert_eq!(stats.user_types[0].value, "Subscriber");
    assert_eq!(stats.user_types[0].count, 5);
    assert_eq!(stats.user_types[1].value, "Customer");
    assert_eq!(stats.user_types[1].count, 2);
    assert_eq!(stats.missing_user_types, 0);

    assert_eq!(stats.genders[0].value, "Male");
    assert_eq!(stats.genders[0].count, 4);
    assert_eq!(stats.genders[1].value, "Female");
    assert_eq!(stats.missing_genders, 1);

    assert_eq!(stats.oldest_birth_year, Some(1970));
    assert_eq!(stats.youngest_birth_year, Some(2001));
    assert_eq!(stats.most_common_birth_year, Some(1990));
}

#[test]
fn test_user_stats_all_birth_years_missing() {
    let table = TripTable::new(
        City::Chicago,
        vec![trip("2017-06-05 08:00:00", "A", "X", 60.0)],
    );

    let stats = users::compute(&table).unwrap();
    assert_eq!(stats.oldest_birth_year, None);
    assert_eq!(stats.youngest_birth_year, None);
    assert_eq!(stats.most_common_birth_year, None);
    assert!(stats.genders.is_empty());
    assert_eq!(stats.missing_genders, 1);

    let text = render_users(Some(&stats), Palette::new(false));
    assert!(text.contains("Youngest user, born in: not available"));
    assert!(text.contains("(missing)  1"));
}

#[test]
fn test_empty_table_reports_no_data() {
    let table = TripTable::new(City::Washington, Vec::new());
    let p = Palette::new(false);

    assert!(travel_time::compute(&table).is_none());
    assert!(stations::compute(&table).is_none());
    assert!(duration::compute(&table).is_none());
    assert!(users::compute(&table).is_none());

    for text in [
        render_travel_time(None, p),
        render_stations(None, p),
        render_duration(None, p),
        render_users(None, p),
    ] {
        assert!(text.contains(NO_DATA));
    }
}

#[test]
fn test_render_plain_output() {
    let table = chicago("render_plain");
    let p = Palette::new(false);

    let text = render_travel_time(travel_time::compute(&table).as_ref(), p);
    assert!(text.contains("Most common month: June"));
    assert!(text.contains("Most common weekday: Monday"));
    assert!(text.contains("Most common starting hour for a trip: 8"));

    let text = render_duration(duration::compute(&table).as_ref(), p);
    assert!(text.contains("Total travel time (h): 0.44"));
    assert!(text.contains("Average travel time (min): 3.79"));

    let text = render_stations(stations::compute(&table).as_ref(), p);
    assert!(text.contains("Most popular trip: A - X"));
}

#[test]
fn test_user_stats_ignore_placeholder_tokens() {
    let dir = fixture_dir("users_placeholders");
    let path = dir.join("placeholders.csv");
    fs::write(&path, PLACEHOLDER_CSV).unwrap();
    let table = TripTable::new(City::Chicago, read_trips(&path).unwrap());

    let stats = users::compute(&table).unwrap();
    assert_eq!(stats.missing_user_types, 1);
    assert_eq!(stats.missing_genders, 2);
    assert_eq!(
        stats.genders,
        vec![
            ValueCount { value: "Male".to_string(), count: 1 },
            ValueCount { value: "Female".to_string(), count: 1 },
        ]
    );
    assert_eq!(stats.oldest_birth_year, Some(1990));
    assert_eq!(stats.youngest_birth_year, Some(1990));
}

#[test]
fn test_non_finite_birth_year_is_dropped() {
    let mut record = trip("2017-06-05 08:00:00", "A", "X", 60.0);
    record.birth_year = Some(f64::NAN);
    assert_eq!(record.birth_year_rounded(), None);

    let table = TripTable::new(City::Chicago, vec![record]);
    assert_eq!(users::compute(&table).unwrap().oldest_birth_year, None);
}
