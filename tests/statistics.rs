use bikeshare_stats::filter::{filter_data, DayFilter, FilterSpec, MonthFilter};
use bikeshare_stats::loader::{load_from_reader, CityId};
use bikeshare_stats::stats::{
    compute_duration_stats, compute_station_stats, compute_time_stats, compute_user_stats,
    Demographics,
};

#[test]
fn end_to_end_filter_then_aggregate() {
    // Two January Monday trips A->B (100s, 300s) and one February Tuesday trip
    // C->D (200s).
    let input = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,,100,A,B,Subscriber
2017-01-09 09:00:00,,300,A,B,Customer
2017-02-07 10:00:00,,200,C,D,Subscriber
";
    let ds = load_from_reader(CityId::Washington, input.as_bytes()).unwrap();

    let spec = FilterSpec::new(MonthFilter::parse("january").unwrap(), DayFilter::All);
    let january = filter_data(&ds, &spec);
    assert_eq!(january.len(), 2);

    let time = compute_time_stats(&january);
    assert_eq!(time.most_common_month, Some("January"));
    assert_eq!(time.most_common_day, Some("Monday"));

    let stations = compute_station_stats(&january);
    assert_eq!(stations.most_common_route.as_deref(), Some("A to B"));

    let durations = compute_duration_stats(&january);
    assert_eq!(durations.total_secs, Some(400.0));
    assert_eq!(durations.mean_secs, Some(200.0));

    let users = compute_user_stats(&january);
    assert_eq!(
        users.user_type_counts,
        vec![("Subscriber".to_string(), 1), ("Customer".to_string(), 1)]
    );
    assert_eq!(users.demographics, Demographics::Unavailable);
}

#[test]
fn tied_hour_mode_resolves_to_first_seen() {
    // Hours arrive as [8, 9, 8, 9]; the tie must resolve to 8.
    let input = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,,100,A,B,Subscriber
2017-01-02 09:00:00,,100,A,B,Subscriber
2017-01-03 08:30:00,,100,A,B,Subscriber
2017-01-03 09:30:00,,100,A,B,Subscriber
";
    let ds = load_from_reader(CityId::Chicago, input.as_bytes()).unwrap();
    assert_eq!(compute_time_stats(&ds).most_common_hour, Some(8));
}

#[test]
fn all_durations_missing_reports_undefined_not_zero() {
    let input = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,,,A,B,Subscriber
2017-01-03 09:00:00,,,C,D,Customer
";
    let ds = load_from_reader(CityId::Washington, input.as_bytes()).unwrap();
    let durations = compute_duration_stats(&ds);
    assert_eq!(durations.total_secs, None);
    assert_eq!(durations.mean_secs, None);
}

#[test]
fn demographics_free_schema_still_yields_user_type_counts() {
    let input = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,,100,A,B,Registered
2017-01-03 09:00:00,,100,C,D,Registered
2017-01-04 10:00:00,,100,E,F,Casual
";
    let ds = load_from_reader(CityId::Washington, input.as_bytes()).unwrap();
    assert!(!ds.has_demographics);

    let users = compute_user_stats(&ds);
    assert_eq!(users.demographics, Demographics::Unavailable);
    assert_eq!(
        users.user_type_counts,
        vec![("Registered".to_string(), 2), ("Casual".to_string(), 1)]
    );
}

#[test]
fn demographics_from_fixture_city() {
    let ds = bikeshare_stats::loader::load_data(CityId::Chicago, "tests/fixtures").unwrap();
    let users = compute_user_stats(&ds);

    match users.demographics {
        Demographics::Available(demo) => {
            assert_eq!(
                demo.gender_counts,
                vec![("Male".to_string(), 2), ("Female".to_string(), 1)]
            );
            assert_eq!(demo.earliest_birth_year, Some(1987));
            assert_eq!(demo.most_recent_birth_year, Some(1992));
            assert_eq!(demo.most_common_birth_year, Some(1992));
        }
        Demographics::Unavailable => panic!("chicago fixture carries demographics"),
    }
}

#[test]
fn aggregators_are_defined_on_an_over_filtered_dataset() {
    let input = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,,100,A,B,Subscriber
";
    let ds = load_from_reader(CityId::Chicago, input.as_bytes()).unwrap();
    let spec = FilterSpec::new(
        MonthFilter::parse("december").unwrap(),
        DayFilter::parse("friday").unwrap(),
    );
    let empty = filter_data(&ds, &spec);
    assert!(empty.is_empty());

    assert_eq!(compute_time_stats(&empty).most_common_month, None);
    assert_eq!(compute_station_stats(&empty).most_common_start_station, None);
    assert_eq!(compute_duration_stats(&empty).total_secs, None);
    assert!(compute_user_stats(&empty).user_type_counts.is_empty());
}
