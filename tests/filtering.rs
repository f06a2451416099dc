use bikeshare_stats::filter::{filter_data, DayFilter, FilterSpec, MonthFilter};
use bikeshare_stats::loader::{load_from_reader, CityId};
use bikeshare_stats::model::Dataset;

// January 2017: the 2nd was a Monday, the 3rd a Tuesday.
// February 2017: the 6th was a Monday.
fn sample_dataset() -> Dataset {
    let input = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,,100,A,B,Subscriber
2017-01-03 09:00:00,,200,C,D,Customer
2017-02-06 10:00:00,,300,E,F,Subscriber
2017-01-02 11:00:00,,400,G,H,Customer
";
    load_from_reader(CityId::Chicago, input.as_bytes()).unwrap()
}

#[test]
fn all_all_filter_is_identity() {
    let ds = sample_dataset();
    let out = filter_data(&ds, &FilterSpec::default());
    assert_eq!(out, ds);
}

#[test]
fn every_surviving_record_satisfies_the_filter() {
    let ds = sample_dataset();
    let spec = FilterSpec::new(
        MonthFilter::parse("january").unwrap(),
        DayFilter::parse("monday").unwrap(),
    );
    let out = filter_data(&ds, &spec);

    assert_eq!(out.len(), 2);
    for rec in &out.records {
        assert_eq!(rec.month_name, "January");
        assert_eq!(rec.day_name, "Monday");
    }
    // And no record outside the result matches: 2 of the 4 satisfy both predicates.
    let matching_in_input = ds
        .records
        .iter()
        .filter(|r| r.month_name == "January" && r.day_name == "Monday")
        .count();
    assert_eq!(matching_in_input, out.len());
}

#[test]
fn surviving_records_keep_their_relative_order() {
    let ds = sample_dataset();
    let spec = FilterSpec::new(MonthFilter::All, DayFilter::parse("monday").unwrap());
    let out = filter_data(&ds, &spec);

    let hours: Vec<u32> = out.records.iter().map(|r| r.start_hour).collect();
    assert_eq!(hours, vec![8, 11]);
}

#[test]
fn filtering_does_not_mutate_the_input() {
    let ds = sample_dataset();
    let before = ds.clone();
    let spec = FilterSpec::new(MonthFilter::parse("february").unwrap(), DayFilter::All);
    let _ = filter_data(&ds, &spec);
    assert_eq!(ds, before);
}

#[test]
fn no_match_is_an_empty_dataset_not_an_error() {
    let ds = sample_dataset();
    let spec = FilterSpec::new(MonthFilter::parse("december").unwrap(), DayFilter::All);
    let out = filter_data(&ds, &spec);
    assert!(out.is_empty());
    assert_eq!(out.city, ds.city);
}
