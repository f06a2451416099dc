//! Interactive bikeshare data explorer.
//!
//! Glue over the `bikeshare-stats` core: prompts for a city and time filters,
//! offers raw-record browsing, prints the four statistic groups, and loops until
//! the user declines a restart. Passing `--city` switches to a non-interactive
//! single run, optionally emitting the report as JSON.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use serde::Serialize;

use bikeshare_stats::error::{Error, Result};
use bikeshare_stats::filter::{filter_data, DayFilter, FilterSpec, MonthFilter};
use bikeshare_stats::loader::{load_data_with, CityId, LoadOptions};
use bikeshare_stats::model::{Dataset, TripRecord};
use bikeshare_stats::observe::{LoadObserver, StdErrObserver};
use bikeshare_stats::stats::{
    compute_duration_stats, compute_station_stats, compute_time_stats, compute_user_stats,
    Demographics, DurationStats, StationStats, TimeStats, UserStats,
};

const RAW_PAGE_SIZE: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "bikeshare", about = "Explore US bikeshare trip data")]
struct Args {
    /// Run non-interactively for this city (chicago, new york city, washington).
    #[arg(long)]
    city: Option<String>,

    /// Month filter for non-interactive runs (full month name, or "all").
    #[arg(long, default_value = "all")]
    month: String,

    /// Day-of-week filter for non-interactive runs (full day name, or "all").
    #[arg(long, default_value = "all")]
    day: String,

    /// Directory holding the city CSV files.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Emit the non-interactive report as JSON instead of sentences.
    #[arg(long)]
    json: bool,

    /// Report load outcomes to stderr.
    #[arg(long)]
    verbose: bool,
}

/// Combined report for one analysis run.
#[derive(Debug, Serialize)]
struct Report {
    city: CityId,
    month: String,
    day: String,
    record_count: usize,
    time: TimeStats,
    stations: StationStats,
    durations: DurationStats,
    users: UserStats,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options = LoadOptions {
        observer: args
            .verbose
            .then(|| Arc::new(StdErrObserver) as Arc<dyn LoadObserver>),
        ..Default::default()
    };

    match args.city.as_deref() {
        Some(city_text) => run_once(&args, city_text, &options),
        None => run_interactive(&args, &options),
    }
}

fn run_once(args: &Args, city_text: &str, options: &LoadOptions) -> Result<()> {
    let city = CityId::parse(city_text)?;
    let month = parse_or_exit(MonthFilter::parse(&args.month), "month", &args.month);
    let day = parse_or_exit(DayFilter::parse(&args.day), "day", &args.day);
    let spec = FilterSpec::new(month, day);

    log::info!("loading {} from {}", city, args.data_dir.display());
    let dataset = load_data_with(city, &args.data_dir, options)?;
    let filtered = filter_data(&dataset, &spec);

    let report = Report {
        city,
        month: args.month.to_ascii_lowercase(),
        day: args.day.to_ascii_lowercase(),
        record_count: filtered.len(),
        time: compute_time_stats(&filtered),
        stations: compute_station_stats(&filtered),
        durations: compute_duration_stats(&filtered),
        users: compute_user_stats(&filtered),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).map_err(io::Error::other)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn parse_or_exit<T>(parsed: Option<T>, what: &str, raw: &str) -> T {
    match parsed {
        Some(value) => value,
        None => {
            eprintln!("invalid {what} '{raw}' (expected a full {what} name or 'all')");
            std::process::exit(2);
        }
    }
}

fn run_interactive(args: &Args, options: &LoadOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Hello! Let's explore some US bikeshare data!");
    loop {
        let (city, spec) = get_filters(&mut input)?;
        println!("{}", "-".repeat(40));

        let dataset = load_data_with(city, &args.data_dir, options)?;
        let filtered = filter_data(&dataset, &spec);

        browse_raw_records(&mut input, &filtered)?;

        print_time_stats(&filtered);
        print_station_stats(&filtered);
        print_duration_stats(&filtered);
        print_user_stats(&filtered);

        let again = ask(&mut input, "\nWould you like to restart? Enter yes or no.\n")?;
        if !again.eq_ignore_ascii_case("yes") {
            break;
        }
    }
    Ok(())
}

/// Prompt for a city, month and day, re-prompting until the answers validate.
fn get_filters(input: &mut impl BufRead) -> Result<(CityId, FilterSpec)> {
    let city = loop {
        let answer = ask(
            input,
            "Would you like to analyse bike share data for Chicago, New York City or Washington? ",
        )?;
        match CityId::parse(&answer) {
            Ok(city) => break city,
            Err(_) => println!("Invalid input, please try again."),
        }
    };

    let month = loop {
        let answer = ask(input, "Please enter the month that you would like to analyse, or 'all': ")?;
        match MonthFilter::parse(&answer) {
            Some(month) => break month,
            None => println!("Invalid input, please try again."),
        }
    };

    let day = loop {
        let answer = ask(input, "Please enter the day that you would like to analyse, or 'all': ")?;
        match DayFilter::parse(&answer) {
            Some(day) => break day,
            None => println!("Invalid input, please try again."),
        }
    };

    Ok((city, FilterSpec::new(month, day)))
}

/// Page through the filtered records, five at a time, starting from the first.
fn browse_raw_records(input: &mut impl BufRead, dataset: &Dataset) -> Result<()> {
    let mut offset = 0;
    let mut question = "\nWould you like to see some raw data? Enter yes or no.\n";
    while offset < dataset.len() {
        let answer = ask(input, question)?;
        if !answer.eq_ignore_ascii_case("yes") {
            break;
        }
        for rec in dataset.records.iter().skip(offset).take(RAW_PAGE_SIZE) {
            print_raw_record(rec);
        }
        offset += RAW_PAGE_SIZE;
        question = "\nWould you like to see more data? Enter yes or no.\n";
    }
    Ok(())
}

fn print_raw_record(rec: &TripRecord) {
    println!(
        "{} | {} | {} -> {} | {} | {}",
        rec.start_time,
        rec.end_time.map_or_else(|| "?".to_string(), |t| t.to_string()),
        rec.start_station,
        rec.end_station.as_deref().unwrap_or("?"),
        rec.trip_duration_secs
            .map_or_else(|| "?s".to_string(), |s| format!("{s}s")),
        rec.user_type,
    );
}

fn print_report(report: &Report) {
    println!(
        "{} records for {} (month={}, day={})",
        report.record_count, report.city, report.month, report.day
    );
    print_time_sentences(&report.time);
    print_station_sentences(&report.stations);
    print_duration_sentences(&report.durations);
    print_user_sentences(&report.users);
}

fn print_time_stats(dataset: &Dataset) {
    println!("\nCalculating The Most Frequent Times of Travel...\n");
    let started = Instant::now();
    print_time_sentences(&compute_time_stats(dataset));
    print_elapsed(started);
}

fn print_time_sentences(stats: &TimeStats) {
    match (stats.most_common_month, stats.most_common_day, stats.most_common_hour) {
        (Some(month), Some(day), Some(hour)) => {
            println!("The most common month is {month}.");
            println!("The most common weekday is {day}.");
            println!("The most common start hour is {hour}.");
        }
        _ => println!("No trips matched the selected filters."),
    }
}

fn print_station_stats(dataset: &Dataset) {
    println!("\nCalculating The Most Popular Stations and Trip...\n");
    let started = Instant::now();
    print_station_sentences(&compute_station_stats(dataset));
    print_elapsed(started);
}

fn print_station_sentences(stats: &StationStats) {
    match &stats.most_common_start_station {
        Some(station) => println!("The most common start station is {station}."),
        None => println!("No trips matched the selected filters."),
    }
    if let Some(station) = &stats.most_common_end_station {
        println!("The most common end station is {station}.");
    }
    if let Some(route) = &stats.most_common_route {
        println!("The most frequent trip is {route}.");
    }
}

fn print_duration_stats(dataset: &Dataset) {
    println!("\nCalculating Trip Duration...\n");
    let started = Instant::now();
    print_duration_sentences(&compute_duration_stats(dataset));
    print_elapsed(started);
}

fn print_duration_sentences(stats: &DurationStats) {
    match (stats.total_secs, stats.mean_secs) {
        (Some(total), Some(mean)) => {
            println!("The total travel time is {total} seconds.");
            println!("The mean travel time is {mean} seconds.");
        }
        _ => println!("No trip durations are available for the selected filters."),
    }
}

fn print_user_stats(dataset: &Dataset) {
    println!("\nCalculating User Stats...\n");
    let started = Instant::now();
    print_user_sentences(&compute_user_stats(dataset));
    print_elapsed(started);
}

fn print_user_sentences(stats: &UserStats) {
    println!("Counts of user types:");
    for (user_type, count) in &stats.user_type_counts {
        println!("  {user_type}: {count}");
    }

    match &stats.demographics {
        Demographics::Unavailable => {
            println!("There is no data on user gender or year of birth available.");
        }
        Demographics::Available(demo) => {
            println!("\nCounts of user genders:");
            for (gender, count) in &demo.gender_counts {
                println!("  {gender}: {count}");
            }
            if let (Some(earliest), Some(recent), Some(common)) = (
                demo.earliest_birth_year,
                demo.most_recent_birth_year,
                demo.most_common_birth_year,
            ) {
                println!("\nEarliest year of birth: {earliest}");
                println!("Most recent year of birth: {recent}");
                println!("Most common year of birth: {common}");
            }
        }
    }
}

fn print_elapsed(started: Instant) {
    println!("\nThis took {:.4} seconds.", started.elapsed().as_secs_f64());
    println!("{}", "-".repeat(40));
}

fn ask(input: &mut impl BufRead, question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush().map_err(Error::Io)?;
    let mut answer = String::new();
    input.read_line(&mut answer).map_err(Error::Io)?;
    Ok(answer.trim().to_string())
}
