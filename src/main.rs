//! Simplex push button lock combination counter.

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;
extern crate simplex;

use clap::{App, AppSettings, Arg, ArgMatches};
use simplex::errors::{self, parse_buttons, parse_seconds_per_guess};
use simplex::{format_duration, Error, Lock};
use std::process;

fn main() {
    env_logger::init();

    let matches = App::new("simplex")
        .version(crate_version!())
        .about("Simplex lock combinatorics and brute-force time estimation")
        .setting(AppSettings::GlobalVersion)
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(Arg::with_name("buttons")
             .required(true)
             .index(1)
             .validator(|v| parse_buttons(&v).map(|_| ()).map_err(|e| e.to_string()))
             .help(
                 "Number of buttons on the lock"))
        .arg(Arg::with_name("seconds-per-guess")
             .short("s")
             .long("seconds-per-guess")
             .takes_value(true)
             .allow_hyphen_values(true)
             .validator(|v| parse_seconds_per_guess(&v).map(|_| ()).map_err(|e| e.to_string()))
             .help(
                 "Time per guess in seconds, prints an estimated brute-force time"))
        .arg(Arg::with_name("worst-case")
             .short("w")
             .long("worst-case")
             .help(
                 "Assume every combination has to be tried, instead of half"))
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> errors::Result<()> {
    let buttons = parse_buttons(matches.value_of("buttons").unwrap_or(""))?;
    let seconds_per_guess = match matches.value_of("seconds-per-guess") {
        Some(text) => Some(parse_seconds_per_guess(text)?),
        None => None,
    };
    let worst_case = matches.is_present("worst-case");
    debug!("buttons: {}, seconds per guess: {:?}, worst case: {}",
           buttons, seconds_per_guess, worst_case);

    let mut lock = Lock::new(buttons);
    println!("Total combinations: {}", lock.count_combinations());

    if let Some(seconds_per_guess) = seconds_per_guess {
        let seconds = lock.brute_force_time(seconds_per_guess, worst_case);
        if !seconds.is_finite() {
            return Err(Error::EstimateOverflow { buttons: lock.buttons() });
        }
        debug!("estimated {} seconds", seconds);
        println!("Estimated brute-force time: {}", format_duration(seconds));
    }

    Ok(())
}
