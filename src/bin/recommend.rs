/**
 * MusicMate
 * Copyright (C) 2026 MusicMate developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

extern crate getopts;
extern crate musicmate;

use std::env;
use std::error::Error;
use std::process;
use std::time::Instant;

use getopts::Options;

use musicmate::io;
use musicmate::stats::DataDictionary;
use musicmate::store::{CsvRatingStore, RatingStore};
use musicmate::types::{EmptyReason, Recommendation};

fn main() {

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("i", "inputfile", "Ratings file name (required). The input must be a CSV file \
        with a header line and the columns user_id, track_name, rating and timestamp.", "PATH");
    opts.optopt("u", "user", "User to compute recommendations for (required).", "USER");
    opts.optopt("k", "neighbors", "Number of similar users to consider (optional, defaults \
        to 3).", "NUMBER");
    opts.optopt("n", "num-recommendations", "Number of tracks to recommend (optional, defaults \
        to 5).", "NUMBER");
    opts.optopt("o", "outputfile", "Output file name (optional, output will be written to stdout \
        by default).", "PATH");
    opts.optflag("h", "help", "Print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if matches.opt_present("h") {
        return print_usage_and_exit(&program, opts, None);
    }

    if !matches.opt_present("i") {
        return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify a ratings file via --inputfile."),
        );
    }

    if !matches.opt_present("u") {
        return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify a user via --user."),
        );
    }

    let ratings_path = matches.opt_str("i").unwrap();
    let user = matches.opt_str("u").unwrap();
    let output_path = matches.opt_str("o");

    let num_neighbors: usize = match matches.opt_get_default("k", 3) {
        Ok(num_neighbors) => num_neighbors,
        Err(failure) => {
            let hint = format!("Problem with option 'k': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    let top_n: usize = match matches.opt_get_default("n", 5) {
        Ok(top_n) => top_n,
        Err(failure) => {
            let hint = format!("Problem with option 'n': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if let Err(failure) = compute_recommendations(
        &ratings_path,
        &user,
        num_neighbors,
        top_n,
        output_path,
    ) {
        eprintln!("{}", failure);
        process::exit(1);
    }
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));
}

fn compute_recommendations(
    ratings_path: &str,
    user: &str,
    num_neighbors: usize,
    top_n: usize,
    output_path: Option<String>,
) -> Result<(), Box<dyn Error>> {

    println!("Reading ratings from {}", ratings_path);

    let store = CsvRatingStore::new(ratings_path);
    let ratings = store.snapshot()?;

    let data_dict = DataDictionary::from_ratings(&ratings);

    println!(
        "Found {} ratings from {} users over {} tracks.",
        data_dict.num_ratings(),
        data_dict.num_users(),
        data_dict.num_items(),
    );

    let request_start = Instant::now();

    let outcome = musicmate::recommendations_for(&ratings, user, num_neighbors, top_n)?;

    println!(
        "Computed recommendations for {} in {}ms",
        user,
        request_start.elapsed().as_millis(),
    );

    if let Recommendation::Empty(ref reason) = outcome {
        println!("{}", advice_for(reason));
    }

    io::write_outcome(user, &outcome, output_path)?;

    Ok(())
}

fn advice_for(reason: &EmptyReason) -> &'static str {
    match *reason {
        EmptyReason::NoRatingsForUser => "Rate at least one track first to get recommendations.",
        EmptyReason::InsufficientUsers => "Not enough community data yet for recommendations.",
        EmptyReason::NoNewItems => "No new tracks to recommend right now.",
    }
}
