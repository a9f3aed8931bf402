extern crate csv;
extern crate getopts;
extern crate musicmate;
extern crate rand;

use std::env;
use std::error::Error;
use std::process;

use getopts::Options;
use rand::seq::SliceRandom;

use musicmate::io;
use musicmate::types::Rating;

/// Builds a denser synthetic ratings file out of an existing one, for trying
/// the recommender on more realistic community sizes. Each synthetic user
/// samples a fixed number of rows from the input and takes over their track
/// and score.
fn main() {

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("i", "inputfile", "Ratings file to sample tracks and scores from (required).",
        "PATH");
    opts.optopt("o", "outputfile", "File to write the synthetic ratings to (required).", "PATH");
    opts.optopt("u", "num-users", "Number of synthetic users to generate (optional, defaults \
        to 50).", "NUMBER");
    opts.optopt("r", "ratings-per-user", "Number of ratings to sample per synthetic user \
        (optional, defaults to 10).", "NUMBER");
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

    if !matches.opt_present("i") || !matches.opt_present("o") {
        return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify both --inputfile and --outputfile."),
        );
    }

    let input_path = matches.opt_str("i").unwrap();
    let output_path = matches.opt_str("o").unwrap();

    let num_users: usize = match matches.opt_get_default("u", 50) {
        Ok(num_users) => num_users,
        Err(failure) => {
            let hint = format!("Problem with option 'u': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    let per_user: usize = match matches.opt_get_default("r", 10) {
        Ok(per_user) => per_user,
        Err(failure) => {
            let hint = format!("Problem with option 'r': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if let Err(failure) = generate(&input_path, &output_path, num_users, per_user) {
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

fn generate(
    input_path: &str,
    output_path: &str,
    num_users: usize,
    per_user: usize,
) -> Result<(), Box<dyn Error>> {

    println!("Reading track pool from {}", input_path);

    let pool = io::read_ratings(input_path)?;

    if pool.is_empty() {
        return Err(Box::from("the input file contains no ratings to sample from"));
    }

    let mut rng = rand::thread_rng();
    let mut writer = csv::Writer::from_path(output_path)?;

    let mut num_written: u64 = 0;

    for user in 1..=num_users {

        let user_id = format!("U{:03}", user);

        for sampled in pool.choose_multiple(&mut rng, per_user) {
            let row = Rating::new(&user_id, &sampled.item_id, sampled.score, &sampled.timestamp);
            writer.serialize(&row)?;
            num_written += 1;
        }
    }

    writer.flush()?;

    println!(
        "Wrote {} synthetic ratings for {} users to {}",
        num_written,
        num_users,
        output_path,
    );

    Ok(())
}
