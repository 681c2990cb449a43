/**
 * Relco
 * Copyright (C) 2026 the relco developers
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
extern crate num_cpus;
extern crate relco;

use std::env;
use std::error::Error;
use std::process;
use std::time::Instant;

use getopts::Options;

use relco::corpus::Corpus;
use relco::io;
use relco::utils;
use relco::{related_for_all, SimilarityIndex, DEFAULT_NUM_RELATED};

fn main() {

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("i", "inputfile", "Input file name (required). The input consists of coin \
        descriptions. The input file must be a CSV file with a header row, a coinId column \
        and a description column.", "PATH");
    opts.optopt("o", "outputfile", "Output file name (optional, output will be written to stdout \
        by default).", "PATH");
    opts.optopt("n", "num-related", "Number of related coins to compute per coin (optional, \
        defaults to 5).", "NUMBER");
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
            Some("Please specify an inputfile via --inputfile."),
        );
    }

    let corpus_path = matches.opt_str("i").unwrap();
    let output_path = matches.opt_str("o");

    let num_related: usize = match matches.opt_get_default("n", DEFAULT_NUM_RELATED) {
        Ok(num_related) => num_related,
        Err(failure) => {
            let hint = format!("Problem with option 'n': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if let Err(error) = compute_related(&corpus_path, num_related, output_path) {
        eprintln!("Fatal error: {}", error);
        process::exit(1);
    }
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    let status = match hint {
        Some(hint) => {
            eprintln!("\n{}\n", hint);
            2
        },
        None => 0,
    };

    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));

    process::exit(status);
}

fn compute_related(
    corpus_path: &str,
    num_related: usize,
    output_path: Option<String>
) -> Result<(), Box<Error>> {

    eprintln!("Reading coin descriptions from {}", corpus_path);

    let corpus = Corpus::from_csv_path(corpus_path)?;

    eprintln!("Found descriptions for {} coins.", corpus.num_coins());

    let index = SimilarityIndex::fit(&corpus);

    let ranking_start = Instant::now();
    let all_related = related_for_all(&corpus, &index, num_cpus::get(), num_related)?;

    eprintln!(
        "Ranked the top {} related coins per coin, took {}ms",
        num_related,
        utils::to_millis(ranking_start.elapsed()),
    );

    eprintln!("Writing related coins...");
    io::write_related(&all_related, &corpus, output_path)?;

    Ok(())
}
