#[macro_use]
extern crate clap;

use std::process;

use sls_sat::sls::{Heuristic, Settings};

fn main() {
    let ls012 = ["0", "1", "2"];
    let heuristics = [
        "gsat",
        "gsat-rw",
        "walksat",
        "walksat-tabu",
        "gsat-tabu",
        "novelty",
        "novelty-plus",
        "r-novelty",
        "rots",
        "hrts",
        "irots",
        "amls",
    ];

    let matches = clap::App::new("sls-sat")
        .version(&crate_version!()[..])
        .about("Stochastic local search for CNF-SAT")
        .arg(
            clap::Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .required(true)
                .help("DIMACS CNF input file"),
        )
        .arg(
            clap::Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .takes_value(true)
                .possible_values(&ls012)
                .help("Verbosity level (0=silent, 1=some, 2=more)"),
        )
        .arg(
            clap::Arg::with_name("heuristic")
                .long("heuristic")
                .takes_value(true)
                .possible_values(&heuristics)
                .help("Variable-selection heuristic"),
        )
        .arg(
            clap::Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("RNG seed"),
        )
        .arg(
            clap::Arg::with_name("max-tries")
                .long("max-tries")
                .takes_value(true)
                .help("Override MAX_TRIES"),
        )
        .arg(
            clap::Arg::with_name("max-flips")
                .long("max-flips")
                .takes_value(true)
                .help("Override MAX_FLIPS"),
        )
        .get_matches();

    {
        let mut builder = env_logger::Builder::new();
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "{}", record.args())
        });
        builder.filter(
            None,
            match matches.value_of("verbose") {
                Some("0") => log::LevelFilter::Off,
                Some("2") => log::LevelFilter::Trace,
                _ => log::LevelFilter::Info,
            },
        );
        builder.init();
    }

    let mut settings = Settings::default();

    if let Some(h) = matches.value_of("heuristic") {
        settings.heuristic = h.parse::<Heuristic>().expect("validated by clap");
    }
    if let Some(seed) = matches.value_of("seed").and_then(|s| s.parse().ok()) {
        settings.seed = seed;
    }
    if let Some(n) = matches.value_of("max-tries").and_then(|s| s.parse().ok()) {
        settings.max_tries = Some(n);
    }
    if let Some(n) = matches.value_of("max-flips").and_then(|s| s.parse().ok()) {
        settings.max_flips = Some(n);
    }

    let in_path = matches.value_of("input").unwrap();

    match sls_sat::solve_file(in_path, &settings) {
        Ok(result) => print_result(&result),
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}

fn print_result(result: &sls_sat::sls::RunResult) {
    use sls_sat::sls::RunResult::*;

    let stats = result.stats();
    println!("{}", stats.flips);
    println!("{}", stats.tries);
    println!("{:.4}", stats.cpu_time);
    match result {
        Sat { model, .. } => {
            println!("SAT");
            let line: Vec<String> = model.iter().map(|x| x.to_string()).collect();
            println!("{}", line.join(" "));
        }
        Unknown { .. } => println!("UNKNOWN"),
    }
}
