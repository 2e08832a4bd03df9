use std::path::PathBuf;

use triad_sat::{context::Context, reports::Report};

mod misc;
mod parse;

use crate::misc::load_dimacs;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli().get_matches();

    let config = match parse::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            println!("c Config error: {e}");
            std::process::exit(1);
        }
    };
    let strategies = parse::strategies_from_args(&matches);
    let show_model = matches.get_flag("model");

    let Some(path) = matches.get_one::<PathBuf>("path") else {
        println!("c No formula given");
        std::process::exit(1);
    };

    let mut the_context = Context::from_config(config);

    match load_dimacs(&mut the_context, path) {
        Ok(counts) => {
            if let Some((atoms, clauses)) = counts.expected {
                println!("c Expected {atoms} atoms and {clauses} clauses");
            }
            println!("c Read {} clauses, kept {}", counts.read, counts.added);
        }
        Err(e) => {
            println!("c Error loading {}: {e}", path.display());
            std::process::exit(1);
        }
    }

    let mut reports = Vec::with_capacity(strategies.len());

    for strategy in strategies {
        println!("c Strategy: {strategy}");
        let report = the_context.solve(strategy);

        match &report {
            Report::Inconclusive(reason) => println!("c Reason: {reason}"),

            Report::Satisfiable(None) => println!("c No witness from {strategy}"),

            Report::Satisfiable(Some(witness)) => {
                if show_model {
                    println!("v {}", witness.as_dimacs(true));
                }
            }

            Report::Unsatisfiable => {}
        }

        println!("s {report}");
        println!("c time: {:.3}s", the_context.counters.time.as_secs_f64());
        reports.push(report);
    }

    std::process::exit(exit_code(&reports))
}

/// The exit code of a run, following the convention of SAT competitions.
///
/// Strategies agree on any conclusive report, and so the first conclusive report decides the code.
fn exit_code(reports: &[Report]) -> i32 {
    match reports.iter().find(|report| !report.is_inconclusive()) {
        Some(Report::Satisfiable(_)) => 10,
        Some(Report::Unsatisfiable) => 20,
        _ => 0,
    }
}
