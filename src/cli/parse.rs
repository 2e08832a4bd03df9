use std::{path::PathBuf, str::FromStr, time::Duration};

use clap::{builder::PossibleValuesParser, value_parser, Arg, ArgAction, ArgMatches, Command};

use triad_sat::{
    config::{AtomSelection, Config, Strategy},
    types::err::{self},
};

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("triad_cli")
        .about("Determines whether a formula is satisfiable or unsatisfiable, by elimination, backtracking, or refutation")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(true)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file to solve."))

        .arg(Arg::new("strategy")
            .long("strategy")
            .short('s')
            .value_name("STRATEGY")
            .value_parser(PossibleValuesParser::new(["elimination", "dp", "backtracking", "dpll", "refutation", "resolution"]))
            .required(false)
            .num_args(1)
            .help("The procedure to use.")
            .long_help("The procedure to use.
Default: dpll

- dp:         Eliminate atoms by resolution until no clauses or the empty clause remain.
- dpll:       Search for a satisfying valuation by unit propagation and backtracking.
- resolution: Close the formula under resolution until the empty clause is derived, or nothing new is derived."))

        .arg(Arg::new("all")
            .long("all")
            .short('a')
            .action(ArgAction::SetTrue)
            .conflicts_with("strategy")
            .help("Solve with each strategy in turn."))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .short('t')
            .value_name("SECONDS")
            .value_parser(value_parser!(f64))
            .allow_negative_numbers(true)
            .required(false)
            .num_args(1)
            .help(format!("The time limit of each solve, in seconds, where 0 is no limit.
Default: {}", defaults.time_limit.value.as_secs_f64())))

        .arg(Arg::new("max_depth")
            .long("max-depth")
            .value_name("DEPTH")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The maximum depth of a backtracking search.
Default: {}", defaults.max_depth.value)))

        .arg(Arg::new("clause_limit")
            .long("clause-limit")
            .value_name("CLAUSES")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The maximum number of clauses held during elimination or refutation.
Default: {}", defaults.clause_limit.value)))

        .arg(Arg::new("selection")
            .long("selection")
            .value_name("METHOD")
            .value_parser(PossibleValuesParser::new(["first", "frequent", "random"]))
            .required(false)
            .num_args(1)
            .help(format!("The method for choosing an atom to decide on, or to eliminate.
Default: {}", defaults.atom_selection.value)))

        .arg(Arg::new("seed")
            .long("seed")
            .value_name("SEED")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("The seed for random atom selection."))

        .arg(Arg::new("negative_first")
            .long("negative-first")
            .action(ArgAction::SetTrue)
            .help("On a decision, try the negative literal of the atom first."))

        .arg(Arg::new("split")
            .long("split")
            .action(ArgAction::SetTrue)
            .help("Search the two branches of the first decision in parallel."))

        .arg(Arg::new("model")
            .long("model")
            .short('m')
            .action(ArgAction::SetTrue)
            .help("Display a satisfying valuation, when one is found."))
}

/// The strategies to use, in order.
pub fn strategies_from_args(args: &ArgMatches) -> Vec<Strategy> {
    if args.get_flag("all") {
        return Strategy::ALL.to_vec();
    }

    match args
        .get_one::<String>("strategy")
        .and_then(|name| Strategy::from_str(name).ok())
    {
        Some(strategy) => vec![strategy],
        None => vec![Strategy::Backtracking],
    }
}

pub fn config_from_args(args: &ArgMatches) -> Result<Config, err::ConfigError> {
    let mut the_config = Config::default();

    if let Some(secs) = args.get_one::<f64>("time_limit") {
        match Duration::try_from_secs_f64(*secs) {
            Ok(limit) => the_config.time_limit.set(limit)?,
            Err(_) => return Err(err::ConfigError::OutOfRange(the_config.time_limit.name)),
        }
    };

    if let Some(depth) = args.get_one::<usize>("max_depth") {
        the_config.max_depth.set(*depth)?
    };

    if let Some(limit) = args.get_one::<usize>("clause_limit") {
        the_config.clause_limit.set(*limit)?
    };

    if let Some(method) = args
        .get_one::<String>("selection")
        .and_then(|name| AtomSelection::from_str(name).ok())
    {
        the_config.atom_selection.set(method)?
    };

    if let Some(seed) = args.get_one::<u64>("seed") {
        the_config.random_seed.set(*seed)?
    };

    if args.get_flag("negative_first") {
        the_config.polarity_first.set(false)?
    };

    if args.get_flag("split") {
        the_config.split.set(true)?
    };

    Ok(the_config)
}
