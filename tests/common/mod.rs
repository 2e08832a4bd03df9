#![allow(dead_code)]

use std::{fs::File, io::BufReader, path::Path};

use rand::{rngs::StdRng, Rng, SeedableRng};

use triad_sat::{
    builder::DimacsCounts,
    config::{Config, Strategy},
    context::Context,
    reports::Report,
    structures::literal::CLiteral,
    types::err::{self},
};

/// Initialises a logger for tests, with output captured by the test harness.
///
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=refutation=debug cargo test`.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn cnf_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("cnf")
}

pub fn load_dimacs(context: &mut Context, path: &Path) -> Result<DimacsCounts, err::ErrorKind> {
    let file = match File::open(path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };
    context.read_dimacs(BufReader::new(&file))
}

pub fn context_with(clauses: &[Vec<CLiteral>], config: Config) -> Context {
    let mut the_context = Context::from_config(config);
    for clause in clauses {
        assert!(the_context.add_clause(clause.iter().copied()).is_ok());
    }
    the_context
}

/// A report from each strategy, in the order of [Strategy::ALL].
pub fn solve_each(clauses: &[Vec<CLiteral>], config: &Config) -> Vec<(Strategy, Report)> {
    let mut the_context = context_with(clauses, config.clone());
    Strategy::ALL
        .into_iter()
        .map(|strategy| (strategy, the_context.solve(strategy)))
        .collect()
}

/// Whether the witness of `report` makes some literal of each clause true.
pub fn witness_satisfies(clauses: &[Vec<CLiteral>], report: &Report) -> bool {
    let Some(witness) = report.witness() else {
        return false;
    };
    clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|literal| witness.value_of(literal.unsigned_abs()) == Some(literal.is_positive()))
    })
}

/// The pigeonhole formula for `pigeons` pigeons and `holes` holes.
///
/// The atom for pigeon `p` in hole `h` is `p * holes + h + 1`.
pub fn pigeonhole(pigeons: i32, holes: i32) -> Vec<Vec<CLiteral>> {
    let atom = |pigeon: i32, hole: i32| pigeon * holes + hole + 1;

    let mut clauses = Vec::default();

    for pigeon in 0..pigeons {
        clauses.push((0..holes).map(|hole| atom(pigeon, hole)).collect());
    }

    for hole in 0..holes {
        for first in 0..pigeons {
            for second in (first + 1)..pigeons {
                clauses.push(vec![-atom(first, hole), -atom(second, hole)]);
            }
        }
    }

    clauses
}

/// A random formula of `clause_count` clauses, each of three distinct atoms from `1..=atom_count`.
pub fn random_3sat(seed: u64, atom_count: i32, clause_count: usize) -> Vec<Vec<CLiteral>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut clauses = Vec::with_capacity(clause_count);

    while clauses.len() < clause_count {
        let mut clause: Vec<CLiteral> = Vec::with_capacity(3);
        while clause.len() < 3 {
            let atom = rng.random_range(1..=atom_count);
            if clause.iter().any(|literal| literal.abs() == atom) {
                continue;
            }
            match rng.random_bool(0.5) {
                true => clause.push(atom),
                false => clause.push(-atom),
            }
        }
        clauses.push(clause);
    }

    clauses
}
