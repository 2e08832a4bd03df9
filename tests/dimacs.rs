mod common;

use std::path::PathBuf;

use common::{cnf_dir, load_dimacs};

use triad_sat::{
    config::{Config, Strategy},
    context::Context,
    reports::Report,
    types::err,
};

fn formulas(subdir: &str) -> Vec<PathBuf> {
    let pattern = cnf_dir().join(subdir).join("*.cnf");
    let paths = glob::glob(&pattern.to_string_lossy())
        .expect("valid pattern")
        .flatten()
        .collect::<Vec<_>>();
    assert!(!paths.is_empty(), "no formulas in {subdir}");
    paths
}

mod fixtures {
    use super::*;

    #[test]
    fn satisfiable() {
        for path in formulas("sat") {
            let mut the_context = Context::from_config(Config::default());
            assert!(load_dimacs(&mut the_context, &path).is_ok(), "{path:?}");

            let report = the_context.solve(Strategy::Backtracking);
            let witness = report.witness().expect("a witness");
            assert!(the_context.formula().satisfied_by(witness), "{path:?}");

            assert_eq!(
                the_context.solve(Strategy::Elimination),
                Report::Satisfiable(None),
                "{path:?}"
            );
            assert!(
                the_context.solve(Strategy::Refutation).leans_satisfiable(),
                "{path:?}"
            );
        }
    }

    #[test]
    fn unsatisfiable() {
        for path in formulas("unsat") {
            let mut the_context = Context::from_config(Config::default());
            assert!(load_dimacs(&mut the_context, &path).is_ok(), "{path:?}");

            for strategy in Strategy::ALL {
                assert_eq!(
                    the_context.solve(strategy),
                    Report::Unsatisfiable,
                    "{path:?} {strategy}"
                );
            }
        }
    }

    #[test]
    fn counts() {
        let mut the_context = Context::from_config(Config::default());
        let counts = load_dimacs(&mut the_context, &cnf_dir().join("sat").join("multiline.cnf"))
            .expect("formula");

        assert_eq!(counts.expected, Some((5, 4)));
        assert_eq!(counts.read, 4);
        assert_eq!(the_context.formula().len(), 4);

        let mut the_context = Context::from_config(Config::default());
        let counts =
            load_dimacs(&mut the_context, &cnf_dir().join("sat").join("satlib_trailer.cnf"))
                .expect("formula");
        assert_eq!(counts.read, 3);
        assert!(!the_context.formula().contains_empty_clause());
    }
}

mod malformed {
    use super::*;

    #[test]
    fn invalid_token() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = b"p cnf 2 2\n1 2 0\n-1 two 0\n";
        assert_eq!(
            the_context.read_dimacs(dimacs.as_slice()),
            Err(err::ErrorKind::Parse(err::ParseError::Literal(3)))
        );
    }

    #[test]
    fn late_problem_line() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = b"1 2 0\np cnf 2 1\n";
        assert_eq!(
            the_context.read_dimacs(dimacs.as_slice()),
            Err(err::ErrorKind::Parse(err::ParseError::MisplacedProblem(2)))
        );
    }

    #[test]
    fn no_problem_line() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = b"1 -2 0\n2 0\n";
        let counts = the_context.read_dimacs(dimacs.as_slice()).expect("formula");
        assert_eq!(counts.expected, None);
        assert!(the_context.solve(Strategy::Backtracking).is_satisfiable());
    }
}
