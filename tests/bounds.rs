mod common;

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use common::{context_with, pigeonhole};

use triad_sat::{
    structures::literal::CLiteral,
    config::{Config, Strategy},
    dispatch::Dispatch,
    reports::{Inconclusive, Report},
};

/// The unit clause of atom 1 with a chain of implications from each atom to the next, up to `length`.
fn implication_chain(length: CLiteral) -> Vec<Vec<CLiteral>> {
    let mut clauses = vec![vec![1]];
    for atom in 1..length {
        clauses.push(vec![-atom, atom + 1]);
    }
    clauses
}

mod deadline {
    use super::*;

    #[test]
    fn long_chain_is_propagated_quickly() {
        let clauses = implication_chain(20_000);

        let mut config = Config::default();
        config.time_limit.value = Duration::from_millis(100);

        let mut the_context = context_with(&clauses, config);

        let start = Instant::now();
        let report = the_context.solve(Strategy::Backtracking);
        let elapsed = start.elapsed();

        assert!(
            matches!(
                report,
                Report::Satisfiable(_) | Report::Inconclusive(Inconclusive::DeadlineExceeded)
            ),
            "{report}"
        );
        assert!(elapsed < Duration::from_secs(2), "{elapsed:?}");
    }

    #[test]
    fn deadline_within_propagation() {
        let clauses = implication_chain(20_000);

        let mut config = Config::default();
        config.time_limit.value = Duration::from_millis(100);

        let mut the_context = context_with(&clauses, config);

        // Each check of the governor takes at least a millisecond.
        the_context.set_callback_terminate(Arc::new(|| {
            std::thread::sleep(Duration::from_millis(1));
            false
        }));

        let start = Instant::now();
        let report = the_context.solve(Strategy::Backtracking);
        let elapsed = start.elapsed();

        assert_eq!(report, Report::Inconclusive(Inconclusive::DeadlineExceeded));
        assert!(elapsed < Duration::from_secs(2), "{elapsed:?}");
        assert_eq!(the_context.counters.nodes, 1);
        assert!(the_context.counters.propagations < 20_000);
    }

    #[test]
    fn each_strategy_returns_near_the_deadline() {
        // Large enough that no strategy concludes in the time given.
        let clauses = pigeonhole(11, 10);

        let mut config = Config::default();
        config.time_limit.value = Duration::from_millis(200);
        config.clause_limit.value = usize::MAX;

        let mut the_context = context_with(&clauses, config);

        for strategy in Strategy::ALL {
            let start = Instant::now();
            let report = the_context.solve(strategy);
            let elapsed = start.elapsed();

            assert_eq!(
                report,
                Report::Inconclusive(Inconclusive::DeadlineExceeded),
                "{strategy}"
            );
            assert!(elapsed < Duration::from_secs(10), "{strategy}: {elapsed:?}");
        }
    }
}

mod cancellation {
    use super::*;

    #[test]
    fn terminate_after_some_nodes() {
        let clauses = pigeonhole(10, 9);

        let mut config = Config::default();
        config.time_limit.value = Duration::from_secs(0);

        let mut the_context = context_with(&clauses, config);

        let nodes = Arc::new(AtomicUsize::new(0));
        let node_count = nodes.clone();
        the_context.set_dispatcher(Arc::new(move |dispatch: &Dispatch| {
            if let Dispatch::Node { .. } = dispatch {
                node_count.fetch_add(1, Ordering::Relaxed);
            }
        }));

        let watched = nodes.clone();
        the_context.set_callback_terminate(Arc::new(move || watched.load(Ordering::Relaxed) > 500));

        assert_eq!(
            the_context.solve(Strategy::Backtracking),
            Report::Inconclusive(Inconclusive::Cancelled)
        );
        assert!(nodes.load(Ordering::Relaxed) <= 502);
    }

    #[test]
    fn terminate_within_propagation() {
        let clauses = implication_chain(20_000);
        let mut the_context = context_with(&clauses, Config::default());

        let calls = Arc::new(AtomicUsize::new(0));
        let call_count = calls.clone();
        the_context.set_callback_terminate(Arc::new(move || {
            call_count.fetch_add(1, Ordering::Relaxed) > 100
        }));

        assert_eq!(
            the_context.solve(Strategy::Backtracking),
            Report::Inconclusive(Inconclusive::Cancelled)
        );
        assert_eq!(the_context.counters.nodes, 1);
        assert!(the_context.counters.propagations <= 100);
    }

    #[test]
    fn terminate_split() {
        let clauses = pigeonhole(10, 9);

        let mut config = Config::default();
        config.split.value = true;

        let mut the_context = context_with(&clauses, config);

        let calls = Arc::new(AtomicUsize::new(0));
        let call_count = calls.clone();
        the_context.set_callback_terminate(Arc::new(move || {
            call_count.fetch_add(1, Ordering::Relaxed) > 200
        }));

        assert_eq!(
            the_context.solve(Strategy::Backtracking),
            Report::Inconclusive(Inconclusive::Cancelled)
        );
    }
}

mod clause_limit {
    use super::*;

    #[test]
    fn elimination_and_refutation() {
        let clauses = pigeonhole(6, 5);

        let mut config = Config::default();
        config.clause_limit.value = 500;
        config.time_limit.value = Duration::from_secs(60);

        let mut the_context = context_with(&clauses, config);

        for strategy in [Strategy::Elimination, Strategy::Refutation] {
            assert_eq!(
                the_context.solve(strategy),
                Report::Inconclusive(Inconclusive::ClauseLimit),
                "{strategy}"
            );
        }
    }
}

mod dispatches {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn rounds_and_finish() {
        let clauses = vec![vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]];
        let mut the_context = context_with(&clauses, Config::default());

        let seen = Arc::new(Mutex::new(Vec::default()));
        let sink = seen.clone();
        the_context.set_dispatcher(Arc::new(move |dispatch: &Dispatch| {
            if let Ok(mut seen) = sink.lock() {
                seen.push(dispatch.clone());
            }
        }));

        assert_eq!(the_context.solve(Strategy::Refutation), Report::Unsatisfiable);

        let seen = seen.lock().unwrap();
        assert!(matches!(seen.first(), Some(Dispatch::Round { round: 1, .. })));
        assert_eq!(
            seen.last(),
            Some(&Dispatch::Finish(Strategy::Refutation, Report::Unsatisfiable))
        );
    }
}
