/*!
The governor of a solve.

Every procedure is run under a governor, which enforces the limits of a [configuration](crate::config::Config) and carries [counters](crate::context::Counters) and callbacks through the procedure.

A procedure calls [check](Governor::check) at the start of each unit of work, e.g. each elimination of an atom, each node of a search, and each round of resolution (and, within a round, at each clause).
So, a solve will not continue past its deadline by more than a unit of work.

```rust
# use std::time::Duration;
# use triad_sat::config::Config;
# use triad_sat::governor::Governor;
# use triad_sat::reports::Inconclusive;
let mut config = Config::default();
config.time_limit.value = Duration::from_nanos(1);

let mut governor = Governor::from_config(&config);
std::thread::sleep(Duration::from_millis(1));

assert_eq!(governor.check(), Err(Inconclusive::DeadlineExceeded));
```

Checks return a [Result], so within a procedure `governor.check()?` concludes the procedure with the relevant [Inconclusive] reason.
*/

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use crate::{
    config::Config,
    context::{callbacks::CallbackTerminate, Counters},
    dispatch::{Dispatch, Dispatcher},
    misc::log::targets::{self},
    reports::Inconclusive,
};

/// Limits, counters, and callbacks for a solve.
pub struct Governor {
    start: Instant,
    deadline: Option<Instant>,

    /// The maximum depth of a backtracking search.
    pub max_depth: usize,

    /// The maximum number of clauses held during elimination or refutation.
    pub clause_limit: usize,

    cancel: Arc<AtomicBool>,
    dispatcher: Option<Arc<Dispatcher>>,
    terminate: Option<Arc<CallbackTerminate>>,

    pub counters: Counters,
}

impl Governor {
    /// A governor with the limits of the given config, starting now.
    pub fn from_config(config: &Config) -> Self {
        let start = Instant::now();
        Governor {
            start,
            deadline: config.time_limit().and_then(|limit| start.checked_add(limit)),
            max_depth: config.max_depth.value,
            clause_limit: config.clause_limit.value,
            cancel: Arc::new(AtomicBool::new(false)),
            dispatcher: None,
            terminate: None,
            counters: Counters::default(),
        }
    }

    pub fn with_dispatcher(mut self, dispatcher: Option<Arc<Dispatcher>>) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn with_terminate(mut self, terminate: Option<Arc<CallbackTerminate>>) -> Self {
        self.terminate = terminate;
        self
    }

    /// A governor sharing the start, limits, and callbacks of `self`, with fresh counters, cancelled through `cancel`.
    pub fn fork(&self, cancel: Arc<AtomicBool>) -> Self {
        Governor {
            start: self.start,
            deadline: self.deadline,
            max_depth: self.max_depth,
            clause_limit: self.clause_limit,
            cancel,
            dispatcher: self.dispatcher.clone(),
            terminate: self.terminate.clone(),
            counters: Counters::default(),
        }
    }

    /// Ok, if the solve may continue, and otherwise the reason the solve must conclude.
    pub fn check(&mut self) -> Result<(), Inconclusive> {
        if self.cancel.load(Ordering::Relaxed) {
            return Err(Inconclusive::Cancelled);
        }

        if let Some(terminate) = &self.terminate {
            if terminate() {
                log::info!(target: targets::GOVERNOR, "Terminated by callback.");
                self.cancel.store(true, Ordering::Relaxed);
                return Err(Inconclusive::Cancelled);
            }
        }

        if self.deadline.is_some_and(|deadline| Instant::now() > deadline) {
            log::warn!(target: targets::GOVERNOR, "Time limit exceeded after {:?}.", self.elapsed());
            return Err(Inconclusive::DeadlineExceeded);
        }

        Ok(())
    }

    /// Ok, if the count of clauses is within the clause limit.
    pub fn check_clauses(&self, count: usize) -> Result<(), Inconclusive> {
        match count > self.clause_limit {
            true => {
                log::warn!(target: targets::GOVERNOR, "Clause limit exceeded with {count} clauses.");
                Err(Inconclusive::ClauseLimit)
            }
            false => Ok(()),
        }
    }

    /// Requests any procedure checking this governor (or a fork sharing the cancellation) to conclude.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Sends a dispatch, if a dispatcher is present.
    pub fn dispatch(&self, dispatch: Dispatch) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher(&dispatch);
        }
    }
}
