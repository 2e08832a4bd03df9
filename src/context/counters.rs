use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of atoms eliminated.
    pub eliminations: usize,

    /// A count of (fresh) resolvents generated, during elimination or refutation.
    pub resolvents: usize,

    /// A count of rounds of resolution.
    pub rounds: usize,

    /// A count of nodes visited during a backtracking search.
    pub nodes: usize,

    /// A count of all decisions made.
    pub decisions: usize,

    /// A count of literals set by unit propagation.
    pub propagations: usize,

    /// A count of conflicts found by unit propagation.
    pub conflicts: usize,

    /// The greatest depth of a node visited during a backtracking search.
    pub max_depth_seen: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl Counters {
    /// Adds the counts of `other`, as from a parallel search, to the counts of `self`.
    ///
    /// The time of `self` is kept.
    pub fn absorb(&mut self, other: &Counters) {
        self.eliminations += other.eliminations;
        self.resolvents += other.resolvents;
        self.rounds += other.rounds;
        self.nodes += other.nodes;
        self.decisions += other.decisions;
        self.propagations += other.propagations;
        self.conflicts += other.conflicts;
        self.max_depth_seen = self.max_depth_seen.max(other.max_depth_seen);
    }
}
