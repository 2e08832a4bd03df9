/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for following a solve and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [elimination](crate::procedures::elimination)
    pub const ELIMINATION: &str = "elimination";

    /// Logs related to [unit propagation](crate::procedures::propagation)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [backtracking](crate::procedures::backtracking)
    pub const BACKTRACKING: &str = "backtracking";

    /// Logs related to a [parallel split](crate::procedures::parallel) of backtracking.
    pub const PARALLEL: &str = "parallel";

    /// Logs related to [refutation](crate::procedures::refutation)
    pub const REFUTATION: &str = "refutation";

    /// Logs related to the [governor](crate::governor)
    pub const GOVERNOR: &str = "governor";

    /// Logs related to reading a formula
    pub const PARSER: &str = "parser";
}
