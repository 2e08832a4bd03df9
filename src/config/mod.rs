/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
Each option is a [ConfigOption], which pairs a value with a name and the bounds of acceptable values.

```rust
# use triad_sat::config::Config;
let mut config = Config::default();

assert!(config.max_depth.set(10).is_ok());
assert!(config.max_depth.set(0).is_err());
assert_eq!(config.max_depth.value, 10);
```

The [Strategy] used for a solve is given when the solve is requested, rather than as part of a configuration.
*/

mod config_option;
pub use config_option::ConfigOption;

mod selection;
pub use selection::AtomSelection;

mod strategy;
pub use strategy::Strategy;

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The method for choosing an atom to decide on, or to eliminate.
    pub atom_selection: ConfigOption<AtomSelection>,

    /// The maximum number of clauses held during elimination or refutation.
    pub clause_limit: ConfigOption<usize>,

    /// The maximum depth of a search during backtracking.
    pub max_depth: ConfigOption<usize>,

    /// On a decision, try the positive literal of the atom before the negative literal.
    pub polarity_first: ConfigOption<bool>,

    /// The seed for [random](AtomSelection::Random) atom selection.
    pub random_seed: ConfigOption<u64>,

    /// Search the two branches of the first decision during backtracking in parallel.
    pub split: ConfigOption<bool>,

    /// The time limit for a solve, where a limit of zero is no limit.
    pub time_limit: ConfigOption<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            atom_selection: ConfigOption {
                name: "atom_selection",
                min: AtomSelection::MIN,
                max: AtomSelection::MAX,
                value: AtomSelection::First,
            },

            clause_limit: ConfigOption {
                name: "clause_limit",
                min: 1,
                max: usize::MAX,
                value: 1_000_000,
            },

            max_depth: ConfigOption {
                name: "max_depth",
                min: 1,
                max: usize::MAX,
                value: 3000,
            },

            polarity_first: ConfigOption {
                name: "polarity_first",
                min: false,
                max: true,
                value: true,
            },

            random_seed: ConfigOption {
                name: "random_seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },

            split: ConfigOption {
                name: "split",
                min: false,
                max: true,
                value: false,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(30),
            },
        }
    }
}

impl Config {
    /// The time limit, if some (non-zero) limit is set.
    pub fn time_limit(&self) -> Option<Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }
}
