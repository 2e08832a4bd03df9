/*!
An atom (aka. a 'variable').

Atoms are positive integers, read directly from the literals of a formula.
So, the atoms of a formula need not be contiguous, and the atoms `1`, `7`, and `30` may be the only atoms of some formula.

```rust
# use triad_sat::structures::atom::Atom;
# use triad_sat::structures::literal::{CLiteral, Literal};
let literal: CLiteral = -30;
let atom: Atom = literal.atom();

assert_eq!(atom, 30);
```

# Notes
- `0` is not an atom. In DIMACS `0` terminates a clause, and so `0` may not appear within a clause.
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;
