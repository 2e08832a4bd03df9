use std::io::BufRead;

use crate::{
    builder::ClauseOk,
    context::GenericContext,
    dispatch::{self, Dispatch},
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::{self},
};

/// Counts from reading a DIMACS formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DimacsCounts {
    /// The atom and clause count given in the problem line, if present.
    pub expected: Option<(usize, usize)>,

    /// The count of clauses read.
    pub read: usize,

    /// The count of clauses added to the formula.
    pub added: usize,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Reads a DIMACS formula into the context.
    ///
    /// ```rust,no_run
    /// # use std::{fs::File, io::BufReader};
    /// # use triad_sat::{config::Config, context::Context};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let mut context = Context::from_config(Config::default());
    /// let file = File::open("formula.cnf")?;
    /// context.read_dimacs(BufReader::new(&file))?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// - Lines beginning with `c` are comments, and a line beginning with `%` ends the formula.
    /// - The problem line `p cnf <atoms> <clauses>` is optional, and the counts are advisory.
    /// - A clause ends with `0`, and may span multiple lines. A final clause without a `0` is read.
    /// - A token which is not an integer is an error, rather than skipped.
    ///
    /// ```rust
    /// # use triad_sat::context::Context;
    /// # use triad_sat::config::Config;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let dimacs = b"
    /// c An example
    /// p cnf 4 6
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2 3
    ///       0
    ///  2  1       0
    ///        3 -4
    /// ";
    ///
    /// let counts = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(counts.expected, Some((4, 6)));
    /// assert_eq!(counts.read, 6);
    /// assert_eq!(counts.added, 5);
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<DimacsCounts, err::ErrorKind> {
        let mut counts = DimacsCounts::default();

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: Vec<CLiteral> = Vec::default();

        let mut line_counter = 0;
        let mut formula_started = false;

        'line_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter + 1))),
            }

            let line = buffer.trim_start();
            match line.chars().next() {
                None | Some('c') => continue 'line_loop,

                Some('%') => break 'line_loop,

                Some('p') => {
                    if formula_started {
                        return Err(err::ErrorKind::from(err::ParseError::MisplacedProblem(
                            line_counter,
                        )));
                    }
                    let (atoms, clauses) = problem_specification(line)?;
                    counts.expected = Some((atoms, clauses));
                    log::debug!(target: targets::PARSER, "Expecting {atoms} atoms and {clauses} clauses.");
                    self.send_parser_dispatch(dispatch::Parser::Expected(atoms, clauses));
                }

                Some(_) => {
                    formula_started = true;
                    for item in line.split_whitespace() {
                        match item.parse::<CLiteral>() {
                            Ok(0) => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_read_clause(the_clause, &mut counts)?;
                            }
                            Ok(literal) => clause_buffer.push(literal),
                            Err(_) => {
                                log::error!(target: targets::PARSER, "Invalid literal {item} on line {line_counter}.");
                                return Err(err::ErrorKind::from(err::ParseError::Literal(
                                    line_counter,
                                )));
                            }
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            self.add_read_clause(clause_buffer, &mut counts)?;
        }

        if let Some((_, expected_clauses)) = counts.expected {
            if expected_clauses != counts.read {
                log::warn!(target: targets::PARSER, "Expected {expected_clauses} clauses, read {}.", counts.read);
            }
        }

        log::info!(target: targets::PARSER, "Read {} clauses, added {}.", counts.read, counts.added);
        self.send_parser_dispatch(dispatch::Parser::Counts(counts.read, counts.added));

        Ok(counts)
    }

    fn add_read_clause(
        &mut self,
        clause: Vec<CLiteral>,
        counts: &mut DimacsCounts,
    ) -> Result<(), err::ErrorKind> {
        counts.read += 1;
        if let ClauseOk::Added = self.add_clause(clause)? {
            counts.added += 1;
        }
        Ok(())
    }

    fn send_parser_dispatch(&self, parser: dispatch::Parser) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher(&Dispatch::Parser(parser));
        }
    }
}

/// The atom and clause count of a problem line, `p cnf <atoms> <clauses>`.
fn problem_specification(line: &str) -> Result<(usize, usize), err::ParseError> {
    let mut problem_details = line.split_whitespace();

    match (problem_details.next(), problem_details.next()) {
        (Some("p"), Some("cnf")) => {}
        _ => return Err(err::ParseError::ProblemSpecification),
    }

    let mut count = || -> Result<usize, err::ParseError> {
        match problem_details.next().map(|string| string.parse::<usize>()) {
            Some(Ok(count)) => Ok(count),
            _ => Err(err::ParseError::ProblemSpecification),
        }
    };

    let atoms = count()?;
    let clauses = count()?;
    Ok((atoms, clauses))
}
