//! DIMACS CNF loader, per `spec.md` §6: `c` comment lines are skipped,
//! exactly one `p cnf <nvars> <nclauses>` header is expected, every other
//! non-empty line is a whitespace-separated list of signed integers
//! terminated by a trailing `0` (ignored regardless of its surrounding
//! whitespace). Also writes the model line on a successful run, the way
//! the teacher's `sat::dimacs` writes `writeModel`.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::{fs, io::BufReader};

use super::error::{Result, SlsError};
use super::formula::Formula;
use super::literal::Lit;

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Formula> {
    let file = fs::File::open(path)?;
    parse(BufReader::new(file))
}

pub fn parse<R: BufRead>(reader: R) -> Result<Formula> {
    let mut n_vars = None;
    let mut n_clauses_declared = None;
    let mut clauses = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with('p') {
            let (nv, nc) = parse_header(line_no + 1, line)?;
            n_vars = Some(nv);
            n_clauses_declared = Some(nc);
            continue;
        }
        let nv = n_vars.ok_or_else(|| SlsError::Parse {
            line: line_no + 1,
            message: "clause line encountered before 'p cnf' header".to_string(),
        })?;
        let clause = parse_clause(line_no + 1, line, nv)?;
        if !clause.is_empty() {
            clauses.push(clause);
        }
    }

    let n_vars = n_vars.ok_or_else(|| SlsError::Parse {
        line: 0,
        message: "missing 'p cnf' header".to_string(),
    })?;

    if let Some(declared) = n_clauses_declared {
        if declared != clauses.len() {
            log::warn!(
                "DIMACS header declares {} clauses, {} found",
                declared,
                clauses.len()
            );
        }
    }

    Ok(Formula::new(clauses, n_vars))
}

fn parse_header(line_no: usize, line: &str) -> Result<(usize, usize)> {
    let mut it = line.split_whitespace();
    let p = it.next();
    let cnf = it.next();
    if p != Some("p") || cnf != Some("cnf") {
        return Err(SlsError::Parse {
            line: line_no,
            message: format!("malformed header: {:?}", line),
        });
    }
    let n_vars = it
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| SlsError::Parse {
            line: line_no,
            message: "header: expected <nvars>".to_string(),
        })?;
    let n_clauses = it
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| SlsError::Parse {
            line: line_no,
            message: "header: expected <nclauses>".to_string(),
        })?;
    Ok((n_vars, n_clauses))
}

fn parse_clause(line_no: usize, line: &str, n_vars: usize) -> Result<Vec<Lit>> {
    let mut lits = Vec::new();
    let mut saw_terminator = false;
    for tok in line.split_whitespace() {
        let x: i64 = tok.parse().map_err(|_| SlsError::Parse {
            line: line_no,
            message: format!("expected integer, found {:?}", tok),
        })?;
        if x == 0 {
            saw_terminator = true;
            break;
        }
        let mag = x.unsigned_abs() as usize;
        if mag == 0 || mag > n_vars {
            return Err(SlsError::Parse {
                line: line_no,
                message: format!("variable {} out of range [1, {}]", x, n_vars),
            });
        }
        lits.push(Lit::from_dimacs(x));
    }
    if !lits.is_empty() && !saw_terminator {
        return Err(SlsError::Parse {
            line: line_no,
            message: "clause missing terminating 0".to_string(),
        });
    }
    Ok(lits)
}

/// Write the model line: space-separated signed literals, one per
/// variable in variable order, as `spec.md` §6 requires.
pub fn write_model<W: Write>(out: &mut W, model: &[i64]) -> io::Result<()> {
    let rendered: Vec<String> = model.iter().map(|x| x.to_string()).collect();
    writeln!(out, "{}", rendered.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_clauses() {
        let src = "c a comment\np cnf 3 2\n1 -2 0\n2 3 -1 0\n";
        let f = parse(src.as_bytes()).unwrap();
        assert_eq!(f.n_vars(), 3);
        assert_eq!(f.n_clauses(), 2);
        assert_eq!(f.clause(0).len(), 2);
        assert_eq!(f.clause(1).len(), 3);
    }

    #[test]
    fn ignores_blank_lines_and_whitespace_layout() {
        let src = "p cnf 2 1\n\n   1    -2     0   \n";
        let f = parse(src.as_bytes()).unwrap();
        assert_eq!(f.n_clauses(), 1);
    }

    #[test]
    fn rejects_variable_out_of_range() {
        let src = "p cnf 2 1\n1 5 0\n";
        assert!(parse(src.as_bytes()).is_err());
    }

    #[test]
    fn rejects_missing_header() {
        let src = "1 -2 0\n";
        assert!(parse(src.as_bytes()).is_err());
    }

    #[test]
    fn rejects_clause_without_terminator() {
        let src = "p cnf 2 1\n1 -2\n";
        assert!(parse(src.as_bytes()).is_err());
    }
}
