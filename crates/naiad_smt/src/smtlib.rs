//! SMT-LIB 2 script emission and model parsing.
//!
//! The emitted script declares every registered variable, asserts every
//! clause under its label, then issues `(check-sat)` and `(get-model)`.
//! Comparisons with a bit-vector operand use the unsigned bit-vector
//! operators with width-matched literals; everything else is integer
//! arithmetic.

use crate::constraint::{Constraint, Sort, VarDecl};
use crate::formula::Formula;
use crate::model::{Model, Value};
use crate::solver::{SolveResult, SolverError};
use crate::term::Term;
use std::collections::HashMap;

/// Renders a complete SMT-LIB 2 script for the given problem.
pub fn script(decls: &[VarDecl], constraints: &[Constraint]) -> String {
    let mut out = String::new();
    out.push_str("(set-option :produce-models true)\n");
    for decl in decls {
        out.push_str(&format!(
            "(declare-const {} {})\n",
            decl.name,
            sort_sexpr(decl.sort)
        ));
    }
    for c in constraints {
        out.push_str(&format!(
            "(assert (! {} :named {}))\n",
            formula_sexpr(&c.formula),
            c.label
        ));
    }
    out.push_str("(check-sat)\n(get-model)\n");
    out
}

fn sort_sexpr(sort: Sort) -> String {
    match sort {
        Sort::Int => "Int".to_string(),
        Sort::Bool => "Bool".to_string(),
        Sort::BitVec(w) => format!("(_ BitVec {w})"),
    }
}

/// Renders a formula as an s-expression.
pub fn formula_sexpr(f: &Formula) -> String {
    match f {
        Formula::Const(true) => "true".to_string(),
        Formula::Const(false) => "false".to_string(),
        Formula::BoolVar(name) => name.clone(),
        Formula::Eq(a, b) => comparison("=", "=", a, b),
        Formula::Le(a, b) => comparison("<=", "bvule", a, b),
        Formula::Lt(a, b) => comparison("<", "bvult", a, b),
        Formula::Not(inner) => format!("(not {})", formula_sexpr(inner)),
        Formula::And(fs) => nary("and", fs),
        Formula::Or(fs) => nary("or", fs),
        Formula::Implies(p, c) => {
            format!("(=> {} {})", formula_sexpr(p), formula_sexpr(c))
        }
    }
}

fn nary(op: &str, fs: &[Formula]) -> String {
    let mut out = format!("({op}");
    for f in fs {
        out.push(' ');
        out.push_str(&formula_sexpr(f));
    }
    out.push(')');
    out
}

fn comparison(int_op: &str, bv_op: &str, a: &Term, b: &Term) -> String {
    match bv_width(a).or_else(|| bv_width(b)) {
        Some(width) => format!(
            "({bv_op} {} {})",
            bv_operand(a, width),
            bv_operand(b, width)
        ),
        None => format!("({int_op} {} {})", term_sexpr(a), term_sexpr(b)),
    }
}

/// The bit-vector width of a term, if it is bit-vector sorted.
fn bv_width(t: &Term) -> Option<u32> {
    match t {
        Term::BitVecVar(_, w) => Some(*w),
        Term::Ite(_, a, b) => bv_width(a).or_else(|| bv_width(b)),
        _ => None,
    }
}

fn bv_operand(t: &Term, width: u32) -> String {
    match t {
        Term::Known(v) => {
            debug_assert!(*v >= 0, "bit-vector literal must be non-negative");
            format!("(_ bv{v} {width})")
        }
        Term::BitVecVar(name, _) => name.clone(),
        other => panic!("term {other:?} is not a bit-vector operand"),
    }
}

/// Renders an integer-sorted term as an s-expression.
pub fn term_sexpr(t: &Term) -> String {
    match t {
        Term::Known(v) if *v < 0 => format!("(- {})", -v),
        Term::Known(v) => v.to_string(),
        Term::IntVar(name) => name.clone(),
        Term::BitVecVar(name, _) => name.clone(),
        Term::Add(a, b) => format!("(+ {} {})", term_sexpr(a), term_sexpr(b)),
        Term::Sub(a, b) => format!("(- {} {})", term_sexpr(a), term_sexpr(b)),
        Term::Mul(a, b) => format!("(* {} {})", term_sexpr(a), term_sexpr(b)),
        Term::Ite(c, a, b) => format!(
            "(ite {} {} {})",
            formula_sexpr(c),
            term_sexpr(a),
            term_sexpr(b)
        ),
    }
}

/// Parses solver output: a `sat`/`unsat`/`unknown` verdict plus, on `sat`,
/// the `(get-model)` block.
///
/// Variables the solver leaves unassigned (don't-cares) are filled with sort
/// defaults so that result extraction always finds a value.
pub fn parse_output(output: &str, decls: &[VarDecl]) -> Result<SolveResult, SolverError> {
    let mut lines = output.lines().map(str::trim).filter(|l| !l.is_empty());
    let verdict = lines
        .next()
        .ok_or_else(|| SolverError::Protocol("empty solver output".to_string()))?;
    match verdict {
        "unsat" => Ok(SolveResult::Unsat),
        "unknown" | "timeout" => Ok(SolveResult::Unknown),
        "sat" => {
            let rest: String = output
                .lines()
                .skip_while(|l| l.trim() != "sat")
                .skip(1)
                .collect::<Vec<_>>()
                .join(" ");
            let model = parse_model(&rest, decls)?;
            Ok(SolveResult::Sat(model))
        }
        other => Err(SolverError::Protocol(format!(
            "unexpected solver verdict: {other}"
        ))),
    }
}

fn parse_model(body: &str, decls: &[VarDecl]) -> Result<Model, SolverError> {
    let sorts: HashMap<&str, Sort> = decls.iter().map(|d| (d.name.as_str(), d.sort)).collect();
    let spaced = body.replace('(', " ( ").replace(')', " ) ");
    let tokens: Vec<&str> = spaced.split_whitespace().collect();

    let mut model = Model::new();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i] != "define-fun" {
            i += 1;
            continue;
        }
        let name = tokens
            .get(i + 1)
            .ok_or_else(|| SolverError::Protocol("truncated define-fun".to_string()))?;
        // Skip past the (empty) argument list and the sort to the value.
        let mut j = i + 2;
        let mut depth = 0usize;
        let mut groups = 0usize;
        // Two balanced groups or atoms follow the name (args, sort), then the value.
        while j < tokens.len() && groups < 2 {
            match tokens[j] {
                "(" => depth += 1,
                ")" => {
                    depth -= 1;
                    if depth == 0 {
                        groups += 1;
                    }
                }
                _ if depth == 0 => groups += 1,
                _ => {}
            }
            j += 1;
        }
        let value = parse_value(&tokens, j)?;
        if let Some(sort) = sorts.get(name) {
            model.insert(*name, coerce(value, *sort));
        }
        i = j + 1;
    }

    for decl in decls {
        if model.get(&decl.name).is_none() {
            let default = match decl.sort {
                Sort::Int => Value::Int(0),
                Sort::Bool => Value::Bool(false),
                Sort::BitVec(_) => Value::BitVec(0),
            };
            model.insert(decl.name.clone(), default);
        }
    }
    Ok(model)
}

fn parse_value(tokens: &[&str], at: usize) -> Result<Value, SolverError> {
    let tok = tokens
        .get(at)
        .ok_or_else(|| SolverError::Protocol("truncated model value".to_string()))?;
    match *tok {
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        "(" => {
            // Negative integer literal: ( - N )
            if tokens.get(at + 1) == Some(&"-") {
                let n: i64 = tokens
                    .get(at + 2)
                    .and_then(|t| t.parse().ok())
                    .ok_or_else(|| {
                        SolverError::Protocol("malformed negative literal".to_string())
                    })?;
                Ok(Value::Int(-n))
            } else if tokens.get(at + 1) == Some(&"_") {
                // Bit-vector literal: ( _ bvN W )
                let bv = tokens.get(at + 2).unwrap_or(&"");
                let n: u64 = bv
                    .strip_prefix("bv")
                    .and_then(|t| t.parse().ok())
                    .ok_or_else(|| {
                        SolverError::Protocol(format!("malformed bit-vector literal {bv}"))
                    })?;
                Ok(Value::BitVec(n))
            } else {
                Err(SolverError::Protocol(
                    "unsupported model value expression".to_string(),
                ))
            }
        }
        tok if tok.starts_with("#b") => u64::from_str_radix(&tok[2..], 2)
            .map(Value::BitVec)
            .map_err(|_| SolverError::Protocol(format!("malformed binary literal {tok}"))),
        tok if tok.starts_with("#x") => u64::from_str_radix(&tok[2..], 16)
            .map(Value::BitVec)
            .map_err(|_| SolverError::Protocol(format!("malformed hex literal {tok}"))),
        tok => tok
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| SolverError::Protocol(format!("unrecognized model value {tok}"))),
    }
}

fn coerce(value: Value, sort: Sort) -> Value {
    match (value, sort) {
        (Value::Int(v), Sort::BitVec(_)) if v >= 0 => Value::BitVec(v as u64),
        (Value::BitVec(v), Sort::Int) => Value::Int(v as i64),
        (v, _) => v,
    }
}
