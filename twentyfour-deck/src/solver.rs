//! # Exhaustive solver
//!
//! Decides whether four card values can reach the target by brute force:
//! repeatedly pick two remaining terms, combine them with every operator
//! (both operand orders for `-` and `/`), and recurse until one term is left.
//! Four cards give at most a few thousand leaves, so a full search is cheap
//! enough to run per draw.
//!
//! Arithmetic is done in `f64` and compared against the target with
//! [`EPSILON`]. Division by a divisor whose magnitude is below [`EPSILON`]
//! is skipped.

use crate::card::HAND_SIZE;
use smartstring::alias::String;
use std::collections::BTreeSet;

/// The value every solution must reach.
pub const TARGET: f64 = 24.0;

/// Tolerance for comparing against [`TARGET`] and for rejecting zero divisors.
pub const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone)]
struct Term {
    value: f64,
    repr: String,
}

impl Term {
    fn leaf(face: u8) -> Self {
        Self {
            value: f64::from(face),
            repr: String::from(face.to_string().as_str()),
        }
    }
}

/// Every way of combining `a` and `b` into one term.
fn combine(a: &Term, b: &Term) -> Vec<Term> {
    let mut out = Vec::with_capacity(6);
    let mut push = |value: f64, l: &Term, op: char, r: &Term| {
        let repr = format!("({} {} {})", l.repr, op, r.repr);
        out.push(Term {
            value,
            repr: repr.as_str().into(),
        });
    };
    push(a.value + b.value, a, '+', b);
    push(a.value * b.value, a, '*', b);
    push(a.value - b.value, a, '-', b);
    push(b.value - a.value, b, '-', a);
    if b.value.abs() > EPSILON {
        push(a.value / b.value, a, '/', b);
    }
    if a.value.abs() > EPSILON {
        push(b.value / a.value, b, '/', a);
    }
    out
}

/// Depth-first search over pairwise reductions.
///
/// Returns `true` as soon as one solution is found when `first_only` is set;
/// otherwise collects every solution into `found`.
fn search(terms: &[Term], found: &mut BTreeSet<String>, first_only: bool) -> bool {
    if let [last] = terms {
        if (last.value - TARGET).abs() < EPSILON {
            found.insert(last.repr.clone());
            return first_only;
        }
        return false;
    }
    for i in 0..terms.len() {
        for j in (i + 1)..terms.len() {
            let rest: Vec<Term> = terms
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, t)| t.clone())
                .collect();
            for combined in combine(&terms[i], &terms[j]) {
                let mut next = Vec::with_capacity(rest.len() + 1);
                next.extend(rest.iter().cloned());
                next.push(combined);
                if search(&next, found, first_only) {
                    return true;
                }
            }
        }
    }
    false
}

/// Returns `true` if some expression over `faces` evaluates to [`TARGET`].
///
/// ```rust
/// # use twentyfour_deck::solver::solvable;
/// assert!(solvable([8, 3, 8, 3]));
/// assert!(!solvable([1, 1, 1, 1]));
/// ```
pub fn solvable(faces: [u8; HAND_SIZE]) -> bool {
    let terms: Vec<Term> = faces.iter().map(|&f| Term::leaf(f)).collect();
    let mut found = BTreeSet::new();
    search(&terms, &mut found, true)
}

/// Returns every distinct fully parenthesised expression over `faces` that
/// evaluates to [`TARGET`], in lexicographic order.
///
/// Expressions use the ASCII operators `+ - * /`. Commutative rewrites of the
/// same expression may appear more than once in different textual forms.
pub fn solutions(faces: [u8; HAND_SIZE]) -> Vec<String> {
    let terms: Vec<Term> = faces.iter().map(|&f| Term::leaf(f)).collect();
    let mut found = BTreeSet::new();
    search(&terms, &mut found, false);
    log::debug!("{:?}: {} solutions", faces, found.len());
    found.into_iter().collect()
}
