//! Textual set representations.
//!
//! | Set | Form |
//! |---|---|
//! | type-1 | `μ1/x1 + μ2/x2 + …` |
//! | general type-2 | `(g1/u1 + g2/u2 + …)/x1 + (…)/x2 + …` |
//! | interval type-2 | `[l1, h1]/x1 + [l2, h2]/x2 + …` |
//!
//! Whitespace is insignificant when parsing. `Display` honours a precision
//! given in the format string (`{:.2}`) and otherwise prints 3 decimals for
//! type-1 sets and 4 for type-2 sets.

use std::fmt;
use std::str::FromStr;

use crate::error::{FuzzySetError, Result};
use crate::general::GeneralType2FuzzySet;
use crate::interval::IntervalType2FuzzySet;
use crate::type1::Type1FuzzySet;

const TYPE1_DECIMALS: usize = 3;
const TYPE2_DECIMALS: usize = 4;

fn invalid(message: impl Into<String>) -> FuzzySetError {
    FuzzySetError::InvalidFormat(message.into())
}

fn parse_number(text: &str, what: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| invalid(format!("{} '{}' is not a number", what, text)))
}

fn compact(text: &str) -> Result<String> {
    let compacted: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compacted.is_empty() {
        return Err(invalid("representation is empty"));
    }
    Ok(compacted)
}

/// Parse one `grade/value` term.
fn parse_pair(term: &str, what: &str) -> Result<(f64, f64)> {
    let (grade, value) = term
        .split_once('/')
        .ok_or_else(|| invalid(format!("expected 'grade/{}', found '{}'", what, term)))?;
    Ok((parse_number(grade, "grade")?, parse_number(value, what)?))
}

/// Split a `term + term + …` sum, leaving exponent signs such as `1e+2`
/// inside their number.
fn split_sum(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut terms = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if c == '+' && i > 0 && !matches!(bytes[i - 1], b'e' | b'E') {
            terms.push(&text[start..i]);
            start = i + 1;
        }
    }
    terms.push(&text[start..]);
    terms
}

/// Split `(body)/x + (body)/x + …` style text into `(body, x)` pairs.
fn split_terms<'a>(text: &'a str, open: char, close: char) -> Result<Vec<(&'a str, &'a str)>> {
    let separator = format!("+{}", open);
    let mut terms = Vec::new();
    let mut rest = text;
    loop {
        let inner = rest
            .strip_prefix(open)
            .ok_or_else(|| invalid(format!("expected '{}' at '{}'", open, rest)))?;
        let end = inner
            .find(close)
            .ok_or_else(|| invalid(format!("unterminated '{}' at '{}'", open, rest)))?;
        let body = &inner[..end];
        let after = inner[end + close.len_utf8()..]
            .strip_prefix('/')
            .ok_or_else(|| invalid(format!("expected '/' after '{}{}{}'", open, body, close)))?;
        match after.find(separator.as_str()) {
            Some(next) => {
                terms.push((body, &after[..next]));
                rest = &after[next + 1..];
            }
            None => {
                terms.push((body, after));
                return Ok(terms);
            }
        }
    }
}

impl FromStr for Type1FuzzySet {
    type Err = FuzzySetError;

    fn from_str(s: &str) -> Result<Self> {
        let text = compact(s)?;
        let mut set = Type1FuzzySet::new();
        for term in split_sum(&text) {
            let (degree, x) = parse_pair(term, "domain value")?;
            set.add_element(x, degree)?;
        }
        Ok(set)
    }
}

impl fmt::Display for Type1FuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(TYPE1_DECIMALS);
        for (i, (x, degree)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{:.*}/{:.*}", precision, degree, precision, x)?;
        }
        Ok(())
    }
}

impl FromStr for GeneralType2FuzzySet {
    type Err = FuzzySetError;

    fn from_str(s: &str) -> Result<Self> {
        let text = compact(s)?;
        let mut set = GeneralType2FuzzySet::new();
        for (body, x) in split_terms(&text, '(', ')')? {
            let x = parse_number(x, "primary domain value")?;
            for term in split_sum(body) {
                let (grade, u) = parse_pair(term, "secondary domain value")?;
                set.add_element(x, u, grade)?;
            }
        }
        Ok(set)
    }
}

impl fmt::Display for GeneralType2FuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(TYPE2_DECIMALS);
        for (i, (x, secondary)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "({:.*})/{:.*}", precision, secondary, precision, x)?;
        }
        Ok(())
    }
}

impl FromStr for IntervalType2FuzzySet {
    type Err = FuzzySetError;

    fn from_str(s: &str) -> Result<Self> {
        let text = compact(s)?;
        let mut set = IntervalType2FuzzySet::new();
        for (body, x) in split_terms(&text, '[', ']')? {
            let x = parse_number(x, "primary domain value")?;
            let (lower, upper) = body
                .split_once(',')
                .ok_or_else(|| invalid(format!("expected 'lower,upper', found '{}'", body)))?;
            set.add_element_from_values(
                x,
                parse_number(lower, "lower membership")?,
                parse_number(upper, "upper membership")?,
            )?;
        }
        Ok(set)
    }
}

impl fmt::Display for IntervalType2FuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(TYPE2_DECIMALS);
        for (i, (x, interval)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            if let Some((lower, upper)) = interval.bounds() {
                write!(
                    f,
                    "[{:.*}, {:.*}]/{:.*}",
                    precision, lower, precision, upper, precision, x
                )?;
            }
        }
        Ok(())
    }
}
