//! Numeric range comparators for filter expressions
//!
//! Grammar: an optional comparison operator followed by an integer:
//! `30`, `=30`, `>10`, `>=10`, `<25`, `<=25`. Anything else parses to
//! None so the caller can degrade to an always-false predicate.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::digit1;
use nom::combinator::{all_consuming, map, map_res, opt};
use nom::{IResult, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
}

/// A parsed comparison against a single integer bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeComparator {
    pub op: RangeOp,
    pub value: i32,
}

fn operator(input: &str) -> IResult<&str, RangeOp> {
    map(
        opt(alt((
            map(tag("<="), |_| RangeOp::Le),
            map(tag(">="), |_| RangeOp::Ge),
            map(tag("<"), |_| RangeOp::Lt),
            map(tag(">"), |_| RangeOp::Gt),
            map(tag("="), |_| RangeOp::Eq),
        ))),
        |op| op.unwrap_or(RangeOp::Eq),
    )
    .parse(input)
}

fn bound(input: &str) -> IResult<&str, i32> {
    map_res(digit1, str::parse::<i32>).parse(input)
}

impl RangeComparator {
    /// Parse a range expression; None on malformed input
    pub fn parse(input: &str) -> Option<RangeComparator> {
        all_consuming((operator, bound))
            .parse(input.trim())
            .ok()
            .map(|(_, (op, value))| RangeComparator { op, value })
    }

    pub fn matches(&self, candidate: i32) -> bool {
        match self.op {
            RangeOp::Lt => candidate < self.value,
            RangeOp::Le => candidate <= self.value,
            RangeOp::Gt => candidate > self.value,
            RangeOp::Ge => candidate >= self.value,
            RangeOp::Eq => candidate == self.value,
        }
    }
}
