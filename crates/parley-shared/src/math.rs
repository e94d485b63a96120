//! Arithmetic and percentage detection embedded in natural text.
//!
//! Patterns are tried in a fixed order and the first structural match wins,
//! regardless of whatever else the message says:
//! 1. "what is" / "calculate" followed by `<num> <op> <num>`
//! 2. bare `<num> <op> <num>`
//! 3. `<num>% of <num>`
//!
//! Numbers are ASCII digits only. A match whose operands do not parse is
//! skipped and the search continues.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Reply when the right-hand side of a division is zero
pub const DIVISION_BY_ZERO_REPLY: &str =
    "🚫 I can't divide by zero! Division by zero is undefined in mathematics. Try a different calculation?";

/// Reply when an operand or the result does not fit in a finite number
pub const OUT_OF_RANGE_REPLY: &str =
    "🚫 Those numbers are too large for me to calculate. Try something smaller?";

/// Invitation appended to every computed result
pub const MATH_FOLLOWUP: &str = "Need help with another calculation? Just ask!";

static PHRASED_BINARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:what\s+is|calculate)\s+(-?[0-9]+(?:\.[0-9]+)?)\s*([+\-*/])\s*(-?[0-9]+(?:\.[0-9]+)?)")
        .unwrap()
});

static BARE_BINARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-?[0-9]+(?:\.[0-9]+)?)\s*([+\-*/])\s*(-?[0-9]+(?:\.[0-9]+)?)").unwrap());

static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(-?[0-9]+(?:\.[0-9]+)?)\s*%\s*of\s+(-?[0-9]+(?:\.[0-9]+)?)").unwrap());

/// Binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// None when dividing by zero
    pub fn apply(&self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Sub => Some(lhs - rhs),
            Self::Mul => Some(lhs * rhs),
            Self::Div if rhs == 0.0 => None,
            Self::Div => Some(lhs / rhs),
        }
    }
}

/// A recognised calculation
#[derive(Debug, Clone, PartialEq)]
pub enum Calculation {
    Binary {
        lhs: f64,
        op: Operator,
        rhs: f64,
        /// None when the expression divides by zero
        value: Option<f64>,
    },
    Percentage {
        percent: f64,
        base: f64,
        value: f64,
    },
}

impl Calculation {
    pub fn is_percentage(&self) -> bool {
        matches!(self, Calculation::Percentage { .. })
    }

    /// False when an operand or the result overflowed to inf or NaN
    pub fn is_finite(&self) -> bool {
        match self {
            Calculation::Binary { lhs, rhs, value, .. } => {
                lhs.is_finite() && rhs.is_finite() && value.map_or(true, f64::is_finite)
            }
            Calculation::Percentage {
                percent,
                base,
                value,
            } => percent.is_finite() && base.is_finite() && value.is_finite(),
        }
    }

    /// User-facing reply for this calculation
    pub fn render(&self) -> String {
        if !self.is_finite() {
            return OUT_OF_RANGE_REPLY.to_string();
        }
        match self {
            Calculation::Binary { value: None, .. } => DIVISION_BY_ZERO_REPLY.to_string(),
            Calculation::Binary {
                lhs,
                op,
                rhs,
                value: Some(value),
            } => format!(
                "🧮 **{} {} {} = {}**\n\n{}",
                format_number(*lhs),
                op.symbol(),
                format_number(*rhs),
                format_number(*value),
                MATH_FOLLOWUP
            ),
            Calculation::Percentage {
                percent,
                base,
                value,
            } => format!(
                "🧮 **{}% of {} = {}**\n\n{}",
                format_number(*percent),
                format_number(*base),
                format_number(*value),
                MATH_FOLLOWUP
            ),
        }
    }
}

/// Regex-driven arithmetic evaluator
#[derive(Debug, Default, Clone, Copy)]
pub struct MathEvaluator;

impl MathEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Find the first calculation in the text, if any
    pub fn detect(&self, text: &str) -> Option<Calculation> {
        PHRASED_BINARY
            .captures_iter(text)
            .find_map(|caps| binary_from(&caps))
            .or_else(|| BARE_BINARY.captures_iter(text).find_map(|caps| binary_from(&caps)))
            .or_else(|| PERCENTAGE.captures_iter(text).find_map(|caps| percentage_from(&caps)))
    }

    /// Rendered reply, or None so the next stage can try
    pub fn evaluate(&self, text: &str) -> Option<String> {
        self.detect(text).map(|calc| calc.render())
    }
}

fn binary_from(caps: &Captures<'_>) -> Option<Calculation> {
    let lhs = caps[1].parse::<f64>().ok()?;
    let op = Operator::from_symbol(&caps[2])?;
    let rhs = caps[3].parse::<f64>().ok()?;
    Some(Calculation::Binary {
        lhs,
        op,
        rhs,
        value: op.apply(lhs, rhs),
    })
}

fn percentage_from(caps: &Captures<'_>) -> Option<Calculation> {
    let percent = caps[1].parse::<f64>().ok()?;
    let base = caps[2].parse::<f64>().ok()?;
    Some(Calculation::Percentage {
        percent,
        base,
        value: percent / 100.0 * base,
    })
}

/// Shortest round-trip formatting (4.0 prints as "4")
pub fn format_number(n: f64) -> String {
    format!("{}", n)
}
