//! Conditional branching: a two-way branch, a branch with no alternative,
//! and an else-if chain over a scoped value.

use serde::{Deserialize, Serialize};

use crate::{LessonError, Transcript};

/// Inputs for the conditions lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionsInput {
    /// Number tested for parity.
    pub parity_of: i64,
    /// Left-hand side of the divisibility check.
    pub dividend: i64,
    /// Right-hand side of the divisibility check.
    pub divisor: i64,
    /// Value bound in the scoped initializer and classified by magnitude.
    pub scoped: i64,
}

impl Default for ConditionsInput {
    fn default() -> Self {
        Self {
            parity_of: 7,
            dividend: 8,
            divisor: 4,
            scoped: 9,
        }
    }
}

/// Outcome of the two-way branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Even iff `n % 2 == 0`.
    pub fn of(n: i64) -> Self {
        if n % 2 == 0 { Parity::Even } else { Parity::Odd }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

/// Outcome of the else-if chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Magnitude {
    Negative,
    SingleDigit,
    MultipleDigits,
}

impl Magnitude {
    /// Classifies `n`; branches are tried top to bottom and the first true
    /// one wins.
    pub fn classify(n: i64) -> Self {
        if n < 0 {
            Magnitude::Negative
        } else if n < 10 {
            Magnitude::SingleDigit
        } else {
            Magnitude::MultipleDigits
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Magnitude::Negative => "is negative",
            Magnitude::SingleDigit => "has 1 digit",
            Magnitude::MultipleDigits => "has multiple digits",
        }
    }
}

/// Returns whether `divisor` divides `dividend` evenly.
///
/// # Errors
///
/// Returns [`LessonError::DivisionByZero`] when `divisor` is zero.
pub fn divisible_by(dividend: i64, divisor: i64) -> Result<bool, LessonError> {
    dividend
        .checked_rem(divisor)
        .map(|rem| rem == 0)
        // i64::MIN % -1 overflows but is divisible.
        .or_else(|| (divisor == -1).then_some(true))
        .ok_or(LessonError::DivisionByZero { dividend })
}

/// Result of running the conditions lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionsReport {
    pub input: ConditionsInput,
    pub parity: Parity,
    pub divisible: bool,
    pub magnitude: Magnitude,
}

impl ConditionsReport {
    pub fn transcript(&self) -> Transcript {
        let input = &self.input;
        let mut out = Transcript::new();

        out.line(format!("{} is {}", input.parity_of, self.parity.as_str()));

        // No else branch: nothing is printed when the check fails.
        if self.divisible {
            out.line(format!(
                "{} is divisible by {}",
                input.dividend, input.divisor
            ));
        }

        out.line(format!("{} {}", input.scoped, self.magnitude.describe()));
        out
    }
}

/// Runs the conditions lesson.
///
/// # Errors
///
/// Fails only when the configured divisor is zero.
pub fn run(input: &ConditionsInput) -> Result<ConditionsReport, LessonError> {
    let parity = Parity::of(input.parity_of);
    let divisible = divisible_by(input.dividend, input.divisor)?;
    let magnitude = Magnitude::classify(input.scoped);

    tracing::debug!(
        parity = parity.as_str(),
        divisible,
        magnitude = ?magnitude,
        "conditions evaluated"
    );

    Ok(ConditionsReport {
        input: input.clone(),
        parity,
        divisible,
        magnitude,
    })
}
