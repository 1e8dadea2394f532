//! # tour: small lessons on everyday language features
//!
//! Each lesson is a self-contained demonstration that produces a structured
//! report and the transcript of lines it would print:
//!
//! - [`conditions`]: if / else-if / else, and a branch with no alternative
//! - [`maps`]: insert, lookup, existence check, delete, literal construction
//! - [`runes`]: byte length versus code point count, built-in and manual
//!   UTF-8 decoding ([`utf8`])
//!
//! # Example
//!
//! ```
//! use tour::runes::{self, RunesInput};
//!
//! let report = runes::run(&RunesInput::default());
//! assert_eq!(report.byte_len, 4);
//! assert_eq!(report.code_point_count, 3);
//! assert!(report.decoders_agree());
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Serialize;

pub mod conditions;
mod error;
pub mod maps;
pub mod runes;
pub mod utf8;

pub use error::LessonError;

// ============================================================================
// Transcript
// ============================================================================

/// Ordered lines of output produced by a lesson.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Lesson catalog
// ============================================================================

/// The available lessons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lesson {
    Conditions,
    Maps,
    Runes,
}

impl Lesson {
    /// Every lesson, in presentation order.
    pub const ALL: [Lesson; 3] = [Lesson::Conditions, Lesson::Maps, Lesson::Runes];

    pub fn name(self) -> &'static str {
        match self {
            Lesson::Conditions => "conditions",
            Lesson::Maps => "maps",
            Lesson::Runes => "runes",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Lesson::Conditions => "Branching with if, else if, and else",
            Lesson::Maps => "Insert, look up, and delete map entries",
            Lesson::Runes => "Bytes versus code points in UTF-8 text",
        }
    }
}

impl Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lesson::ALL
            .into_iter()
            .find(|lesson| lesson.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LessonError::UnknownLesson(s.to_string()))
    }
}

/// Inputs for every lesson.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub conditions: conditions::ConditionsInput,
    pub maps: maps::MapsInput,
    pub runes: runes::RunesInput,
}

impl Lesson {
    /// Runs this lesson against its slice of `inputs`.
    ///
    /// # Errors
    ///
    /// Propagates the lesson's own error; only configured inputs can fail.
    pub fn run(self, inputs: &Inputs) -> Result<Report, LessonError> {
        tracing::debug!(lesson = self.name(), "running lesson");
        Ok(match self {
            Lesson::Conditions => Report::Conditions(conditions::run(&inputs.conditions)?),
            Lesson::Maps => Report::Maps(maps::run(&inputs.maps)),
            Lesson::Runes => Report::Runes(runes::run(&inputs.runes)),
        })
    }
}

/// Report produced by any lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "lesson", rename_all = "kebab-case")]
pub enum Report {
    Conditions(conditions::ConditionsReport),
    Maps(maps::MapsReport),
    Runes(runes::RunesReport),
}

impl Report {
    pub fn lesson(&self) -> Lesson {
        match self {
            Report::Conditions(_) => Lesson::Conditions,
            Report::Maps(_) => Lesson::Maps,
            Report::Runes(_) => Lesson::Runes,
        }
    }

    pub fn transcript(&self) -> Transcript {
        match self {
            Report::Conditions(report) => report.transcript(),
            Report::Maps(report) => report.transcript(),
            Report::Runes(report) => report.transcript(),
        }
    }
}

#[cfg(test)]
mod tests;
