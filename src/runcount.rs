//! Run-count resolution from the command line.
//!
//! The binary takes one optional positional argument: the number of timed
//! iterations per variant. An absent or unparseable argument resolves to
//! [`DEFAULT_RUNS`]; a value that parses but is not positive is the
//! program's single fatal error.

use thiserror::Error;

/// Default number of timed iterations per variant.
pub const DEFAULT_RUNS: usize = 1000;

/// Where a resolved run count came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// No argument was supplied.
    Default,
    /// The argument parsed as a positive integer.
    Argument,
    /// The argument did not parse; the default was substituted.
    Fallback {
        /// The rejected argument text, for the warning message.
        rejected: String,
    },
}

/// A resolved run count plus its provenance.
///
/// Provenance lets the caller emit the fallback warning exactly once;
/// this module never writes to any stream itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunCount {
    /// Number of timed iterations each variant performs.
    pub runs: usize,
    /// How the value was obtained.
    pub source: Source,
}

/// Rejected run-count argument.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RunCountError {
    /// The argument parsed as an integer but was zero or negative.
    #[error("number of runs must be greater than 0 (got {0})")]
    NonPositive(i64),
}

/// Resolve the run count from the first positional argument, if any.
///
/// # Errors
///
/// [`RunCountError::NonPositive`] when the argument parses but is `<= 0`.
/// An unparseable argument is not an error: it resolves to the default with
/// [`Source::Fallback`] provenance so the caller can warn and continue.
pub fn resolve(arg: Option<&str>) -> Result<RunCount, RunCountError> {
    let Some(raw) = arg else {
        return Ok(RunCount {
            runs: DEFAULT_RUNS,
            source: Source::Default,
        });
    };

    match raw.parse::<i64>() {
        Ok(n) if n > 0 => {
            #[expect(clippy::cast_sign_loss, reason = "n > 0 checked above")]
            let runs = n as usize;
            Ok(RunCount {
                runs,
                source: Source::Argument,
            })
        }
        Ok(n) => Err(RunCountError::NonPositive(n)),
        Err(_) => Ok(RunCount {
            runs: DEFAULT_RUNS,
            source: Source::Fallback {
                rejected: raw.to_owned(),
            },
        }),
    }
}
