//! Error types for problem construction

/// Errors raised while building a CEC2009 problem
///
/// Only construction can fail; evaluation never reports errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Cec2009Error {
    #[error(
        "CEC2009 test functions are only defined for prob_id in [1, 10], a prob_id of {0} was requested"
    )]
    InvalidProblemId(u32),

    #[error("CEC2009 test functions must have a non zero dimension: a dimension of 0 was requested")]
    ZeroDimension,

    #[error("unknown CEC2009 problem name: {0:?} (expected UF1..UF10 or CF1..CF10)")]
    UnknownProblemName(String),
}

impl Cec2009Error {
    /// True for the invalid-argument conditions raised by the constructor
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Cec2009Error::InvalidProblemId(_) | Cec2009Error::ZeroDimension
        )
    }
}

pub type Result<T> = std::result::Result<T, Cec2009Error>;
