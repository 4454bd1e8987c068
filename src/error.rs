use std::fmt;

/// Errors raised by the mining core. Every error is raised before any
/// output is produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Subset length bounds with `min_len > max_len`.
    InvalidRange { min_len: usize, max_len: usize },
    /// Binary split requested on an itemset that can't be split.
    InvalidInput { len: usize },
    /// A support, confidence or lift threshold outside its valid range.
    InvalidThreshold { name: &'static str, value: f64 },
    /// A rule whose antecedent or consequent has no support.
    DegenerateRule { itemset: String },
    /// Supports are undefined over zero transactions.
    NoTransactions,
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRange { min_len, max_len } => write!(
                f,
                "Invalid subset length range: min_len {} > max_len {}",
                min_len, max_len
            ),
            Error::InvalidInput { len } => write!(
                f,
                "Can't split an itemset of {} item(s) into two non-empty parts",
                len
            ),
            Error::InvalidThreshold { name, value } => {
                write!(f, "Invalid {} threshold: {}", name, value)
            }
            Error::DegenerateRule { itemset } => {
                write!(f, "Rule side {} has zero support", itemset)
            }
            Error::NoTransactions => write!(f, "No transactions to mine"),
        }
    }
}

impl std::error::Error for Error {}

// Threshold in [0,1]; rejects NaN.
pub(crate) fn check_ratio(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidThreshold { name, value })
    }
}
