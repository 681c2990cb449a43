extern crate csv;

use std::error;
use std::fmt;

/// Faults that abort a batch run. Zero-magnitude vectors are not an error,
/// they score 0 by convention in the similarity engine.
#[derive(Debug)]
pub enum Error {
    /// The corpus source could not be read or parsed, or a row is missing
    /// the coin id or description column.
    CorpusLoad(csv::Error),
    /// Two corpus rows carry the same coin id. Ids are the output keys, so
    /// the corpus is rejected instead of silently overwriting one row.
    DuplicateCoin(String),
    /// A ranking was requested for a coin id that is not in the corpus.
    UnknownCoin(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::CorpusLoad(ref cause) =>
                write!(f, "corpus could not be loaded: {}", cause),
            Error::DuplicateCoin(ref coin_id) =>
                write!(f, "duplicate coin id in corpus: {}", coin_id),
            Error::UnknownCoin(ref coin_id) =>
                write!(f, "unknown coin id: {}", coin_id),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(error::Error + 'static)> {
        match *self {
            Error::CorpusLoad(ref cause) => Some(cause),
            _ => None,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(cause: csv::Error) -> Self {
        Error::CorpusLoad(cause)
    }
}
