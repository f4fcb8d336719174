use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for mdtoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for mdtoc operations
#[derive(Debug)]
pub enum TocError {
    /// IO error wrapper
    Io(io::Error),
    /// No line marks the location of the contents section
    MarkerNotFound,
    /// Only blank lines follow the contents marker
    NoTocStart,
    /// The TOC entry region never ends before end of document
    NoTocEnd,
    /// An explicit output path was combined with multiple input files
    MultipleFilesWithOutput,
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocError::Io(err) => write!(f, "IO error: {}", err),
            TocError::MarkerNotFound => {
                write!(f, "no marker found indicating location for contents section")
            }
            TocError::NoTocStart => {
                write!(f, "no start of existing TOC entries found following contents section marker")
            }
            TocError::NoTocEnd => {
                write!(f, "no end of existing TOC entries found following contents section marker")
            }
            TocError::MultipleFilesWithOutput => {
                write!(f, "output option can only be used in single file mode")
            }
        }
    }
}

impl Error for TocError {}

impl From<io::Error> for TocError {
    fn from(err: io::Error) -> Self {
        TocError::Io(err)
    }
}
