use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    BadFormat,
    BadNumber { token: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TableError::BadFormat => write!(
                f,
                "Incorrect line format. Expected \"chips: [a, b, c]\""
            ),
            TableError::BadNumber { token } => {
                write!(f, "Incorrect number '{}' in chips list", token)
            }
        }
    }
}

impl std::error::Error for TableError {}

pub type TableResult<T> = std::result::Result<T, TableError>;
