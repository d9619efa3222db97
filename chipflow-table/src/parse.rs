use crate::err::{TableError, TableResult};

/// Parses a table description of the form `"chips: [a, b, c]"` into the
/// per-seat chip counts. Entries are separated by `", "`.
pub fn parse_chips(input: &str) -> TableResult<Vec<i64>> {
    let body = input
        .strip_prefix("chips: [")
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(TableError::BadFormat)?;

    body.split(", ")
        .map(|token| {
            token.parse::<i64>().map_err(|_| TableError::BadNumber {
                token: token.to_string(),
            })
        })
        .collect()
}
