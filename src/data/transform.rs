use thiserror::Error;

/// Failure to turn a raw timing token into a plotted value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("row {row}, column {column}: '{token}' is not a number")]
    NotANumber {
        row: usize,
        column: usize,
        token: String,
    },
    #[error("row {row}, column {column}: log2 is undefined for {value}")]
    NonPositive {
        row: usize,
        column: usize,
        value: f64,
    },
}

/// Base-2 log of a timing token.
///
/// Blank tokens yield `Ok(None)` and are dropped from the series. `row` and
/// `column` are 1-based and only used for error reporting.
pub fn log2_token(token: &str, row: usize, column: usize) -> Result<Option<f64>, TransformError> {
    let tok = token.trim();
    if tok.is_empty() {
        return Ok(None);
    }

    let value: f64 = tok.parse().map_err(|_| TransformError::NotANumber {
        row,
        column,
        token: token.to_string(),
    })?;

    if value <= 0.0 {
        return Err(TransformError::NonPositive { row, column, value });
    }

    Ok(Some(value.log2()))
}

/// Transform every non-blank token of a row.
pub fn log2_row<'a, I>(tokens: I, row: usize) -> Result<Vec<f64>, TransformError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Vec::new();
    for (j, tok) in tokens.into_iter().enumerate() {
        if let Some(v) = log2_token(tok, row, j + 1)? {
            out.push(v);
        }
    }
    Ok(out)
}
