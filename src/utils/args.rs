//! Splitting of shell lines into arguments.

use crate::errors::{AppError, AppResult};

/// Split a command line on whitespace, honouring single and double quotes
/// and backslash escapes outside single quotes.
pub fn split_line(line: &str) -> AppResult<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => {
                let next = chars
                    .next()
                    .ok_or_else(|| AppError::Shell("trailing backslash".into()))?;
                current.push(next);
                in_token = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    args.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(AppError::Shell(format!("unterminated quote {q}")));
    }
    if in_token {
        args.push(current);
    }

    Ok(args)
}

/// Split a comma-separated tag list, dropping blanks.
pub fn split_tags(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
