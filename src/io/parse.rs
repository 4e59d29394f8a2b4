use anyhow::{Result, anyhow};

/// Parse a textual integer sequence.
///
/// Accepts integers separated by whitespace and/or commas, optionally
/// wrapped in a single pair of square brackets. Text after `#` on a line
/// is ignored.
///
/// # Errors
///
/// Returns an error naming the first token that is not a valid `i64`,
/// together with its 1-based position in the sequence.
///
/// # Examples
///
/// ```
/// use zerosum::io::parse_sequence;
///
/// assert_eq!(parse_sequence("[1, 4, 20, 3, 10, 5]").unwrap(), vec![1, 4, 20, 3, 10, 5]);
/// assert_eq!(parse_sequence("1 -1\n4 -4 # pairs\n2").unwrap(), vec![1, -1, 4, -4, 2]);
/// ```
pub fn parse_sequence(text: &str) -> Result<Vec<i64>> {
    let body: String = text
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(before, _)| before))
        .collect::<Vec<_>>()
        .join("\n");

    let mut body = body.trim();
    if let Some(inner) = body.strip_prefix('[') {
        body = inner
            .strip_suffix(']')
            .ok_or_else(|| anyhow!("Unterminated '[' in sequence"))?;
    }

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<i64>()
                .map_err(|e| anyhow!("Invalid integer '{}' at position {}: {}", token, i + 1, e))
        })
        .collect()
}
