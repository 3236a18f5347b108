//! Ids are UUIDs; on the command line a unique prefix is enough.

use anyhow::Result;

/// Characters shown in listings.
const SHORT_ID_LEN: usize = 8;

pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

/// Resolve `input` to a full id: an exact match wins, otherwise the prefix
/// must match exactly one id.
pub fn resolve<'a>(ids: impl IntoIterator<Item = &'a str>, input: &str, what: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        anyhow::bail!("No {what} id given");
    }

    let mut matches = Vec::new();
    for id in ids {
        if id == input {
            return Ok(id.to_string());
        }
        if id.starts_with(input) {
            matches.push(id);
        }
    }

    match matches.as_slice() {
        [id] => Ok(id.to_string()),
        [] => anyhow::bail!("No {what} found with id '{input}'"),
        _ => anyhow::bail!(
            "'{input}' matches {} {what}s, use a longer id",
            matches.len()
        ),
    }
}
