use crate::domain::models::ProjectManifest;
use crate::error::LumeError;
use std::collections::BTreeMap;

/// Values available to `${token}` expansion. Optional descriptor fields
/// only become tokens when they are present.
pub fn manifest_values(m: &ProjectManifest) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    values.insert("name".to_string(), m.name.clone());
    values.insert("version".to_string(), m.version.clone());
    if let Some(group) = &m.group {
        values.insert("group".to_string(), group.clone());
    }
    if let Some(description) = &m.description {
        values.insert("description".to_string(), description.clone());
    }
    values
}

/// Expand `${token}` references. A token without a value fails the
/// render, as does an unterminated `${`. A `$` not followed by `{`
/// passes through literally. Returns the expanded text and the tokens
/// substituted, in first-appearance order.
pub fn expand(
    template: &str,
    values: &BTreeMap<String, String>,
) -> Result<(String, Vec<String>), LumeError> {
    let mut out = String::with_capacity(template.len());
    let mut tokens: Vec<String> = Vec::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        if chars.peek() != Some(&'{') {
            out.push('$');
            continue;
        }
        chars.next();
        let mut token = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) => token.push(c),
                None => return Err(LumeError::UnterminatedToken(token)),
            }
        }
        let value = values
            .get(&token)
            .ok_or_else(|| LumeError::UnknownToken(token.clone()))?;
        out.push_str(value);
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }

    Ok((out, tokens))
}
