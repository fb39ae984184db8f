//! Small text-rendering helpers shared by the per-kind diff/create/drop
//! handlers that build quoted SQL literals, plus the one step that happens
//! after every handler runs: normalizing a fragment into a statement.

/// Escapes a single-quoted SQL string literal's body (doubling embedded `'`).
/// Used wherever a handler embeds a literal value, e.g. enum labels in
/// `ALTER TYPE ... ADD VALUE '<element>'`.
pub fn escape_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// Guarantees a trailing semicolon and trims surrounding whitespace.
pub fn format_statement(fragment: &str) -> String {
    let trimmed = fragment.trim();
    if trimmed.ends_with(';') {
        trimmed.to_string()
    } else {
        format!("{trimmed};")
    }
}
