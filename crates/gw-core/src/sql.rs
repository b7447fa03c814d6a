//! SQL text rendering utilities
//!
//! Every piece of literal SQL assembled by Groundwork goes through these
//! helpers, so quoting is handled in exactly one place.

/// Quote a SQL identifier to prevent injection.
///
/// Wraps the identifier in double quotes and escapes any embedded double
/// quotes by doubling them, following the SQL standard.
///
/// # Examples
/// ```
/// use gw_core::sql::quote_ident;
/// assert_eq!(quote_ident("job_boards"), r#""job_boards""#);
/// assert_eq!(quote_ident(r#"my"table"#), r#""my""table""#);
/// ```
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Quote a string value as a single-quoted SQL literal.
///
/// Embedded single quotes are doubled, so values like `O'Brien` survive
/// intact.
///
/// # Examples
/// ```
/// use gw_core::sql::quote_literal;
/// assert_eq!(quote_literal("Dice"), "'Dice'");
/// assert_eq!(quote_literal("O'Brien"), "'O''Brien'");
/// ```
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Render a multi-row `INSERT ... ON CONFLICT DO NOTHING` statement.
///
/// The conflict target is what makes re-running the statement a no-op, which
/// keeps data migrations idempotent at the SQL level.
pub fn insert_ignore_sql(
    table: &str,
    columns: &[&str],
    rows: &[Vec<&str>],
    conflict: &str,
) -> String {
    let column_list = columns
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ");
    let value_rows = rows
        .iter()
        .map(|row| {
            let values = row
                .iter()
                .map(|v| quote_literal(v))
                .collect::<Vec<_>>()
                .join(", ");
            format!("({values})")
        })
        .collect::<Vec<_>>()
        .join(",\n");
    format!(
        "INSERT INTO {} ({}) VALUES\n{}\nON CONFLICT ({}) DO NOTHING;\n",
        quote_ident(table),
        column_list,
        value_rows,
        quote_ident(conflict)
    )
}
