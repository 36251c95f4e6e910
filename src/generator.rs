//! Pure string transformation building the generated TypeScript artifact.
//!
//! Kept free of filesystem side effects so the escaping and embedding
//! contract is unit-testable on its own.

/// Escape backticks for embedding inside a TypeScript template literal.
///
/// Every `` ` `` becomes `` \` ``; all other characters pass through
/// unmodified, newlines included.
pub fn escape_backticks(text: &str) -> String {
    text.replace('`', "\\`")
}

/// Build the TypeScript quine source embedding both templates.
///
/// The result is valid TypeScript declaring `pythonQuine` and `rustQuine`
/// as template-literal consts holding backtick-escaped copies of the two
/// inputs. This is a pure function: identical inputs always yield an
/// identical string.
pub fn build_typescript_quine(python_quine: &str, rust_quine: &str) -> String {
    format!(
        "\nconst pythonQuine = `\n{python}\n`;\n\nconst rustQuine = `\n{rust}\n`;\n",
        python = escape_backticks(python_quine),
        rust = escape_backticks(rust_quine),
    )
}
