//! The fixed quine templates and the filenames they are written to.
//!
//! Both templates are immutable process-lifetime constants. Their exact
//! bytes matter: leading and trailing newlines and the literal `\n` escape
//! sequences inside the quine bodies are part of the output contract, so
//! every run reproduces the same files byte for byte.

/// Quine program for Python, written verbatim to [`PYTHON_QUINE_FILE`].
pub static PYTHON_QUINE: &str = r"
s = 's = {!r}\nprint(s.format(s))\n'
print(s.format(s))
";

/// Quine program for Rust, written verbatim to [`RUST_QUINE_FILE`].
pub static RUST_QUINE: &str = r#"
fn main() {
    let s = "fn main() {\n    let s = {!r};\n    println!(s, s);\n}\n";
    println!("{}, {}", s, s);
}
"#;

/// Filename for the generated TypeScript artifact.
pub static TYPESCRIPT_QUINE_FILE: &str = "typescript_quine.ts";

/// Filename for the verbatim Python template.
pub static PYTHON_QUINE_FILE: &str = "python_quine.py";

/// Filename for the verbatim Rust template.
pub static RUST_QUINE_FILE: &str = "rust_quine.rs";
