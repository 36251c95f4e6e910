//! quinegen: write a trio of quine programs to disk.
//!
//! Two fixed templates (a Python quine and a Rust quine) are persisted
//! verbatim, and a third TypeScript source file is generated at run time by
//! embedding backtick-escaped copies of both templates inside template
//! literals. Output is a pure function of the embedded constants, so every
//! run produces byte-identical files.

pub mod config;
pub mod error;
pub mod generator;
pub mod quines;
pub mod writer;

pub use config::Config;
pub use error::AppError;

/// Write the three quine files into the current working directory.
pub fn run() -> Result<(), AppError> {
    let config = Config::new_default()?;
    run_with(&config)
}

/// Write the three quine files into the configured output directory.
///
/// Exactly three sequential writes, in order: the generated TypeScript
/// artifact, the Python template, the Rust template. There are no
/// transaction semantics: if a later write fails, earlier files stay on
/// disk.
pub fn run_with(config: &Config) -> Result<(), AppError> {
    let typescript_quine =
        generator::build_typescript_quine(quines::PYTHON_QUINE, quines::RUST_QUINE);

    writer::write_artifact(
        &config.output_dir.join(quines::TYPESCRIPT_QUINE_FILE),
        &typescript_quine,
    )?;
    writer::write_artifact(&config.output_dir.join(quines::PYTHON_QUINE_FILE), quines::PYTHON_QUINE)?;
    writer::write_artifact(&config.output_dir.join(quines::RUST_QUINE_FILE), quines::RUST_QUINE)?;

    Ok(())
}
