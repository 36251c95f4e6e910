use clap::Parser;
use quinegen::AppError;

#[derive(Parser)]
#[command(name = "quinegen")]
#[command(version)]
#[command(
    about = "Write a trio of quine programs (TypeScript, Python, Rust) to the current directory",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let result: Result<(), AppError> = quinegen::run();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
