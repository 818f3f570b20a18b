use batkit::AppError;
use clap::Parser;

#[derive(Parser)]
#[command(name = "batkit")]
#[command(version)]
#[command(
    about = "Scaffold the battery_analyzer Flutter project skeleton",
    long_about = None
)]
struct Cli {}

fn main() {
    // No arguments to read; parsing rejects strays and serves --help/--version.
    Cli::parse();

    let result: Result<(), AppError> = batkit::build().map(|_| ());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
