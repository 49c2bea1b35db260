use std::io;
use std::path::PathBuf;

use clap::Parser;

mod export;
mod grading;
mod input;
mod models;
mod report;

#[derive(Parser)]
#[command(name = "grade-generator")]
#[command(about = "Interactive weighted grade calculator with CSV export", long_about = None)]
struct Cli {
    /// Where to write the exported CSV records
    #[arg(long, default_value = "grades.csv")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    println!("=== Grade Generator Calculator ===");
    println!();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = input::Console::new(stdin.lock(), stdout.lock());
    let assignments = input::collect_assignments(&mut console)?;
    drop(console);

    let summary = grading::summarize(&assignments);
    print!("{}", report::build_report(&assignments, &summary));

    export::write_csv(&cli.out, &assignments)?;
    println!();
    println!("Data saved to {}", cli.out.display());

    Ok(())
}
