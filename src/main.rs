use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use knn::{evaluation, parse, report};

#[derive(Parser)]
#[command(about = "k-nearest-neighbors classification of 2D labeled points")]
struct Args {
    /// Training data file, one `<x1> <x2> <label>` point per line
    training_data: PathBuf,

    /// Test data file in the same format; label `?` means "predict only"
    test_data: PathBuf,

    /// Number of nearest neighbors taking part in the vote
    #[arg(short = 'k', long = "neighbors", default_value_t = 1)]
    neighbors: usize,

    /// File the accuracy summary is written to
    #[arg(short, long, default_value = "classification_results.txt")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();

    let training = parse::load_file(&args.training_data)?;
    let test = parse::load_file(&args.test_data)?;

    let predictions = evaluation::predict_all(&test, &training, args.neighbors)?;
    let accuracy = evaluation::accuracy(&predictions);

    report::print_report(&mut io::stdout().lock(), &predictions, accuracy)?;
    report::write_accuracy_file(&args.output, accuracy)
        .with_context(|| format!("cannot write results to {}", args.output.display()))?;

    Ok(())
}
