use clap::Parser;
use knights_tour::solver::solve;
use knights_tour::utils::parse_square;

/// Exhaustively searches for a complete knight's tour and prints the
/// visit order of every square.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board height in squares
    #[clap(long, default_value_t = 5)]
    height: usize,

    /// Board width in squares
    #[clap(long, default_value_t = 5)]
    width: usize,

    /// Starting square as "column row", 1-based (e.g. "1 1")
    start: String,
}

fn main() {
    let args = Args::parse();

    let start = parse_square(&args.start, args.height, args.width)
        .unwrap_or_else(|e| panic!("Invalid starting square '{}': {}", args.start, e));

    println!(
        "Searching for a tour of the {}x{} board from {}...\n",
        args.height,
        args.width,
        args.start.trim()
    );

    match solve(start, args.height, args.width) {
        Some(tour) => {
            println!("Tour found ({} squares):\n", tour.squares.len());
            println!("{}", tour);
        }
        None => println!("No tour exists from this square."),
    }
}
