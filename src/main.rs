#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{builder::TypedValueParser, Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use wordsearch::{
    clue_for, find_words, generate_words, init_logging, play, ui::render_grid, GameSession,
    GameStatus, Generator, Puzzle, PuzzleConfig, GRID_SIZE, MAX_PLACEMENT_ATTEMPTS,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct PuzzleArgs {
    #[arg(
        long,
        default_value_t = GRID_SIZE,
        value_parser = clap::value_parser!(u8).range(1..=26).map(usize::from)
    )]
    size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible puzzles (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated words to hide (default: draw from the built-in bank)"
    )]
    words: Vec<String>,
    #[arg(
        long,
        default_value_t = MAX_PLACEMENT_ATTEMPTS,
        help = "Random placement attempts per word before a full sweep"
    )]
    max_attempts: usize,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Generate a puzzle and print the grid and word placements.
    Generate {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        #[arg(long, help = "Print the puzzle as JSON")]
        json: bool,
    },
    /// Generate a puzzle and list the words the solver can trace in it.
    Solve {
        #[command(flatten)]
        puzzle: PuzzleArgs,
        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },
    /// Play a puzzle interactively in the terminal.
    Play {
        #[command(flatten)]
        puzzle: PuzzleArgs,
    },
}

#[cfg(feature = "std")]
fn build_puzzle(args: &PuzzleArgs) -> anyhow::Result<(Puzzle, Vec<String>)> {
    let mut rng = if let Some(s) = args.seed {
        log::info!("Using fixed seed: {} (puzzle will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let (words, clues): (Vec<String>, Vec<String>) = if args.words.is_empty() {
        generate_words(&mut rng)
            .into_iter()
            .map(|(w, c)| (w.to_string(), c.to_string()))
            .unzip()
    } else {
        args.words
            .iter()
            .map(|w| {
                let upper = w.trim().to_ascii_uppercase();
                let clue = clue_for(&upper)
                    .map_or_else(|| format!("{} letters", upper.len()), str::to_string);
                (upper, clue)
            })
            .unzip()
    };

    let generator = Generator::new(PuzzleConfig {
        grid_size: args.size,
        max_attempts: args.max_attempts,
    });
    let puzzle = generator.generate(&mut rng, &words)?;
    Ok((puzzle, clues))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { puzzle, json } => {
            let (puzzle, _) = build_puzzle(&puzzle)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&puzzle)?);
            } else {
                print!("{}", render_grid(puzzle.grid()));
                for placed in puzzle.placements() {
                    let p = placed.placement;
                    println!(
                        "  {:<12} row {:>2} col {:>2} {}",
                        placed.word,
                        p.row + 1,
                        p.col + 1,
                        p.orientation
                    );
                }
            }
        }
        Commands::Solve { puzzle, json } => {
            let (puzzle, _) = build_puzzle(&puzzle)?;
            let words = puzzle.words();
            let found = find_words(puzzle.grid(), &words);
            let missing: Vec<&String> = words.iter().filter(|w| !found.contains(*w)).collect();
            if json {
                let out = serde_json::json!({
                    "grid": puzzle.grid(),
                    "words": words,
                    "found": found,
                    "missing": missing,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print!("{}", render_grid(puzzle.grid()));
                println!("Found {} of {} words:", found.len(), words.len());
                for word in &found {
                    println!("  {}", word);
                }
                for word in missing {
                    println!("  {} (not traceable across or down)", word);
                }
            }
        }
        Commands::Play { puzzle } => {
            let (puzzle, clues) = build_puzzle(&puzzle)?;
            let mut session = GameSession::new(puzzle, clues);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let status = play(&mut session, stdin.lock(), &mut stdout)?;
            match status {
                GameStatus::Complete => {
                    println!("\n🎉 You found every word! Score: {}", session.score())
                }
                GameStatus::InProgress => println!(
                    "\nGame over. Found {} of {} words. Score: {}",
                    session.found().len(),
                    session.words().len(),
                    session.score()
                ),
            }
        }
    }
    Ok(())
}
