use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use wordsearch::{find_words, generate_words, Generator, Orientation, PuzzleConfig, GRID_SIZE};

fn main() -> anyhow::Result<()> {
    wordsearch::init_logging_with(log::LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 && args.len() != 4 {
        eprintln!("Usage: {} <first-seed> <count> [grid-size]", args[0]);
        std::process::exit(1);
    }
    let first: u64 = args[1].parse()?;
    let count: u64 = args[2].parse()?;
    let size: usize = match args.get(3) {
        Some(s) => s.parse()?,
        None => GRID_SIZE,
    };

    let generator = Generator::new(PuzzleConfig {
        grid_size: size,
        ..PuzzleConfig::default()
    });

    let mut placed = 0usize;
    let mut recovered = 0usize;
    let mut diagonal = 0usize;
    let mut diagonal_recovered = 0usize;
    let mut failures = Vec::new();

    for seed in first..first.saturating_add(count) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let words: Vec<&str> = generate_words(&mut rng).into_iter().map(|(w, _)| w).collect();
        let puzzle = match generator.generate(&mut rng, &words) {
            Ok(p) => p,
            Err(e) => {
                failures.push(json!({ "seed": seed, "error": e.to_string() }));
                continue;
            }
        };
        let found = find_words(puzzle.grid(), &words);
        for p in puzzle.placements() {
            placed += 1;
            let hit = found.contains(&p.word);
            if hit {
                recovered += 1;
            }
            if p.placement.orientation == Orientation::Diagonal {
                diagonal += 1;
                if hit {
                    diagonal_recovered += 1;
                }
            }
        }
    }

    let result = json!({
        "puzzles": count,
        "grid_size": size,
        "placed": placed,
        "recovered": recovered,
        "diagonal": diagonal,
        "diagonal_recovered": diagonal_recovered,
        "failures": failures,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
