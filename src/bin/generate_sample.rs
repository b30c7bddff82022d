use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Write a synthetic games.csv with the same columns as the real dataset.
#[derive(Debug, Parser)]
#[command(name = "generate_sample", about)]
struct Args {
    /// Output file
    #[arg(default_value = "games.csv")]
    output: PathBuf,

    /// Number of rows to generate
    #[arg(long, default_value_t = 2000)]
    rows: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

const PLATFORMS: [&str; 8] = ["PS2", "PS3", "PS4", "X360", "XOne", "Wii", "DS", "PC"];
const GENRES: [&str; 8] = [
    "Action", "Sports", "Shooter", "Racing", "Role-Playing", "Platform", "Puzzle", "Strategy",
];
const RATINGS: [&str; 4] = ["E", "E10+", "T", "M"];
const PUBLISHERS: [&str; 5] = ["Electronic Arts", "Nintendo", "Ubisoft", "Activision", "Sega"];
const WORDS: [&str; 10] = [
    "Shadow", "Racer", "Legends", "Galaxy", "Knights", "Storm", "Quest", "Arena", "Dynasty", "Rush",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writer.write_record([
        "Name",
        "Platform",
        "Year_of_Release",
        "Genre",
        "Publisher",
        "Critic_Score",
        "User_Score",
        "Rating",
    ])?;

    let mut incomplete = 0usize;
    for _ in 0..args.rows {
        let title = format!("{} {}", rng.pick(&WORDS), rng.pick(&WORDS));
        let platform = rng.pick(&PLATFORMS);
        let year = (1995 + rng.next_u64() % 22).to_string();
        let genre = rng.pick(&GENRES);
        let publisher = rng.pick(&PUBLISHERS);
        let critic = 20.0 + (rng.next_f64() * 78.0).round();
        let user = (critic / 10.0 + rng.next_f64() * 2.0 - 1.0).clamp(0.0, 10.0);

        // Mimic the gaps of the real dataset.
        let critic = if rng.chance(0.1) { String::new() } else { format!("{critic}") };
        let user = if rng.chance(0.05) { "tbd".to_string() } else { format!("{user:.1}") };
        let rating = if rng.chance(0.05) { "" } else { rng.pick(&RATINGS) };
        if critic.is_empty() || user == "tbd" || rating.is_empty() {
            incomplete += 1;
        }

        writer.write_record([
            title.as_str(),
            platform,
            year.as_str(),
            genre,
            publisher,
            critic.as_str(),
            user.as_str(),
            rating,
        ])?;
    }
    writer.flush().context("flushing CSV")?;

    log::info!("{incomplete} rows left incomplete on purpose");
    println!("Wrote {} rows to {}", args.rows, args.output.display());
    Ok(())
}
