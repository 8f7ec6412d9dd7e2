use battleships_env::{init_logging, BattleshipsEnv, CellState, EnvConfig};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

/// Run random-agent Battleships episodes and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible episodes (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    episodes: usize,
    #[arg(long, default_value_t = 10)]
    width: usize,
    #[arg(long, default_value_t = 10)]
    height: usize,
    #[arg(long, help = "Print the boards after every episode")]
    render: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = EnvConfig {
        grid_size: (cli.width, cli.height),
        seed: cli.seed,
        ..Default::default()
    };
    let mut env = BattleshipsEnv::with_config(config)?;
    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut shots_per_episode = Vec::with_capacity(cli.episodes);
    let mut returns = Vec::with_capacity(cli.episodes);
    for episode in 0..cli.episodes {
        let mut observation = env.reset()?;
        let mut shots = 0usize;
        let mut episode_return = 0.0f32;
        loop {
            let untried: Vec<(usize, usize)> = observation
                .iter()
                .filter(|(_, &s)| s == CellState::Untried)
                .map(|(xy, _)| xy)
                .collect();
            // untried cells only run out after the episode terminates
            let target = untried[rng.random_range(0..untried.len())];
            let step = env.step(target)?;
            shots += 1;
            episode_return += step.reward;
            observation = step.observation;
            if step.done {
                break;
            }
        }
        log::info!(
            "episode {}: {} shots, return {}",
            episode,
            shots,
            episode_return
        );
        if cli.render {
            println!("{}", env.render());
        }
        shots_per_episode.push(shots);
        returns.push(episode_return);
    }
    env.close();

    let total_shots: usize = shots_per_episode.iter().sum();
    let total_return: f32 = returns.iter().sum();
    let summary = json!({
        "episodes": cli.episodes,
        "mean_shots": total_shots as f64 / cli.episodes.max(1) as f64,
        "mean_return": total_return as f64 / cli.episodes.max(1) as f64,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
