//! pathscout — watch a best-first route search explore a random board.

mod builder;
mod render;

use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};
use waypath_core::Point;
use waypath_search::{SearchOutcome, run_search_with};

use builder::BoardSpec;

/// Search a route between two cells on a randomly obstructed board.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = 20)]
    width: i32,

    /// Board height in cells
    #[arg(long, default_value_t = 10)]
    height: i32,

    /// Start cell as `x,y`
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    start: Point,

    /// Target cell as `x,y`; defaults to the far corner
    #[arg(long, value_parser = parse_point)]
    target: Option<Point>,

    /// Seed for obstacle placement
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of obstacles to scatter
    #[arg(long, default_value_t = 0)]
    obstacles: u32,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x in `{s}`"))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y in `{s}`"))?;
    Ok(Point::new(x, y))
}

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let cli = Cli::parse();

    let spec = BoardSpec {
        width: cli.width,
        height: cli.height,
        start: cli.start,
        target: cli
            .target
            .unwrap_or_else(|| Point::new(cli.width - 1, cli.height - 1)),
        obstacles: cli.obstacles,
        seed: cli.seed,
    };

    let mut grid = match builder::build(&spec) {
        Ok(grid) => grid,
        Err(err) => {
            error!("{err}");
            std::process::exit(2);
        }
    };

    println!("{}", render::render(&grid));

    let mut steps = 0usize;
    let outcome = run_search_with(&mut grid, |snapshot| {
        steps += 1;
        println!("---------------");
        println!("{}", render::render(snapshot));
    });

    match outcome {
        SearchOutcome::Succeeded(_) => info!("route found after {steps} steps"),
        SearchOutcome::Exhausted => {
            warn!("no route from {} to {}", spec.start, spec.target);
            std::process::exit(1);
        }
        SearchOutcome::Failed(err) => {
            error!("search failed: {err}");
            std::process::exit(1);
        }
    }
}
