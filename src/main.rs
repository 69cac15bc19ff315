use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skirmish::core::constants::*;
use skirmish::simulator::{run_grid, run_simulation, SimConfig};
use skirmish::{Fleet, Modifier, ModifierTable, Result, SaveManager, Session};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skirmish",
    version,
    about = "Turn-based fleet combat calculator",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Referee a battle interactively (default)
    Play(PlayArgs),
    /// Monte-Carlo hits-to-destroy analysis
    Simulate(SimulateArgs),
}

#[derive(Args, Clone)]
struct PlayArgs {
    /// Fleet snapshot file
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    save: PathBuf,

    /// RNG seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Ignore an existing snapshot and start from the starter fleet
    #[arg(long)]
    fresh: bool,
}

#[derive(Args)]
struct SimulateArgs {
    #[arg(short = 'n', long, default_value_t = SIM_DEFAULT_RUNS)]
    runs: u32,

    #[arg(long)]
    seed: Option<u64>,

    /// Target hull points
    #[arg(long, default_value_t = SIM_DEFAULT_DEFENDER_HP)]
    hp: u32,

    #[arg(long, default_value_t = SIM_DEFAULT_FIREPOWER)]
    firepower: u32,

    #[arg(long, default_value_t = SIM_DEFAULT_CRIT_CHANCE, value_parser = clap::value_parser!(u32).range(0..=100))]
    crit: u32,

    /// Attacker has a strong matchup against the target
    #[arg(long)]
    strong: bool,

    /// Sweep firepower 1-20 against crit 0-100% instead of a single matchup
    #[arg(long)]
    grid: bool,

    /// Also write the report as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = match &cli.command {
        Some(Command::Simulate(args)) if args.verbose => "skirmish=info",
        _ => "skirmish=warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Some(Command::Play(args)) => play(args),
        Some(Command::Simulate(args)) => simulate(args),
        None => play(cli.play),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let saves = SaveManager::new(args.save);
    let fleet = if args.fresh {
        Fleet::starter()
    } else {
        let (fleet, loaded) = saves.load_or_default()?;
        if loaded {
            println!("Loaded saved data.");
        }
        fleet
    };

    let rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    println!();
    let mut session = Session::new(fleet, saves, ModifierTable::standard(), rng);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(&mut stdin.lock(), &mut stdout)
}

fn simulate(args: SimulateArgs) -> Result<()> {
    let config = SimConfig {
        num_runs: args.runs,
        seed: args.seed,
        defender_hp: args.hp,
        firepower: args.firepower,
        crit_chance: args.crit,
        modifier: if args.strong {
            Modifier::Strong
        } else {
            Modifier::Balanced
        },
        log_each_run: args.verbose,
        ..Default::default()
    };

    let json = if args.grid {
        let firepowers: Vec<u32> = (1..=20).collect();
        let crit_chances: Vec<u32> = (0..=100).step_by(5).collect();
        let grid = run_grid(&config, &firepowers, &crit_chances);
        println!("{}", grid.to_text());
        serde_json::to_string_pretty(&grid)?
    } else {
        let report = run_simulation(&config);
        println!("{}", report.to_text());
        report.to_json()?
    };

    if args.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json)?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}
