use clap::Parser;
use searchclient::{
    domains::grid::{GridProblem, GridState},
    search::{
        frontiers::FrontierName,
        search_engines::{GraphSearch, SearchOutcome},
        validate, Verbosity,
    },
};
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Solve a grid level with graph search.
struct Cli {
    #[arg(help = "The level file")]
    level: PathBuf,
    #[arg(
        help = "The output plan file, the plan is only printed if not given",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    plan: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The frontier deciding the search order",
        short = 'f',
        long = "frontier",
        id = "FRONTIER",
        default_value_t = FrontierName::Dfs
    )]
    frontier_name: FrontierName,
    #[arg(
        help = "Time between two status lines, e.g. 500ms or 10s",
        long = "status-interval",
        id = "INTERVAL",
        value_parser = humantime::parse_duration,
        default_value = "10s"
    )]
    status_interval: Duration,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let problem = match GridProblem::from_path(&cli.level) {
        Ok(problem) => problem,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut frontier = cli.frontier_name.create::<GridState>();
    let result = GraphSearch::new()
        .with_status_interval(cli.status_interval)
        .search(
            problem.initial_state.clone(),
            &problem.action_set,
            &problem.goal,
            &mut *frontier,
        );
    if cli.verbosity.shows_status() {
        eprintln!("{}", result.status());
    }

    let plan = match result.into_outcome() {
        SearchOutcome::Success(plan) => plan,
        SearchOutcome::ProvablyUnsolvable => {
            info!("no plan found");
            println!("No plan found");
            return ExitCode::FAILURE;
        }
    };

    info!("validating plan");
    if let Err(e) = validate(
        &plan,
        &problem.initial_state,
        &problem.action_set,
        &problem.goal,
    ) {
        error!("plan is invalid: {}", e);
        return ExitCode::FAILURE;
    }
    info!("plan is valid");
    info!(plan_length = plan.len());

    match cli.plan {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, format!("{}\n", plan)) {
                error!("failed to write plan to {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            info!(plan_file = %path.display(), "plan written");
        }
        None => {
            println!("Plan found:");
            println!("{}", plan);
            println!("Plan length: {}", plan.len());
        }
    }

    ExitCode::SUCCESS
}
