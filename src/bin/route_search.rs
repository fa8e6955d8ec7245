use clap::Parser;
use route_search::{
    route::{load_map, MapConfig, MapError, RouteMap, RouteProblem},
    search::{
        search_engines::{SearchEngineName, DEFAULT_CYCLE_LOOKBACK},
        validate, InstrumentedProblem, ProblemCounters, SearchError, SearchStatistics, Verbosity,
    },
};
use serde::Serialize;
use std::{path::PathBuf, process::ExitCode, sync::Arc};
use thiserror::Error;
use tracing::{error, info, level_filters::LevelFilter, warn};

const ROMANIA_MAP_TEXT: &str = include_str!("../../maps/romania.toml");

#[derive(Parser)]
#[command(version)]
/// Find a route between two places on a map.
struct Cli {
    #[arg(
        help = "The TOML map file, defaults to the bundled map of Romania",
        short = 'm',
        long = "map",
        id = "MAP"
    )]
    map: Option<PathBuf>,
    #[arg(
        help = "The place to start from",
        short = 'i',
        long = "initial",
        id = "INITIAL",
        default_value = "A"
    )]
    initial: String,
    #[arg(
        help = "The place to reach",
        short = 'g',
        long = "goal",
        id = "GOAL",
        default_value = "B"
    )]
    goal: String,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::BreadthFirst
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        help = "How many ancestors the depth and breadth first searches check \
        for repeated places",
        long = "cycle-lookback",
        id = "CYCLE_LOOKBACK",
        default_value_t = DEFAULT_CYCLE_LOOKBACK
    )]
    cycle_lookback: usize,
    #[arg(
        help = "Give up after expanding this many nodes",
        long = "max-expansions",
        id = "MAX_EXPANSIONS"
    )]
    max_expansions: Option<usize>,
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
    #[arg(help = "Print the report as JSON", long = "json")]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct Report {
    initial_state: String,
    goal_state: String,
    search_algorithm: String,
    nodes_created: usize,
    nodes_expanded: usize,
    is_goal_calls: usize,
    solution: Vec<String>,
    actions_in_solution: usize,
    /// `None` when no route was found
    cost_of_solution: Option<f64>,
    budget_exhausted: bool,
    counters: ProblemCounters,
    statistics: SearchStatistics,
}

impl Report {
    fn print(&self) {
        println!("initial_state: {}", self.initial_state);
        println!("goal_state: {}", self.goal_state);
        println!("search_algorithm: {}", self.search_algorithm);
        println!("# nodes created: {}", self.nodes_created);
        println!("# nodes expanded: {}", self.nodes_expanded);
        println!("# is-goal called: {}", self.is_goal_calls);
        println!("# solution: {:?}", self.solution);
        println!("# actions in solution: {}", self.actions_in_solution);
        match self.cost_of_solution {
            Some(cost) => println!("cost of solution: {}", cost),
            None => println!("cost of solution: inf"),
        }
        if self.budget_exhausted {
            println!("expansion limit reached, the goal may still be reachable");
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: LevelFilter = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let map: RouteMap<String> = match &cli.map {
        Some(path) => {
            info!(map = %path.display(), "loading map");
            load_map(path)?
        }
        None => MapConfig::from_text(ROMANIA_MAP_TEXT)?.try_into()?,
    };
    for place in [&cli.initial, &cli.goal] {
        if !map.contains(place) {
            warn!(place = %place, "place is not on the map");
        }
    }

    let problem = RouteProblem::new(cli.initial.clone(), cli.goal.clone(), Arc::new(map));
    let mut instrumented = InstrumentedProblem::new(&problem);
    if let Some(max_expansions) = cli.max_expansions {
        instrumented = instrumented.with_expansion_limit(max_expansions);
    }

    let result = cli
        .search_engine_name
        .search(&instrumented, cli.cycle_lookback)?;

    if result.is_solved() {
        info!("validating route");
        validate(&problem, &result.path_actions(), result.path_cost())?;
        info!("route is valid");
    } else {
        info!("no route found");
    }

    let counters = instrumented.counters();
    let report = Report {
        initial_state: cli.initial,
        goal_state: cli.goal,
        search_algorithm: cli.search_engine_name.name().to_string(),
        nodes_created: counters.result,
        nodes_expanded: counters.actions,
        is_goal_calls: counters.is_goal,
        solution: result.path_states(),
        actions_in_solution: result.path_len(),
        cost_of_solution: result
            .goal_node()
            .map(|node| node.get_path_cost().into_inner()),
        budget_exhausted: instrumented.budget_exhausted(),
        counters,
        statistics: result.statistics().clone(),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }
    Ok(())
}
