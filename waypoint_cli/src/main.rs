use clap::{CommandFactory, Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{maze::MazeArgs, route::RouteArgs};

mod maze;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest path between two vertices of an edge list file
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Solve a character maze with A* and Dijkstra
    #[command(visible_alias = "m")]
    Maze {
        #[command(flatten)]
        args: MazeArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Route { args }) => route::run(args)?,
        Some(Commands::Maze { args }) => maze::run(args)?,
        None => Cli::command().print_help()?,
    }

    Ok(())
}
