use clap::{Parser, Subcommand};
use gridmaze_input::parse_moves;
use gridmaze_kernel::Session;
use gridmaze_render::{DebugTextRenderer, Renderer, SceneView};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridmaze-cli", about = "Headless tools for the grid maze demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and print a board
    Grid {
        /// Board generation seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Simulate a round from a move string (e.g. "RRDDLU")
    Play {
        /// Board generation seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Moves: R, L, U, D, and C for the camera toggle
        #[arg(long)]
        moves: String,
        /// Print the final session summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Grid { seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            tracing::debug!(seed, "generating board");
            let session = Session::new(seed);
            println!("seed: {seed}");
            print!(
                "{}",
                DebugTextRenderer::new().render(&session, &SceneView::default())
            );
        }
        Commands::Play { seed, moves, json } => {
            let seed = seed.unwrap_or_else(rand::random);
            let actions = parse_moves(&moves)?;
            tracing::debug!(seed, moves = actions.len(), "simulating round");

            let mut session = Session::new(seed);
            for action in actions {
                session.apply(action);
                let token = session.token();
                // Frame-evaluate after each move, as the desktop loop does.
                if let Some(verdict) = session.advance_frame() {
                    println!("{verdict}");
                    println!(
                        "round over at ({:.1}, {:.1}) after {} frames",
                        token.x,
                        token.y,
                        session.tick()
                    );
                    break;
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&session.summary())?);
            } else {
                println!("{}", session.summary());
            }
        }
    }

    Ok(())
}
