use std::io;

use clap::{Parser, ValueEnum};
use rusty_maze::maze::ascii_utils::visualize_maze_ascii;
use rusty_maze::maze::config::{MazeConfig, DEFAULT_SEED};
use rusty_maze::maze::json_utils::JsonTrace;
use rusty_maze::Maze;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// Dessin ASCII du labyrinthe et du chemin
    Ascii,
    /// Un événement JSON par ligne (murs puis déplacements)
    Json,
    /// Seulement le résumé
    #[value(name = "none")]
    Quiet,
}

/// Génère un labyrinthe parfait et le résout par retour arrière.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 50)]
    cols: usize,

    #[arg(long, default_value_t = 40)]
    rows: usize,

    /// Graine du générateur
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    #[arg(long, default_value_t = 10.0)]
    x1: f64,

    #[arg(long, default_value_t = 10.0)]
    y1: f64,

    #[arg(long, default_value_t = 15.0)]
    cell_width: f64,

    #[arg(long, default_value_t = 15.0)]
    cell_height: f64,

    #[arg(long, value_enum, default_value_t = Output::Ascii)]
    output: Output,
}

impl Args {
    fn config(&self) -> MazeConfig {
        MazeConfig {
            x1: self.x1,
            y1: self.y1,
            cols: self.cols,
            rows: self.rows,
            cell_width: self.cell_width,
            cell_height: self.cell_height,
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    if std::env::var("MAZE_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MAZE_LOG")
            .write_style("MAZE_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let args = Args::parse();
    log::debug!("arguments: {:?}", args);

    let solved = match args.output {
        Output::Json => {
            let mut trace = JsonTrace::new(io::stdout().lock());
            let mut maze = Maze::with_observer(args.config(), &mut trace)?;
            let solved = maze.solve_with(&mut trace);
            trace.finish()?;
            solved
        }
        Output::Ascii => {
            let mut maze = Maze::new(args.config())?;
            let path = maze.find_path();
            println!(
                "{}",
                visualize_maze_ascii(maze.grid(), path.as_deref().unwrap_or_default())
            );
            path.is_some()
        }
        Output::Quiet => Maze::new(args.config())?.solve(),
    };

    if solved {
        eprintln!("Maze {}x{} (seed {}) solved", args.cols, args.rows, args.seed);
    } else {
        eprintln!("Maze {}x{} (seed {}): no path found", args.cols, args.rows, args.seed);
    }

    Ok(())
}
