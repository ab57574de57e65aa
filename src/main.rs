//! `robot-room` command line.
//!
//! Usage:
//!   robot-room                      # interactive prompts on stdin
//!   robot-room run --room-width 5 --room-depth 5 --column 1 --row 2 --orientation N --instructions RFRF
//!   robot-room json < request.json  # JSON request in, JSON response out

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use robot_room::console::{Console, format_report};
use robot_room::report::{RobotRequest, RobotResponse, handle_json};
use robot_room::{Placement, Room};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Move a robot around a rectangular room.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask for room, robot and instructions line by line (default)
    Interactive,

    /// Evaluate a single request given as arguments
    Run {
        #[arg(long, allow_hyphen_values = true)]
        room_width: i64,
        #[arg(long, allow_hyphen_values = true)]
        room_depth: i64,
        /// Start column, zero-based
        #[arg(long, allow_hyphen_values = true)]
        column: i64,
        /// Start row, zero-based, row 0 is the northern wall
        #[arg(long, allow_hyphen_values = true)]
        row: i64,
        /// One of N, E, S, W
        #[arg(long)]
        orientation: String,
        /// Any mix of F, L, R (case-insensitive)
        #[arg(long, default_value = "")]
        instructions: String,
    },

    /// Read a JSON request and write a JSON response
    Json {
        /// Request file; stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn run_interactive() -> Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.run()?;
    Ok(())
}

fn run_once(room: Room, placement: Placement, instructions: String) -> Result<()> {
    let request = RobotRequest {
        room,
        robot: placement,
        instructions,
    };
    let pose = request.evaluate()?;
    println!("{}", format_report(&pose));
    Ok(())
}

fn run_json(input: Option<PathBuf>) -> Result<()> {
    let body = match input {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("reading stdin")?;
            body
        }
    };

    let response: RobotResponse = handle_json(&body);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", response.to_json()?)?;

    if response.error {
        bail!(response.message);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("robot-room starting: {args:?}");

    let outcome = match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => run_interactive(),
        Command::Run {
            room_width,
            room_depth,
            column,
            row,
            orientation,
            instructions,
        } => run_once(
            Room::new(room_width, room_depth),
            Placement::new(column, row, orientation),
            instructions,
        ),
        Command::Json { input } => run_json(input),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\nError: {err:#}");
            ExitCode::FAILURE
        }
    }
}
