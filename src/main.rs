//! Terminal front end: play Walnut Chess against the minimax engine.
//!
//! Commands read from stdin:
//! - `e2e4` (or `e2 e4`): move a piece
//! - `moves e2`: show the candidate moves of a piece
//! - `undo`, `new`, `save`, `board`, `help`, `quit`

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use walnut_chess::engines::engine_minimax::SignConvention;
use walnut_chess::errors::{ChessError, ChessResult};
use walnut_chess::game_state::board_location::BoardLocation;
use walnut_chess::game_state::chess_rules::Difficulty;
use walnut_chess::game_state::chess_types::Color;
use walnut_chess::search::board_scoring::ScorerKind;
use walnut_chess::session::game_config::GameConfig;
use walnut_chess::session::game_session::GameSession;
use walnut_chess::utils::render_board::{render_board, render_board_with_targets};

#[derive(Debug, Parser)]
#[command(name = "walnut_chess", version, about = "Play chess against a minimax engine")]
struct Args {
    /// Color played by the human.
    #[arg(long, default_value_t = Color::White)]
    color: Color,
    #[arg(long, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,
    /// Search depth, overriding the difficulty.
    #[arg(long)]
    depth: Option<u8>,
    #[arg(long, default_value_t = ScorerKind::Material)]
    scorer: ScorerKind,
    #[arg(long, default_value_t = SignConvention::ByColor)]
    sign_convention: SignConvention,
    /// Seed for the engine's tie-breaking.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,
}

impl From<Args> for GameConfig {
    fn from(args: Args) -> Self {
        GameConfig {
            human_color: args.color,
            difficulty: args.difficulty,
            depth_override: args.depth,
            scorer: args.scorer,
            sign_convention: args.sign_convention,
            seed: args.seed,
            log_dir: args.log_dir,
        }
    }
}

enum Command {
    Move(BoardLocation, BoardLocation),
    Moves(BoardLocation),
    Undo,
    New,
    Save,
    Board,
    Help,
    Quit,
}

fn parse_command(line: &str) -> ChessResult<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["quit"] | ["exit"] => Ok(Command::Quit),
        ["undo"] => Ok(Command::Undo),
        ["new"] | ["restart"] => Ok(Command::New),
        ["save"] => Ok(Command::Save),
        ["board"] => Ok(Command::Board),
        ["help"] => Ok(Command::Help),
        ["moves", square] => Ok(Command::Moves(square.parse()?)),
        [from, to] => Ok(Command::Move(from.parse()?, to.parse()?)),
        [word] if word.len() == 4 && word.is_char_boundary(2) => {
            let (from, to) = word.split_at(2);
            Ok(Command::Move(from.parse()?, to.parse()?))
        }
        _ => Err(ChessError::InvalidOption(format!("unrecognised command '{line}'"))),
    }
}

const HELP: &str = "commands: e2e4 | e2 e4 | moves e2 | undo | new | save | board | help | quit";

/// Lets the computer move while it is its turn and the game is still open.
fn run_computer_turns(session: &mut GameSession) -> ChessResult<()> {
    while !session.is_over() && !session.is_human_turn() {
        let report = session.play_computer_turn()?;
        match report.score {
            Some(score) => println!("computer plays {} (score {})", report.mv, score),
            None => println!("computer plays {}", report.mv),
        }
    }
    Ok(())
}

fn print_status(session: &GameSession) {
    println!("{}", render_board(session.board()));
    if session.is_over() {
        println!("game over: {}. type 'new' to play again or 'save'.", session.result_text());
    } else {
        println!("{} to move", session.side_to_move());
    }
}

fn handle(session: &mut GameSession, command: Command) -> ChessResult<bool> {
    match command {
        Command::Quit => return Ok(false),
        Command::Help => println!("{HELP}"),
        Command::Board => print_status(session),
        Command::Moves(from) => {
            let moves = session.moves_from(from)?;
            println!("{}", render_board_with_targets(session.board(), &moves));
            let listed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
            println!("{}: {}", from, listed.join(" "));
        }
        Command::Move(from, to) => {
            let report = session.submit_human_move(from, to)?;
            println!("you play {}", report.mv);
            run_computer_turns(session)?;
            print_status(session);
        }
        Command::Undo => {
            session.undo_turn()?;
            print_status(session);
        }
        Command::New => {
            session.restart();
            run_computer_turns(session)?;
            print_status(session);
        }
        Command::Save => {
            let path = session.save_log()?;
            println!("log saved to {}", path.display());
        }
    }
    Ok(true)
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::from(Args::parse());
    let mut session = GameSession::new(config);

    println!("{HELP}");
    run_computer_turns(&mut session)?;
    print_status(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let outcome = parse_command(line).and_then(|command| handle(&mut session, command));
        match outcome {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                warn!(%err, "command rejected");
                println!("{err}");
            }
        }
        io::stdout().flush()?;
    }

    Ok(())
}
