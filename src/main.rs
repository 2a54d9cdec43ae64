//! xfboard terminal front end
//!
//! Draws the board as text and turns typed commands into the same pointer
//! events a graphical front end would send, so clicks and drags go through
//! the real input router.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use xfboard::board::{BoardLayout, BoardSurface, PromotionChoice, Square};
use xfboard::core::{init_logging, ClientSettings};
use xfboard::game::{GameResult, MoveCoordinator, SessionState, TurnOutcome};
use xfboard::input::InputEvent;
use xfboard::networking::{HttpMoveAuthority, MoveAuthorityClient};
use xfboard::ui::PromotionResolver;

type Coordinator = MoveCoordinator<HttpMoveAuthority>;

const HELP: &str = "\
commands:
  board                 show the board and status line
  click <square>        tap a square (two taps make a move)
  drag <from> <to>      drag a piece
  promote <q|r|b|n>     answer the promotion picker
  dismiss               close the picker (queen)
  reset                 start a new game
  history               show the move list
  stats                 show wins, losses, draws and recent games
  help                  this text
  quit                  leave";

#[derive(Debug, Parser)]
#[command(name = "xfboard", version, about = "Play chess against a remote move authority")]
struct Cli {
    /// Move authority base URL, overrides the settings file and XFBOARD_SERVER_URL
    #[arg(short, long)]
    server: Option<String>,

    /// Settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log: Option<String>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Board,
    Click(Square),
    Drag(Square, Square),
    Promote(PromotionChoice),
    Dismiss,
    Reset,
    History,
    Stats,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Option<Self>> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            [] => return Ok(None),
            ["board"] => Command::Board,
            ["click", square] => Command::Click(square.parse()?),
            ["drag", from, to] => Command::Drag(from.parse()?, to.parse()?),
            ["promote", letter] => {
                let choice = letter
                    .chars()
                    .next()
                    .and_then(PromotionChoice::from_letter)
                    .with_context(|| format!("unknown promotion piece {:?}", letter))?;
                Command::Promote(choice)
            }
            ["dismiss"] => Command::Dismiss,
            ["reset"] => Command::Reset,
            ["history"] => Command::History,
            ["stats"] => Command::Stats,
            ["help"] => Command::Help,
            ["quit"] | ["exit"] => Command::Quit,
            _ => anyhow::bail!("unrecognised command {:?}, try `help`", line.trim()),
        };
        Ok(Some(command))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.log.as_deref())?;

    let settings_path = cli.config.clone().unwrap_or_else(ClientSettings::default_path);
    let mut settings = ClientSettings::load_from(&settings_path);
    settings.apply_env_overrides();
    if let Some(server) = cli.server {
        settings.server_url = server;
    }
    if cli.save_settings {
        settings
            .save_to(&settings_path)
            .with_context(|| format!("failed to save settings to {:?}", settings_path))?;
    }

    let authority = HttpMoveAuthority::new(settings.base_url()?, settings.request_timeout())
        .context("failed to build the HTTP client")?;
    let surface = BoardSurface::new(BoardLayout::from(settings.layout), settings.asset_root.clone());
    let coordinator = MoveCoordinator::with_session(
        MoveAuthorityClient::new(Arc::new(authority)),
        SessionState::new(surface),
        PromotionResolver::new(&settings.asset_root),
    );

    if let Err(e) = coordinator.start().await {
        warn!("Could not load the game: {}. Use `reset` to retry.", e);
    }
    print_board(&coordinator);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Board => print_board(&coordinator),
            Command::Click(square) => {
                let (x, y) = center(&coordinator, square);
                dispatch(
                    &coordinator,
                    vec![
                        InputEvent::PointerDown { x, y },
                        InputEvent::PointerUp { x, y },
                        InputEvent::Click { x, y },
                    ],
                );
            }
            Command::Drag(from, to) => {
                let (x, y) = center(&coordinator, from);
                let (dx, dy) = center(&coordinator, to);
                dispatch(
                    &coordinator,
                    vec![
                        InputEvent::PointerDown { x, y },
                        InputEvent::PointerMove { x: dx, y: dy },
                        InputEvent::PointerUp { x: dx, y: dy },
                        InputEvent::Click { x: dx, y: dy },
                    ],
                );
            }
            Command::Promote(choice) => {
                if !coordinator.promotion().choose(choice) {
                    println!("No promotion is pending");
                }
            }
            Command::Dismiss => {
                if !coordinator.promotion().dismiss() {
                    println!("No promotion is pending");
                }
            }
            Command::Reset => {
                let coordinator = coordinator.clone();
                tokio::spawn(async move {
                    report(&coordinator, coordinator.reset().await.map(|_| None));
                });
            }
            Command::History => {
                let session = coordinator.session().lock();
                for row in session.move_list.rows() {
                    println!("{}", row);
                }
            }
            Command::Stats => {
                let session = coordinator.session().lock();
                println!("{}", session.stats.summary());
                for line in &session.stats.recent {
                    println!("  {}", line);
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => {
                coordinator.promotion().close();
                break;
            }
        }
    }

    info!("Bye");
    Ok(())
}

fn center(coordinator: &Coordinator, square: Square) -> (f32, f32) {
    coordinator.session().lock().surface.square_rect(square).center()
}

/// Feed one gesture to the coordinator without blocking the prompt
fn dispatch(coordinator: &Coordinator, events: Vec<InputEvent>) {
    let coordinator = coordinator.clone();
    tokio::spawn(async move {
        for event in events {
            let result = coordinator.handle_event(event).await;
            let finished = !matches!(result, Ok(None));
            report(&coordinator, result);
            if finished {
                break;
            }
        }
    });
}

fn report(coordinator: &Coordinator, result: GameResult<Option<TurnOutcome>>) {
    match result {
        Ok(None) => {}
        Ok(Some(outcome)) => {
            info!("Turn finished: {:?}", outcome);
            print_board(coordinator);
        }
        Err(e) => {
            error!("{}", e);
            print_board(coordinator);
        }
    }
    if coordinator.promotion().is_active() {
        println!("Promote to? promote q|r|b|n, or dismiss for a queen");
    }
}

fn print_board(coordinator: &Coordinator) {
    let session = coordinator.session().lock();
    println!("{}", session.surface);
    if let Some(row) = session.move_list.last() {
        println!("last: {}", row);
    }
    println!("{}", session.status);
}
