use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use four_ai::selector::default_depth;
use four_ai::*;

mod display;

#[derive(Parser, Debug)]
#[command(about = "Let two minimax players play four-in-a-row against each other")]
struct Args {
    /// Number of rows on the board
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of columns on the board
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Search depth in plies for player 1
    #[arg(long, default_value_t = default_depth(Player::One))]
    depth_one: u32,

    /// Search depth in plies for player 2
    #[arg(long, default_value_t = default_depth(Player::Two))]
    depth_two: u32,

    /// Evaluate root moves on all cores
    #[arg(long)]
    parallel: bool,

    /// Show a progress bar while the AI is thinking
    #[arg(long)]
    progress: bool,

    /// Print the board as digits instead of coloured tiles
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // logs go to stderr so the game record on stdout stays clean
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("four_ai=info,four_cli=info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut board = BoardState::create_empty(args.rows, args.cols)?;
    let show = |board: &BoardState| {
        if args.plain {
            display::draw_plain(board)
        } else {
            display::draw(board)
        }
    };

    let selectors = (
        selector_for(args.depth_one, &args),
        selector_for(args.depth_two, &args),
    );

    println!("Empty Game Board Created");
    show(&board)?;

    let mut player = Player::One;
    let mut outcome = terminal(&board);
    while outcome == Outcome::Ongoing {
        let selector = match player {
            Player::One => &selectors.0,
            Player::Two => &selectors.1,
        };
        let decision = selector.search(&board, player)?;
        let (row, col) = decision.best_move;
        info!(
            player = player.id(),
            depth = selector.max_depth(),
            nodes_generated = decision.node_count,
            time = ?decision.elapsed,
            "move chosen"
        );

        board = board.apply(player.into(), row, col)?;
        println!("{}: ({}, {})", player, row, col);
        show(&board)?;

        player = player.opponent();
        outcome = terminal(&board);
    }

    match outcome {
        Outcome::PlayerOneWin => println!("player 1 wins"),
        Outcome::PlayerTwoWin => println!("player 2 wins"),
        _ => println!("draw"),
    }
    Ok(())
}

fn selector_for(depth: u32, args: &Args) -> MoveSelector {
    let selector = MoveSelector::new(depth).with_parallel(args.parallel);
    if !args.progress {
        return selector;
    }

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Thinking: {bar:40.cyan/blue} {pos}/{len} moves ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );
    selector.with_progress(progress)
}
