#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_demo::{
    init_logging, Game, GameConfig, JsonSink, NotificationSink, Orientation, ReaderInput,
    Session, SessionSummary, TextSink,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Format {
    Text,
    Json,
}

/// Single-player Battleship demo. Reads shots from stdin, one per line:
/// `R C` (1-indexed), `test`, `show` or `quit` (alias `exit`).
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = battleship_demo::BOARD_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = battleship_demo::BOARD_COLS)]
    cols: usize,
    #[arg(long, default_value_t = battleship_demo::DEMO_SHIP_SIZE)]
    ship_size: usize,
    #[arg(long, default_value_t = battleship_demo::DEMO_SHIP_ROW, help = "0-indexed row of the ship's first segment")]
    ship_row: usize,
    #[arg(long, default_value_t = battleship_demo::DEMO_SHIP_COL, help = "0-indexed column of the ship's first segment")]
    ship_col: usize,
    #[arg(long, help = "Place the ship along rows instead of columns")]
    vertical: bool,
    #[arg(long, help = "Fix RNG seed for reproducible test firing (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[cfg(feature = "std")]
impl Cli {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig {
            rows: self.rows,
            cols: self.cols,
            ..GameConfig::default()
        };
        config.ship.size = self.ship_size;
        config.ship.row = self.ship_row;
        config.ship.col = self.ship_col;
        config.ship.orientation = if self.vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        config
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = cli.config();
    let game = Game::new(&config)?;
    log::info!("starting {}x{} game", config.rows, config.cols);

    let rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let summary = match cli.format {
        Format::Text => run(game, TextSink::new(std::io::stdout()), rng).await?,
        Format::Json => run(game, JsonSink::new(std::io::stdout()), rng).await?,
    };
    log::info!(
        "session ended after {} commands, {} shots",
        summary.commands,
        summary.shots
    );
    Ok(())
}

#[cfg(feature = "std")]
async fn run<S: NotificationSink>(
    game: Game,
    sink: S,
    rng: SmallRng,
) -> anyhow::Result<SessionSummary> {
    let mut session = Session::new(game, sink, rng);
    let mut input = ReaderInput::stdin();
    session.run(&mut input).await
}
