#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use morris::{init_logging, Game, InputSource};

/// Two-player marker game on a 3×3 board, played over the console.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_logging();

    let mut game = Game::new(InputSource::stdin());
    game.start()?;
    println!();
    Ok(())
}
