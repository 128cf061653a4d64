//! drumvoice - plays a four-on-the-floor pattern on one preset voice
//!
//! Run with: cargo run -- [preset] [bpm]
//!
//! Every bar the voice's first oscillator is retuned through the event queue,
//! so each bar is synthesized afresh.

mod app;
mod pattern;

use app::Player;
use color_eyre::eyre::{eyre, WrapErr};
use drumvoice::voices;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let preset = args.next().unwrap_or_else(|| "kick".to_string());
    let bpm = match args.next() {
        Some(bpm) => bpm
            .parse::<f64>()
            .wrap_err_with(|| format!("invalid bpm {bpm:?}"))?,
        None => 120.0,
    };

    let voice = voices::by_name(&preset).ok_or_else(|| {
        eyre!(
            "unknown preset {preset:?}, expected one of: {}",
            voices::NAMES.join(", ")
        )
    })?;

    Player::new(voice).bpm(bpm).run()
}
