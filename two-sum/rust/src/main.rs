use color_eyre::eyre::Result;
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};
use two_sum::find_pair;

fn main() -> Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!(e))?;

    let values = [2, 7, 11, 15];
    let target = 9;

    let pair = find_pair(&values, target)?;
    debug!(?values, target, %pair, "found pair");

    println!("{pair}");

    Ok(())
}
