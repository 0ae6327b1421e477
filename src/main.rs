use std::io;
use std::time::Instant;

use tracing::info;
use tracing_subscriber::EnvFilter;

use wordfreq::Config;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::default();
    info!("using stopwords at {}", config.stopwords_path.display());
    info!("using corpus at {}", config.corpus_path.display());

    let start = Instant::now();
    let stdout = io::stdout();
    let report = wordfreq::run(&config, stdout.lock())?;
    info!(
        "reported {} top words and {} lengths in {} ms",
        report.top.len(),
        report.lengths.len(),
        start.elapsed().as_millis()
    );
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}
