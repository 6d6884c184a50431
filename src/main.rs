mod config;
mod files;
mod http;

use config::Config;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cfg = Config::load()?;

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    http::connection::serve(stdin, stdout, &cfg.docroot).await?;

    Ok(())
}
