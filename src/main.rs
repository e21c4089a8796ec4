use std::{sync::Arc, time::Duration};

use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use recs_panel::{
    Config, DatasetId, FilterType, HttpRecommendationsClient, RecommendationsPanel,
    TerminalRenderer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let dataset_id = DatasetId::from_location_path(&config.location_path)?;

    let source = HttpRecommendationsClient::new(
        config.base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let renderer = TerminalRenderer::new(std::io::stdout());
    let panel = RecommendationsPanel::new(Arc::new(source), Box::new(renderer), dataset_id);

    panel.show().await?;

    // Stands in for the host page's filter and page-number controls.
    println!("commands: page <n> | filter <authors|tags|properties|...> | all | quit");

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let outcome = match line.split_once(' ') {
            _ if line.is_empty() => continue,
            _ if line == "quit" || line == "q" => break,
            _ if line == "all" => panel.clear_filter().await,
            Some(("page", number)) => match number.trim().parse::<u32>() {
                Ok(number) => panel.select_page(number).await,
                Err(_) => {
                    eprintln!("not a page number: {}", number);
                    continue;
                }
            },
            Some(("filter", value)) => match value.parse::<FilterType>() {
                Ok(filter) => panel.apply_filter(filter).await,
                Err(e) => {
                    eprintln!("{}", e);
                    continue;
                }
            },
            _ => {
                eprintln!("commands: page <n> | filter <type> | all | quit");
                continue;
            }
        };

        // A failed load keeps the previous page on screen.
        if let Err(e) = outcome {
            eprintln!("error: {}", e);
        }
    }

    Ok(())
}
