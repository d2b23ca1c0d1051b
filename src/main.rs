use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use recipebox::application::{AcquireImageUseCase, ImageRequestService, RecipeFeed};
use recipebox::domain::{ImageFetcherPort, ImageStorePort, RecipeState};
use recipebox::infrastructure::{
    AppConfig, CliArgs, ConfigFile, DiskImageStore, HttpImageFetcher, RecipeApiClient,
};
use recipebox::presentation::RecipeListView;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let mut config = ConfigFile::locate(args.config.as_deref())?.load()?;
    config.merge_with_args(args);
    Ok(config)
}

async fn create_image_pipeline(config: &AppConfig) -> Result<AcquireImageUseCase> {
    let store = match &config.cache_dir {
        Some(dir) => DiskImageStore::new(dir.clone()).await?,
        None => DiskImageStore::default_location().await?,
    };
    info!(path = %store.cache_dir().display(), "Using image cache");

    let store: Arc<dyn ImageStorePort> = Arc::new(store);
    let fetcher: Arc<dyn ImageFetcherPort> = Arc::new(HttpImageFetcher::new()?);
    Ok(AcquireImageUseCase::new(store, fetcher))
}

async fn load_images(view: &mut RecipeListView, acquire: AcquireImageUseCase) {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let requests = ImageRequestService::new(acquire, event_tx);
    let handles = requests.request_all(view.image_urls());
    drop(requests);
    debug!(count = handles.len(), "Image requests started");

    while let Some(event) = event_rx.recv().await {
        view.apply(&event);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = recipebox::VERSION, "Starting {}", recipebox::NAME);
    if let Some(source) = &config.source {
        debug!(path = %source.display(), "Using config file");
    }

    let feed = RecipeFeed::new(Arc::new(RecipeApiClient::new(config.api_url.clone())?));
    let state = feed.refresh().await;

    let mut view = RecipeListView::new();
    view.set_state(&state);
    view.set_all_expanded(config.display.expanded);

    if config.display.fetch_images && matches!(state, RecipeState::Success(_)) {
        let acquire = create_image_pipeline(&config).await?;
        load_images(&mut view, acquire).await;
    }

    print!("{}", view.render());

    Ok(())
}
