//! Event loop: stdin commands and frame ticks in, rendered text out.

use std::io::BufRead;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use roster_core::catalog::{CatalogSource, DetailCache, PokeApiClient, load_catalog};
use roster_core::color::{
    ColorExtractor, ExtractOptions, HttpImageLoader, ImageLoader, style_or_fallback,
};
use roster_core::constants::color::ENRICH_CONCURRENCY;
use roster_model::ImageUrlTemplate;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Semaphore, mpsc};

use super::bootstrap::{AppConfig, base_state};
use crate::input::{HELP, parse_command};
use crate::messages::{Effect, Message, UserCommand};
use crate::{render, update};

const FRAME: Duration = Duration::from_millis(16);
/// Terminal bell, rung when the centered card changes.
const CUE: &[u8] = b"\x07";

/// Collaborators the runtime hands work to.
#[derive(Clone)]
pub struct Services {
    catalog: Arc<dyn CatalogSource>,
    extractor: Arc<ColorExtractor>,
    details: Arc<DetailCache>,
    template: ImageUrlTemplate,
    options: ExtractOptions,
    extract_permits: Arc<Semaphore>,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("extractor", &self.extractor)
            .field("details", &self.details)
            .field("template", &self.template)
            .field("options", &self.options)
            .finish()
    }
}

impl Services {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        loader: Arc<dyn ImageLoader>,
        template: ImageUrlTemplate,
        options: ExtractOptions,
    ) -> Self {
        Self {
            catalog,
            extractor: Arc::new(ColorExtractor::new(loader)),
            details: Arc::new(DetailCache::new()),
            template,
            options,
            extract_permits: Arc::new(Semaphore::new(ENRICH_CONCURRENCY)),
        }
    }

    /// HTTP-backed services. Failing to build the clients is fatal.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = PokeApiClient::with_limit(config.api_url(), config.runtime.catalog_limit())
            .context("Failed to create catalog client")?;
        let loader = HttpImageLoader::new().context("Failed to create image loader")?;
        Ok(Self::new(
            Arc::new(client),
            Arc::new(loader),
            config.image_template.clone(),
            config.runtime.extract_options(),
        ))
    }

    /// Run an effect in the background; its result comes back as a message.
    /// `Effect::Cue` and `Effect::Exit` are handled by the loop and ignored
    /// here.
    pub fn execute(&self, effect: Effect, tx: mpsc::UnboundedSender<Message>) {
        match effect {
            Effect::LoadCatalog { generation } => {
                let catalog = Arc::clone(&self.catalog);
                let template = self.template.clone();
                tokio::spawn(async move {
                    let result = load_catalog(catalog.as_ref(), &template)
                        .await
                        .map_err(|e| e.to_string());
                    send(&tx, Message::CatalogLoaded { generation, result });
                });
            }
            Effect::ExtractColor {
                generation,
                id,
                image_url,
            } => {
                let extractor = Arc::clone(&self.extractor);
                let permits = Arc::clone(&self.extract_permits);
                let options = self.options;
                tokio::spawn(async move {
                    let Ok(_permit) = permits.acquire_owned().await else {
                        return;
                    };
                    let result = extractor.extract(&image_url, options).await;
                    let style = style_or_fallback(&image_url, result);
                    send(
                        &tx,
                        Message::ColorExtracted {
                            generation,
                            id,
                            style,
                        },
                    );
                });
            }
            Effect::FetchDetails { generation, id } => {
                let catalog = Arc::clone(&self.catalog);
                let details = Arc::clone(&self.details);
                tokio::spawn(async move {
                    let result = details
                        .get_or_fetch(catalog.as_ref(), &id)
                        .await
                        .map_err(|e| e.to_string());
                    send(
                        &tx,
                        Message::DetailsLoaded {
                            generation,
                            id,
                            result,
                        },
                    );
                });
            }
            Effect::Cue | Effect::Exit => {}
        }
    }
}

fn send(tx: &mpsc::UnboundedSender<Message>, message: Message) {
    if tx.send(message).is_err() {
        log::debug!("Event loop gone; dropping background result");
    }
}

/// Forward stdin lines as input messages until EOF. Reads on a dedicated
/// thread so a pending read never holds up runtime shutdown.
fn spawn_stdin_reader(tx: mpsc::UnboundedSender<Message>) -> Result<()> {
    std::thread::Builder::new()
        .name("roster-stdin".into())
        .spawn(move || {
            let mut lines = std::io::stdin().lock().lines();
            loop {
                let command = match lines.next() {
                    Some(Ok(line)) => match parse_command(&line) {
                        Ok(Some(command)) => command,
                        Ok(None) => continue,
                        Err(e) => {
                            log::warn!("{e:#}");
                            continue;
                        }
                    },
                    None => UserCommand::Quit,
                    Some(Err(e)) => {
                        log::error!("Failed to read stdin: {e}");
                        UserCommand::Quit
                    }
                };
                let quit = command == UserCommand::Quit;
                send(
                    &tx,
                    Message::Input {
                        command,
                        at: Instant::now(),
                    },
                );
                if quit {
                    break;
                }
            }
        })
        .context("Failed to spawn stdin reader")?;
    Ok(())
}

pub async fn run(config: AppConfig) -> Result<()> {
    let services = Services::from_config(&config)?;
    let mut state = base_state(&config);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut stdout = tokio::io::stdout();

    stdout.write_all(format!("{HELP}\n").as_bytes()).await?;
    spawn_stdin_reader(tx.clone())?;

    let mut pending = update::start(&mut state);
    let mut frames = tokio::time::interval(FRAME);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        for effect in pending.drain(..) {
            match effect {
                Effect::Exit => {
                    log::info!("Exiting");
                    return Ok(());
                }
                Effect::Cue => stdout.write_all(CUE).await.context("Failed to write cue")?,
                effect => services.execute(effect, tx.clone()),
            }
        }

        if state.take_dirty() {
            stdout
                .write_all(render::view(&state).as_bytes())
                .await
                .context("Failed to write view")?;
            stdout.flush().await?;
        }

        let message = tokio::select! {
            Some(message) = rx.recv() => message,
            _ = frames.tick() => Message::Tick(Instant::now()),
        };
        pending = update::update(&mut state, message);
    }
}
