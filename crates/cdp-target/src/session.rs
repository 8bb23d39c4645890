use anyhow::{anyhow, Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::handler::Handler;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::{CdpConfig, TargetLayout};
use crate::target::CdpTarget;

/// A browser connection plus the task pumping its CDP handler.
pub struct CdpSession {
    browser: Browser,
    handler: JoinHandle<()>,
    owned: bool,
}

impl CdpSession {
    /// Launches a browser, or attaches when `websocket_url` is configured.
    pub async fn start(config: &CdpConfig) -> Result<Self> {
        match &config.websocket_url {
            Some(ws_url) => Self::connect(ws_url).await,
            None => Self::launch(config).await,
        }
    }

    pub async fn launch(config: &CdpConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder();
        if let Some(executable) = config.resolve_executable() {
            builder = builder.chrome_executable(executable);
        }
        if !config.headless {
            builder = builder.with_head();
        }
        if let Some(dir) = &config.user_data_dir {
            builder = builder.user_data_dir(dir);
        }
        let browser_config = builder
            .build()
            .map_err(|err| anyhow!("invalid browser configuration: {err}"))?;

        let (browser, handler) = timeout(config.launch_timeout(), Browser::launch(browser_config))
            .await
            .context("timed out launching chromium")?
            .context("failed to launch chromium")?;
        info!(headless = config.headless, "chromium launched");
        Ok(Self {
            browser,
            handler: spawn_handler(handler),
            owned: true,
        })
    }

    pub async fn connect(ws_url: &str) -> Result<Self> {
        let (browser, handler) = Browser::connect(ws_url)
            .await
            .with_context(|| format!("failed to connect to {ws_url}"))?;
        info!(ws_url, "attached to running browser");
        Ok(Self {
            browser,
            handler: spawn_handler(handler),
            owned: false,
        })
    }

    /// Opens `url` in a new page and waits for its first navigation.
    pub async fn open(&self, url: &str, layout: TargetLayout) -> Result<CdpTarget> {
        let page = self
            .browser
            .new_page(url)
            .await
            .with_context(|| format!("failed to open {url}"))?;
        page.wait_for_navigation()
            .await
            .with_context(|| format!("navigation to {url} did not finish"))?;
        info!(url, "target page ready");
        Ok(CdpTarget::new(page, layout))
    }

    /// Closes a launched browser; attached browsers are left running.
    pub async fn shutdown(mut self) {
        if self.owned {
            if let Err(err) = self.browser.close().await {
                warn!(error = %err, "failed to close chromium cleanly");
            }
            if let Err(err) = self.browser.wait().await {
                warn!(error = %err, "failed to reap chromium process");
            }
        }
        self.handler.abort();
        debug!("cdp session shut down");
    }
}

fn spawn_handler(mut handler: Handler) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(err) = event {
                debug!(error = %err, "cdp handler event error");
            }
        }
    })
}
