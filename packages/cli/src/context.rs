//! Application context with shared state and utilities

use anyhow::{Context, Result};
use colored::Colorize;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use storefront_core::{
    ClientConfig, ClientTransport, NotificationKind, Notifier, StorefrontApi,
};

/// Application context passed to all commands
pub struct AppContext {
    pub config: ClientConfig,
    pub api: StorefrontApi<ClientTransport>,
    pub term: Term,
}

impl AppContext {
    pub fn new(api_url: Option<String>, offline: bool) -> Result<Self> {
        let mut config = ClientConfig::from_env()?;
        if let Some(url) = api_url {
            config = config.with_api_url(url);
        }

        let transport = ClientTransport::from_config(&config, offline)
            .context("Failed to create HTTP client")?;

        Ok(Self {
            config,
            api: StorefrontApi::new(transport),
            term: Term::stdout(),
        })
    }

    pub fn theme(&self) -> ColorfulTheme {
        ColorfulTheme::default()
    }
}

/// Prints notifications as colored lines
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        let line = format!("{} {}", kind.icon(), message);
        let line = match kind {
            NotificationKind::Success => line.bright_green(),
            NotificationKind::Error => line.bright_red(),
            NotificationKind::Info => line.bright_blue(),
        };
        println!("{line}");
    }
}
