//! Shared command context
//!
//! Owns the session store and the API client for the lifetime of one
//! command. Single writer per process; commands receive it by
//! injection.

use anyhow::{Context as _, bail};
use std::path::PathBuf;

use crate::cli::Cli;
use samovar_client::{ApiClient, ClientConfig, SessionStore};
use shared::client::{LoginResponse, UserInfo};
use shared::models::TableContext;

const DEFAULT_SESSION_FILE: &str = ".veranda/session.json";

pub struct AppContext {
    pub config: ClientConfig,
    pub session: SessionStore,
    pub api: ApiClient,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let path = match &cli.session_file {
            Some(path) => path.clone(),
            None => default_session_path()?,
        };
        let session = SessionStore::load(&path);

        let mut config = ClientConfig::new(&cli.api_url);
        if let Some(addr) = &cli.live_addr {
            config = config.with_live_addr(addr);
        }
        if let Some(token) = session.token() {
            config = config.with_token(token);
        }
        let api = config.build_api_client();

        Ok(Self {
            config,
            session,
            api,
        })
    }

    /// Persist a successful login and arm the client with the token
    pub fn save_login(&mut self, response: &LoginResponse) -> anyhow::Result<()> {
        self.session.set_token(&response.access_token)?;
        self.session.set_current_user(&response.user)?;
        self.session.set_guest_mode(false)?;
        self.api.set_token(Some(response.access_token.clone()));
        Ok(())
    }

    /// Drop all session state (explicit logout or expired token)
    pub fn force_logout(&mut self) {
        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "Failed to clear session");
        }
        self.api.set_token(None);
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.session.current_user()
    }

    /// The scanned table, required for table-scoped commands
    pub fn require_table(&self) -> anyhow::Result<TableContext> {
        self.session
            .current_table()
            .context("No current table. Scan a table code first: veranda scan <CODE>")
    }

    /// Restaurant scope: the staff user's restaurant, else the scanned table's
    pub fn restaurant_id(&self) -> anyhow::Result<i64> {
        if let Some(user) = self.session.current_user()
            && let Some(id) = user.restaurant_id
        {
            return Ok(id);
        }
        if let Some(table) = self.session.current_table() {
            return Ok(table.restaurant_id);
        }
        bail!("No restaurant context. Scan a table or log in as staff first");
    }

    /// Address of the live notification channel
    pub fn live_addr(&self) -> anyhow::Result<&str> {
        self.config
            .live_addr
            .as_deref()
            .context("No live channel address. Pass --live-addr or set VERANDA_LIVE_ADDR")
    }
}

fn default_session_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var_os("HOME").context("HOME is not set; pass --session-file")?;
    Ok(PathBuf::from(home).join(DEFAULT_SESSION_FILE))
}
