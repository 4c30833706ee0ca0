use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use eyre::WrapErr;
use mindscope_chat::config::ChatConfig;

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub data_dir: PathBuf,
    pub chat: ChatConfig,
}

impl ServerConfig {
    /// Read `MINDSCOPE_BIND` and `MINDSCOPE_DATA_DIR` plus the chat settings.
    pub fn from_env() -> eyre::Result<Self> {
        let bind = env::var("MINDSCOPE_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let bind = bind
            .parse::<SocketAddr>()
            .wrap_err_with(|| format!("invalid MINDSCOPE_BIND: {bind}"))?;
        let data_dir = env::var("MINDSCOPE_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());

        Ok(Self {
            bind,
            data_dir: PathBuf::from(data_dir),
            chat: ChatConfig::from_env(),
        })
    }
}
