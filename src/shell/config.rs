use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_FILE_PATH: &str = "./memos.json";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("MEMO_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("MEMO_PORT must be a valid port, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            file_path: lookup("MEMO_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_PATH)),
            host: lookup("MEMO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}
