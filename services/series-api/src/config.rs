//! Service configuration from flags and environment.

use clap::{Parser, ValueEnum};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::LookupError;
use crate::tvmaze::{TvMazeClient, DEFAULT_BASE_URL};

#[derive(Parser, Debug, Clone)]
#[command(name = "series-api")]
#[command(about = "Series lookup API backed by TVmaze", long_about = None)]
#[command(version)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Base URL of the show-metadata API
    #[arg(long, env = "TVMAZE_API_URL", default_value = DEFAULT_BASE_URL)]
    pub tvmaze_url: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Text,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn tvmaze_client(&self) -> Result<TvMazeClient, LookupError> {
        TvMazeClient::new(self.tvmaze_url.clone())
    }
}
