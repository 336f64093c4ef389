use clap::Parser;
use snip_telemetry::LogFormat;
use std::net::{IpAddr, SocketAddr};

pub const HOST_ENV: &str = "SNIP_HOST";
pub const PORT_ENV: &str = "PORT";
pub const PUBLIC_BASE_URL_ENV: &str = "SNIP_PUBLIC_BASE_URL";
pub const DEFAULT_VALIDITY_ENV: &str = "SNIP_DEFAULT_VALIDITY_MINUTES";
pub const CODE_LENGTH_ENV: &str = "SNIP_CODE_LENGTH";
pub const MAX_GENERATION_ATTEMPTS_ENV: &str = "SNIP_MAX_GENERATION_ATTEMPTS";
pub const LOG_FORMAT_ENV: &str = "SNIP_LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_VALIDITY_MINUTES: &str = "30";
pub const DEFAULT_CODE_LENGTH: &str = "6";
pub const DEFAULT_MAX_GENERATION_ATTEMPTS: &str = "16";

#[derive(Debug, Parser)]
#[command(name = "snip-gateway", about = "In-memory URL shortener with click statistics")]
pub struct CLI {
    #[arg(long, env = HOST_ENV, default_value = DEFAULT_HOST)]
    pub host: IpAddr,

    #[arg(long, env = PORT_ENV, default_value = DEFAULT_PORT)]
    pub port: u16,

    /// Base of the short links handed out, e.g. `https://sn.ip`.
    /// Derived from each request's Host header when unset.
    #[arg(long, env = PUBLIC_BASE_URL_ENV)]
    pub public_base_url: Option<String>,

    #[arg(long, env = DEFAULT_VALIDITY_ENV, default_value = DEFAULT_VALIDITY_MINUTES)]
    pub default_validity_minutes: i64,

    #[arg(long, env = CODE_LENGTH_ENV, default_value = DEFAULT_CODE_LENGTH)]
    pub code_length: usize,

    #[arg(
        long,
        env = MAX_GENERATION_ATTEMPTS_ENV,
        default_value = DEFAULT_MAX_GENERATION_ATTEMPTS
    )]
    pub max_generation_attempts: u32,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,
}

impl CLI {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
