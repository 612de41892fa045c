use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fetch-lab")]
#[command(about = "Fetches a JSON document and renders it through a minimal widget")]
pub struct CliConfig {
    #[arg(long, default_value = "https://jsonplaceholder.typicode.com/todos/1")]
    pub endpoint: String,

    #[arg(long, help = "Artificial delay in milliseconds added to every response")]
    pub latency_ms: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn latency(&self) -> Option<Duration> {
        self.latency_ms.map(Duration::from_millis)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)
    }
}
