use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub earnings: EarningsConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Path or name of the yt-dlp executable.
    pub binary: String,
    pub extra_args: Vec<String>,
    pub trends_results: usize,
    pub seo_results: usize,
    pub competitor_results: usize,
    pub shorts_qualifier: String,
    pub channel_qualifier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsConfig {
    pub default_cpm: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub page_title: String,
    pub layout: Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Wide,
    Centered,
}

impl Layout {
    pub fn css_class(&self) -> &'static str {
        match self {
            Layout::Wide => "layout-wide",
            Layout::Centered => "layout-centered",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8501,
                workers: num_cpus::get(),
            },
            search: SearchConfig {
                binary: "yt-dlp".to_string(),
                extra_args: Vec::new(),
                trends_results: 10,
                seo_results: 5,
                competitor_results: 5,
                shorts_qualifier: "Shorts".to_string(),
                channel_qualifier: "channel".to_string(),
            },
            earnings: EarningsConfig { default_cpm: 2.0 },
            ui: UiConfig {
                page_title: "YouTube Creator Analytics".to_string(),
                layout: Layout::Wide,
            },
        }
    }
}

impl Config {
    /// Layers defaults, an optional `insights.*` file and `INSIGHTS_*`
    /// variables, then applies the plain `HOST`/`PORT`/`WORKERS` overrides.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let defaults = config::Config::try_from(&Config::default())
            .context("Failed to serialize default configuration")?;

        let layered = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name("insights").required(false))
            .add_source(
                config::Environment::with_prefix("INSIGHTS")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("search.extra_args")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to load configuration sources")?;

        let mut config: Config = layered
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        if let Ok(host) = env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port.parse()?;
        }
        if let Ok(workers) = env::var("WORKERS") {
            config.server.workers = workers.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.workers == 0 {
            bail!("server.workers must be greater than 0");
        }
        let counts = [
            ("search.trends_results", self.search.trends_results),
            ("search.seo_results", self.search.seo_results),
            ("search.competitor_results", self.search.competitor_results),
        ];
        for (key, value) in counts {
            if value == 0 {
                bail!("{} must be greater than 0", key);
            }
        }
        if self.search.binary.trim().is_empty() {
            bail!("search.binary must not be empty");
        }
        if !(self.earnings.default_cpm.is_finite() && self.earnings.default_cpm > 0.0) {
            bail!("earnings.default_cpm must be a positive number");
        }
        Ok(())
    }
}
