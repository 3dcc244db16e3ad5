use serde::Deserialize;

/// Main configuration structure for Sumi-Robots
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub politeness: PolitenessConfig,
}

impl Config {
    /// Full user agent string sent with requests, e.g. `SumiBot/1.0`
    pub fn user_agent_string(&self) -> String {
        format!(
            "{}/{}",
            self.user_agent.crawler_name, self.user_agent.crawler_version
        )
    }

    /// Agent token matched against `User-agent` lines
    pub fn robots_token(&self) -> String {
        self.user_agent.crawler_name.to_lowercase()
    }
}

/// Crawler identification
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler, also its robots.txt token
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

/// Crawl delay settings (seconds)
#[derive(Debug, Clone, Deserialize)]
pub struct PolitenessConfig {
    /// Used when robots.txt declares no Crawl-delay for the crawler
    #[serde(rename = "default-crawl-delay", default = "default_crawl_delay")]
    pub default_crawl_delay: u64,

    /// Upper bound applied to Crawl-delay values from robots.txt
    #[serde(rename = "max-crawl-delay", default = "max_crawl_delay")]
    pub max_crawl_delay: u64,
}

impl Default for PolitenessConfig {
    fn default() -> Self {
        Self {
            default_crawl_delay: default_crawl_delay(),
            max_crawl_delay: max_crawl_delay(),
        }
    }
}

fn default_crawl_delay() -> u64 {
    1
}

fn max_crawl_delay() -> u64 {
    60
}
