//! Application configuration structures.

use std::fs;
use std::path::Path;

use scraper::Selector;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{SiteSelectors, TargetPeriod};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site addressing
    #[serde(default)]
    pub site: SiteConfig,

    /// HTTP and pacing behavior
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Output location
    #[serde(default)]
    pub output: OutputConfig,

    /// Log verbosity
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Page schema
    #[serde(default)]
    pub selectors: SiteSelectors,

    /// Monthly list pages to archive
    #[serde(default = "defaults::targets")]
    pub targets: Vec<TargetPeriod>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.request_delay_min_ms > self.crawler.request_delay_max_ms {
            return Err(AppError::validation(
                "crawler.request_delay_min_ms must be <= crawler.request_delay_max_ms",
            ));
        }
        if self.output.dir.trim().is_empty() {
            return Err(AppError::validation("output.dir is empty"));
        }
        self.site.base()?;
        if self.selectors.publisher_marker.is_empty() {
            return Err(AppError::validation("selectors.publisher_marker is empty"));
        }
        for (name, css) in self.selectors.css() {
            Selector::parse(css)
                .map_err(|e| AppError::selector(css, format!("{name}: {e:?}")))?;
        }
        if self.targets.is_empty() {
            return Err(AppError::validation("No target periods defined"));
        }
        for target in &self.targets {
            if !(1..=12).contains(&target.month) {
                return Err(AppError::validation(format!(
                    "Invalid month {} for year {}",
                    target.month, target.year
                )));
            }
            Url::parse(&target.url)?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            crawler: CrawlerConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
            selectors: SiteSelectors::default(),
            targets: defaults::targets(),
        }
    }
}

/// Site addressing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base that relative decision links resolve against
    #[serde(default = "defaults::base_url")]
    pub base_url: String,
}

impl SiteConfig {
    /// Parsed base URL.
    pub fn base(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        if base.cannot_be_a_base() {
            return Err(AppError::validation(format!(
                "site.base_url is not a base URL: {}",
                self.base_url
            )));
        }
        Ok(base)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
        }
    }
}

/// HTTP client and pacing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Encoding used when the server declares no charset
    #[serde(default = "defaults::encoding")]
    pub encoding: String,

    /// Lower bound of the delay between detail requests
    #[serde(default = "defaults::request_delay_min")]
    pub request_delay_min_ms: u64,

    /// Upper bound of the delay between detail requests
    #[serde(default = "defaults::request_delay_max")]
    pub request_delay_max_ms: u64,

    /// Pause between two periods
    #[serde(default = "defaults::period_delay")]
    pub period_delay_ms: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            encoding: defaults::encoding(),
            request_delay_min_ms: defaults::request_delay_min(),
            request_delay_max_ms: defaults::request_delay_max(),
            period_delay_ms: defaults::period_delay(),
        }
    }
}

/// Output location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "defaults::output_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    use super::TargetPeriod;

    pub fn base_url() -> String {
        "https://www.ikpec.or.kr/m2/".into()
    }

    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; ikpec-archiver/0.1)".into()
    }
    pub fn timeout() -> u64 {
        10
    }
    pub fn encoding() -> String {
        "euc-kr".into()
    }
    pub fn request_delay_min() -> u64 {
        2000
    }
    pub fn request_delay_max() -> u64 {
        4000
    }
    pub fn period_delay() -> u64 {
        1000
    }

    pub fn output_dir() -> String {
        "output".into()
    }

    pub fn log_level() -> String {
        "info".into()
    }

    /// Monthly sessions 2019-2022, keyed by the session date code.
    /// There were no sessions in August.
    const SESSIONS: &[(i32, u32, &str)] = &[
        (2019, 1, "20190109"),
        (2019, 2, "20190213"),
        (2019, 3, "20190313"),
        (2019, 4, "20190410"),
        (2019, 5, "20190508"),
        (2019, 6, "20190612"),
        (2019, 7, "20190710"),
        (2019, 9, "20190910"),
        (2019, 10, "20191008"),
        (2019, 11, "20191113"),
        (2019, 12, "20191211"),
        (2020, 1, "20200108"),
        (2020, 2, "20200212"),
        (2020, 3, "20200325"),
        (2020, 4, "20200408"),
        (2020, 5, "20200513"),
        (2020, 6, "20200610"),
        (2020, 7, "20200708"),
        (2020, 9, "20200924"),
        (2020, 10, "20201014"),
        (2020, 11, "20201111"),
        (2020, 12, "20201209"),
        (2021, 1, "20210113"),
        (2021, 2, "20210209"),
        (2021, 3, "20210310"),
        (2021, 4, "20210414"),
        (2021, 5, "20210512"),
        (2021, 6, "20210609"),
        (2021, 7, "20210714"),
        (2021, 9, "20210908"),
        (2021, 10, "20211013"),
        (2021, 11, "20211110"),
        (2021, 12, "20211208"),
        (2022, 1, "20220112"),
        (2022, 2, "20220209"),
        (2022, 3, "20220316"),
        (2022, 4, "20220413"),
        (2022, 5, "20220511"),
        (2022, 6, "20220608"),
        (2022, 7, "20220713"),
        (2022, 9, "20220907"),
        (2022, 10, "20221012"),
        (2022, 11, "20221109"),
        (2022, 12, "20221207"),
    ];

    pub fn targets() -> Vec<TargetPeriod> {
        SESSIONS
            .iter()
            .map(|&(year, month, code)| TargetPeriod {
                year,
                month,
                url: format!(
                    "https://www.ikpec.or.kr/m2/sub2_1.asp?Year={year}&DecideBaseNo=Y{code}"
                ),
            })
            .collect()
    }
}
