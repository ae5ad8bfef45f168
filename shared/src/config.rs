/// Base path of the transactions REST resource
pub const DEFAULT_API_BASE: &str = "/api/transactions";

/// Rows per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// Client settings. The host page may override any of them; see the frontend's config service.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base: String,
    pub page_size: u32,
    pub log_level: log::LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Apply raw overrides, keeping the default for anything missing or unparseable.
    /// Returns the rejected values so the caller can warn about them.
    pub fn with_overrides(
        api_base: Option<&str>,
        page_size: Option<&str>,
        log_level: Option<&str>,
    ) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }

        if let Some(raw) = page_size {
            match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => config.page_size = size,
                _ => rejected.push(format!("page size '{}'", raw)),
            }
        }

        if let Some(raw) = log_level {
            match raw.trim().parse::<log::LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => rejected.push(format!("log level '{}'", raw)),
            }
        }

        (config, rejected)
    }
}
