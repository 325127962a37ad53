//! Site configuration resolved from build-time environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storefront runs inside a browser with no process environment, so
//! overrides are captured with `option_env!` when the WASM bundle is built.
//! Resolution itself goes through a plain key lookup to stay testable.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_SITE_NAME: &str = "DigitalStore";
pub const DEFAULT_HOME_HREF: &str = "/";
pub const DEFAULT_FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1558655146-364adaf1fcc9?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=500&q=80";
pub const DEFAULT_EXCERPT_CHARS: usize = 110;
pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Errors produced while resolving [`SiteConfig`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A value was present but could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_name: String,
    pub home_href: String,
    pub fallback_image_url: String,
    pub excerpt_chars: usize,
    pub theme_storage_key: String,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_owned(),
            home_href: DEFAULT_HOME_HREF.to_owned(),
            fallback_image_url: DEFAULT_FALLBACK_IMAGE.to_owned(),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            theme_storage_key: DEFAULT_THEME_KEY.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `STOREFRONT_SITE_NAME`: default `DigitalStore`
    /// - `STOREFRONT_HOME_HREF`: default `/`
    /// - `STOREFRONT_FALLBACK_IMAGE`: default remote placeholder image, no `'` or `\`
    /// - `STOREFRONT_EXCERPT_CHARS`: default 110, must be positive
    /// - `STOREFRONT_THEME_KEY`: default `theme`
    /// - `STOREFRONT_LOG_LEVEL`: default `info`
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "STOREFRONT_SITE_NAME" => option_env!("STOREFRONT_SITE_NAME"),
                "STOREFRONT_HOME_HREF" => option_env!("STOREFRONT_HOME_HREF"),
                "STOREFRONT_FALLBACK_IMAGE" => option_env!("STOREFRONT_FALLBACK_IMAGE"),
                "STOREFRONT_EXCERPT_CHARS" => option_env!("STOREFRONT_EXCERPT_CHARS"),
                "STOREFRONT_THEME_KEY" => option_env!("STOREFRONT_THEME_KEY"),
                "STOREFRONT_LOG_LEVEL" => option_env!("STOREFRONT_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let defaults = Self::default();
        let excerpt_chars = match get("STOREFRONT_EXCERPT_CHARS") {
            Some(raw) => parse_excerpt_chars(&raw)?,
            None => defaults.excerpt_chars,
        };
        let log_level = match get("STOREFRONT_LOG_LEVEL") {
            Some(raw) => raw
                .parse::<log::Level>()
                .map_err(|_| ConfigError::Invalid { key: "STOREFRONT_LOG_LEVEL", value: raw.clone() })?,
            None => defaults.log_level,
        };

        let fallback_image_url = match get("STOREFRONT_FALLBACK_IMAGE") {
            Some(raw) => parse_fallback_image(raw)?,
            None => defaults.fallback_image_url,
        };

        Ok(Self {
            site_name: get("STOREFRONT_SITE_NAME").unwrap_or(defaults.site_name),
            home_href: get("STOREFRONT_HOME_HREF").unwrap_or(defaults.home_href),
            fallback_image_url,
            excerpt_chars,
            theme_storage_key: get("STOREFRONT_THEME_KEY").unwrap_or(defaults.theme_storage_key),
            log_level,
        })
    }
}

fn parse_excerpt_chars(raw: &str) -> Result<usize, ConfigError> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid { key: "STOREFRONT_EXCERPT_CHARS", value: raw.to_owned() }),
    }
}

/// The fallback URL is embedded in a single-quoted script string in each card's
/// `onerror` handler, where HTML escaping does not protect it.
fn parse_fallback_image(raw: String) -> Result<String, ConfigError> {
    if raw.contains(['\'', '\\']) {
        return Err(ConfigError::Invalid { key: "STOREFRONT_FALLBACK_IMAGE", value: raw });
    }
    Ok(raw)
}
