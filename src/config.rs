use tracing::info;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_PAGE_SIZE: u64 = 20;

/// Application configuration.
/// Debug builds additionally load a `.env` file before reading the
/// environment.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the product search service
    pub api_url: String,
    /// Products shown per page; must match what the search service returns
    pub page_size: u64,
}

impl Config {
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        if dotenvy::dotenv().is_ok() {
            info!("Dev mode - loaded .env file");
        }

        Self::from_env()
    }

    fn from_env() -> Self {
        let api_url =
            std::env::var("SHOPFRONT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let page_size = std::env::var("SHOPFRONT_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);

        info!(%api_url, page_size, "Config loaded");

        Self { api_url, page_size }
    }
}
