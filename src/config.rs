/// Service configuration resolved once at startup and passed by reference
/// into the components that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openlibrary_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let openlibrary_url = std::env::var("OPENLIBRARY_URL")
            .unwrap_or_else(|_| "https://openlibrary.org".to_string());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5002);

        Self {
            openlibrary_url,
            port,
        }
    }
}
