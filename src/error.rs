// Error classification shared by the transport, mapping and presentation layers
#[derive(Debug)]
pub enum PokeApiError {
    NotFound(String),
    Transport(String),
    MalformedResponse(String),
    Config(String),
    Image(String),
}

impl PokeApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokeApiError::NotFound(_))
    }
}

impl std::fmt::Display for PokeApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PokeApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            PokeApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            PokeApiError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            PokeApiError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PokeApiError::Image(msg) => write!(f, "Image error: {}", msg),
        }
    }
}

impl std::error::Error for PokeApiError {}

impl From<reqwest::Error> for PokeApiError {
    fn from(err: reqwest::Error) -> Self {
        PokeApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for PokeApiError {
    fn from(err: serde_json::Error) -> Self {
        PokeApiError::MalformedResponse(err.to_string())
    }
}

impl From<toml::de::Error> for PokeApiError {
    fn from(err: toml::de::Error) -> Self {
        PokeApiError::Config(err.to_string())
    }
}

impl From<image::ImageError> for PokeApiError {
    fn from(err: image::ImageError) -> Self {
        PokeApiError::Image(err.to_string())
    }
}
