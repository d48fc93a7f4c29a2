use thiserror::Error;
use url::Url;

const CHAT_PATH: &str = "/ws/chat/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("page url is invalid: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("page url scheme `{0}` is not http or https")]
    UnsupportedScheme(String),
}

/// WebSocket address of the chat endpoint on the hosting page's server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEndpoint {
    url: Url,
}

impl ChatEndpoint {
    /// Derives the endpoint from the page address: `wss` for `https` pages,
    /// `ws` for `http` pages, same host and port, fixed chat path.
    pub fn from_page_url(page_url: &str) -> Result<Self, EndpointError> {
        let mut url = Url::parse(page_url)?;

        let scheme = match url.scheme() {
            "https" => "wss",
            "http" => "ws",
            other => return Err(EndpointError::UnsupportedScheme(other.to_owned())),
        };

        url.set_scheme(scheme)
            .map_err(|()| EndpointError::UnsupportedScheme(scheme.to_owned()))?;
        // Credentials are never forwarded to the chat socket.
        let _ = url.set_username("");
        let _ = url.set_password(None);
        url.set_path(CHAT_PATH);
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self { url })
    }

    pub fn is_secure(&self) -> bool {
        self.url.scheme() == "wss"
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl std::fmt::Display for ChatEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
