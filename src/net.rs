use thiserror::Error;

// ---------------------------------------------------------------------------
// HTTP seam
// ---------------------------------------------------------------------------

/// Status code and full body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("transport error: {0}")]
    Transport(String),
}

/// A single blocking GET. Implemented by [`BlockingClient`] in the app and by
/// canned fakes in tests.
pub trait HttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError>;
}

// ---------------------------------------------------------------------------
// reqwest implementation
// ---------------------------------------------------------------------------

/// Blocking reqwest client. No retries; reqwest's default timeout applies.
pub struct BlockingClient {
    inner: reqwest::blocking::Client,
}

impl BlockingClient {
    pub fn new() -> anyhow::Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(concat!("exoatlas/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { inner })
    }
}

impl HttpClient for BlockingClient {
    fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let response = self
            .inner
            .get(url)
            .send()
            .map_err(|e| HttpError::Transport(e.without_url().to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| HttpError::Transport(e.without_url().to_string()))?
            .to_vec();
        Ok(HttpResponse { status, body })
    }
}
