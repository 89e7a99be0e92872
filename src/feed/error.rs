use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("user not found")]
    NotFound,
    #[error(
        "rate limit exceeded; set GITHUB_TOKEN to increase limits{}",
        reset_suffix(.resets_at)
    )]
    RateLimited { resets_at: Option<String> },
    #[error("github api error: {status}: {body}")]
    Api { status: String, body: String },
    #[error("request failed")]
    Transport(#[from] reqwest::Error),
    #[error("decode failed")]
    Decode(#[from] serde_json::Error),
}

fn reset_suffix(resets_at: &Option<String>) -> String {
    match resets_at {
        Some(at) => format!(" (resets at {at})"),
        None => String::new(),
    }
}
