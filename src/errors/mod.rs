use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeederError {
    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    // Feed writing errors
    #[error("XML writing failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Rendered feed is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FeederResult<T> = Result<T, FeederError>;
