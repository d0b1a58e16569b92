use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{0}")]
    Transport(String),

    #[error("HTTP error code {0}")]
    HttpStatus(u16),

    #[error("{0}")]
    Parse(String),

    #[error("no data returned for target")]
    EmptySeries,

    #[error("no valid datapoints")]
    NoValidDatapoints,

    #[error("{0}")]
    Config(String),
}

impl ProbeError {
    /// Name of the failure kind as it appears in the reported message.
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::Transport(_) => "TransportError",
            ProbeError::HttpStatus(_) => "HttpStatusError",
            ProbeError::Parse(_) => "ParseError",
            ProbeError::EmptySeries => "EmptySeriesError",
            ProbeError::NoValidDatapoints => "NoValidDatapoints",
            ProbeError::Config(_) => "ConfigError",
        }
    }

    /// Data conditions that `--ignore-missing` may turn into a forced OK.
    pub fn is_missing_data(&self) -> bool {
        matches!(self, ProbeError::EmptySeries | ProbeError::NoValidDatapoints)
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ProbeError::HttpStatus(status.as_u16()),
            None if err.is_timeout() => {
                ProbeError::Transport(format!("request timed out: {}", err))
            }
            None => ProbeError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(ProbeError::HttpStatus(401).kind(), "HttpStatusError");
        assert_eq!(ProbeError::Transport("refused".into()).kind(), "TransportError");
        assert_eq!(ProbeError::EmptySeries.kind(), "EmptySeriesError");
        assert_eq!(ProbeError::NoValidDatapoints.kind(), "NoValidDatapoints");
    }

    #[test]
    fn test_display() {
        assert_eq!(ProbeError::HttpStatus(401).to_string(), "HTTP error code 401");
        assert_eq!(ProbeError::EmptySeries.to_string(), "no data returned for target");
        assert_eq!(ProbeError::NoValidDatapoints.to_string(), "no valid datapoints");
    }

    #[test]
    fn test_missing_data_classification() {
        assert!(ProbeError::EmptySeries.is_missing_data());
        assert!(ProbeError::NoValidDatapoints.is_missing_data());
        assert!(!ProbeError::HttpStatus(500).is_missing_data());
        assert!(!ProbeError::Parse("eof".into()).is_missing_data());
    }

    #[test]
    fn test_json_error_maps_to_parse() {
        let err = serde_json::from_str::<Vec<u8>>("[1,").unwrap_err();
        assert!(matches!(ProbeError::from(err), ProbeError::Parse(_)));
    }
}
