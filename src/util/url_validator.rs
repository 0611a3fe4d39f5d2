use thiserror::Error;
use url::Url;

/// Reasons a configured service URL or an outbound link is rejected.
#[derive(Error, Debug, PartialEq)]
pub enum BaseUrlError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    #[error("URL has no host")]
    MissingHost,
    #[error("Base URL must not carry a query string or fragment")]
    QueryOrFragment,
}

fn parse_http(url_str: &str) -> Result<Url, BaseUrlError> {
    let url = Url::parse(url_str.trim())?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(BaseUrlError::UnsupportedScheme(scheme.to_owned())),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(BaseUrlError::MissingHost);
    }

    Ok(url)
}

/// Validate the content service base URL and return it without a trailing `/`.
///
/// Localhost and private addresses are allowed: the service normally runs
/// next to the presenter during development.
///
/// ```
/// use tripview::util::normalize_base_url;
///
/// assert_eq!(
///     normalize_base_url("http://localhost:8000/").unwrap(),
///     "http://localhost:8000"
/// );
/// assert!(normalize_base_url("ftp://example.com").is_err());
/// ```
pub fn normalize_base_url(url_str: &str) -> Result<String, BaseUrlError> {
    let url = parse_http(url_str)?;
    if url.query().is_some() || url.fragment().is_some() {
        return Err(BaseUrlError::QueryOrFragment);
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Validate a link before handing it to the system browser.
pub fn validate_url_for_open(url_str: &str) -> Result<Url, BaseUrlError> {
    parse_http(url_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(
            normalize_base_url("https://api.example.com/").unwrap(),
            "https://api.example.com"
        );
        assert_eq!(
            normalize_base_url("  http://localhost:8000  ").unwrap(),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_path_prefix_kept() {
        assert_eq!(
            normalize_base_url("https://example.com/backend/").unwrap(),
            "https://example.com/backend"
        );
    }

    #[test]
    fn test_private_hosts_allowed() {
        assert!(normalize_base_url("http://127.0.0.1:8000").is_ok());
        assert!(normalize_base_url("http://192.168.1.20").is_ok());
    }

    #[test]
    fn test_bad_scheme_rejected() {
        assert_eq!(
            normalize_base_url("file:///etc/passwd"),
            Err(BaseUrlError::UnsupportedScheme("file".to_string()))
        );
    }

    #[test]
    fn test_query_and_fragment_rejected() {
        assert_eq!(
            normalize_base_url("https://example.com/?x=1"),
            Err(BaseUrlError::QueryOrFragment)
        );
        assert_eq!(
            normalize_base_url("https://example.com/#top"),
            Err(BaseUrlError::QueryOrFragment)
        );
    }

    #[test]
    fn test_unparseable_rejected() {
        assert!(matches!(
            normalize_base_url("not a url"),
            Err(BaseUrlError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_open_allows_query() {
        let url = validate_url_for_open("https://wa.me/59163084332?text=hola").unwrap();
        assert_eq!(url.host_str(), Some("wa.me"));
        assert!(validate_url_for_open("javascript:alert(1)").is_err());
    }
}
