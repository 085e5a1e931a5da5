use url::Url;

/// Channel name used when a URL yields no usable host.
pub const UNKNOWN_SOURCE: &str = "UNKNOWN SOURCE";

/// Derive a channel display name from an article URL.
///
/// `https://www.Example.com/x` becomes `EXAMPLE.COM`. Scheme-less bare
/// domains (`bbc.co.uk/news`) are accepted; anything without a usable host
/// maps to [`UNKNOWN_SOURCE`].
pub fn extract_source(url: &str) -> String {
    host_of(url.trim())
        .map(|host| {
            let host = host.to_ascii_lowercase();
            let host = host.strip_prefix("www.").unwrap_or(&host);
            host.to_uppercase()
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string())
}

/// [`extract_source`] for an optional URL cell.
pub fn extract_source_opt(url: Option<&str>) -> String {
    url.map(extract_source)
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string())
}

fn host_of(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    match Url::parse(raw) {
        Ok(parsed) if parsed.host_str().is_some() => parsed.host_str().map(str::to_string),
        // `a.com:8080/x` parses as scheme `a.com` with no host.
        Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) if looks_like_bare_domain(raw) => {
            Url::parse(&format!("https://{raw}"))
                .ok()
                .and_then(|parsed| parsed.host_str().map(str::to_string))
        }
        _ => None,
    }
}

/// `domain.tld[:port][/path...]` with no scheme, credentials or spaces.
fn looks_like_bare_domain(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let head = raw.split(['/', '?', '#']).next().unwrap_or("");
    let (domain, port) = match head.split_once(':') {
        Some((domain, port)) => (domain, Some(port)),
        None => (head, None),
    };
    let port_ok = match port {
        Some(p) => !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    };
    port_ok
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_www_and_uppercases() {
        assert_eq!(extract_source("https://www.Example.com/x"), "EXAMPLE.COM");
        assert_eq!(
            extract_source("http://edition.cnn.com/2024/world?id=4"),
            "EDITION.CNN.COM"
        );
    }

    #[test]
    fn only_leading_www_is_stripped() {
        assert_eq!(extract_source("https://news.www.example.org"), "NEWS.WWW.EXAMPLE.ORG");
    }

    #[test]
    fn unusable_inputs_are_unknown() {
        assert_eq!(extract_source(""), UNKNOWN_SOURCE);
        assert_eq!(extract_source("   "), UNKNOWN_SOURCE);
        assert_eq!(extract_source("not a url"), UNKNOWN_SOURCE);
        assert_eq!(extract_source("localhost"), UNKNOWN_SOURCE);
        assert_eq!(extract_source("mailto:desk@example.com"), UNKNOWN_SOURCE);
        assert_eq!(extract_source("https://"), UNKNOWN_SOURCE);
        assert_eq!(extract_source("http://exa mple.com"), UNKNOWN_SOURCE);
    }

    #[test]
    fn bare_domains_are_accepted() {
        assert_eq!(extract_source("a.com"), "A.COM");
        assert_eq!(extract_source("www.bbc.co.uk/news/world"), "BBC.CO.UK");
        assert_eq!(extract_source("a.com:8080/x"), "A.COM");
        assert_eq!(extract_source("WWW.Example.com:443"), "EXAMPLE.COM");
    }

    #[test]
    fn bare_domain_lookalikes_are_unknown() {
        assert_eq!(extract_source("a.com:http/x"), UNKNOWN_SOURCE);
        assert_eq!(extract_source("news:desk@bbc.co.uk"), UNKNOWN_SOURCE);
        assert_eq!(extract_source("data:text/plain,a.b"), UNKNOWN_SOURCE);
    }

    #[test]
    fn hosts_are_lowercased_before_www_is_stripped() {
        assert_eq!(extract_source("feed://WWW.Example.com/x"), "EXAMPLE.COM");
        assert_eq!(extract_source("HTTPS://WWW.REUTERS.COM"), "REUTERS.COM");
    }

    #[test]
    fn missing_url_is_unknown() {
        assert_eq!(extract_source_opt(None), UNKNOWN_SOURCE);
        assert_eq!(extract_source_opt(Some("https://reuters.com")), "REUTERS.COM");
    }
}
