use tracing::warn;
use url::Url;

/// Resolve `href` against `base` into an absolute, comparable URL string.
///
/// An href that already carries an http scheme prefix passes through
/// unchanged. Anything else is resolved as an RFC 3986 reference against
/// the base, which keeps `?` and `/` in query strings literal rather than
/// percent-encoding them (parsing `/?page=1` naively yields
/// `/%3Fpage=1`). An empty href resolves to the base itself. Malformed
/// input is logged and the href returned best-effort; never fatal.
pub fn clean(base: &str, href: &str) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }

    let base_url = match Url::parse(base) {
        Ok(url) => url,
        Err(err) => {
            warn!(%base, %err, "failed to parse base url");
            return href.to_string();
        }
    };

    match base_url.join(href) {
        Ok(url) => url.to_string(),
        Err(err) => {
            warn!(%base, %href, %err, "failed to resolve href against base");
            href.to_string()
        }
    }
}
