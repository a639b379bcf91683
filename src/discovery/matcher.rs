//! Host recovery from Traefik matcher expressions.
//!
//! # Responsibilities
//! - Find the first `Host(...)` term in a matcher expression
//! - Classify the host by entry point (`websecure` → https, `web` → http)
//!
//! # Design Decisions
//! - Only the first `Host(...)` term is honored, even in `||` combinations
//! - Hostnames pass through unvalidated
//! - Backticks and double quotes are both accepted as quoting
//! - `websecure` wins when a rule is bound to both entry points
//! - No regex: a single left-to-right scan

use tracing::debug;

use crate::discovery::rule::RouteRule;

/// Plaintext entry point name.
pub const ENTRY_POINT_WEB: &str = "web";

/// TLS entry point name.
pub const ENTRY_POINT_WEBSECURE: &str = "websecure";

const HOST_TERM: &str = "Host(";

/// Recover a scheme-qualified URL from one rule.
///
/// Returns `None` when the expression has no `Host(...)` term or the rule is
/// not bound to a public entry point.
pub fn parse_host(rule: &RouteRule) -> Option<String> {
    let host = extract_host(&rule.match_expression)?;

    let url = classify(host, &rule.entry_points);
    if url.is_none() {
        debug!(
            host = %host,
            entry_points = ?rule.entry_points,
            "Skipping host without a public entry point"
        );
    }
    url
}

/// Extract the hostname of the first well-formed `Host(...)` term.
pub fn extract_host(expression: &str) -> Option<&str> {
    let mut offset = 0;

    while let Some(pos) = expression[offset..].find(HOST_TERM) {
        let start = offset + pos;
        let args_start = start + HOST_TERM.len();

        if is_term_start(expression, start) {
            if let Some(host) = first_quoted(&expression[args_start..]) {
                return Some(host);
            }
        }
        offset = args_start;
    }

    None
}

/// Prefix `host` with the scheme implied by `entry_points`.
pub fn classify(host: &str, entry_points: &[String]) -> Option<String> {
    let bound_to = |name: &str| entry_points.iter().any(|ep| ep == name);

    if bound_to(ENTRY_POINT_WEBSECURE) {
        Some(format!("https://{host}"))
    } else if bound_to(ENTRY_POINT_WEB) {
        Some(format!("http://{host}"))
    } else {
        None
    }
}

// `Host(` must not be the tail of a longer identifier such as `VirtualHost(`.
fn is_term_start(expression: &str, index: usize) -> bool {
    expression[..index]
        .chars()
        .next_back()
        .map_or(true, |c| !(c.is_ascii_alphanumeric() || c == '_'))
}

fn first_quoted(args: &str) -> Option<&str> {
    let args = args.trim_start();
    let quote = args.chars().next().filter(|c| *c == '`' || *c == '"')?;

    let rest = &args[quote.len_utf8()..];
    let end = rest.find(quote)?;
    let host = &rest[..end];

    (!host.is_empty()).then_some(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(expr: &str, entry_points: &[&str]) -> RouteRule {
        RouteRule::new(expr, entry_points.iter().copied())
    }

    #[test]
    fn test_websecure_is_https() {
        assert_eq!(
            parse_host(&rule("Host(`h.example.com`)", &["websecure"])),
            Some("https://h.example.com".to_string())
        );
    }

    #[test]
    fn test_web_is_http() {
        assert_eq!(
            parse_host(&rule("Host(`h.example.com`)", &["web"])),
            Some("http://h.example.com".to_string())
        );
    }

    #[test]
    fn test_websecure_wins_over_web() {
        for eps in [&["web", "websecure"][..], &["websecure", "web"][..]] {
            assert_eq!(
                parse_host(&rule("Host(`h`)", eps)),
                Some("https://h".to_string())
            );
        }
    }

    #[test]
    fn test_no_public_entry_point() {
        assert_eq!(parse_host(&rule("Host(`h`)", &[])), None);
        assert_eq!(parse_host(&rule("Host(`h`)", &["metrics"])), None);
        assert_eq!(parse_host(&rule("Host(`h`)", &["traefik", "internal"])), None);
    }

    #[test]
    fn test_entry_point_names_are_exact() {
        assert_eq!(parse_host(&rule("Host(`h`)", &["WEB", "web-secure"])), None);
    }

    #[test]
    fn test_no_host_term() {
        assert_eq!(parse_host(&rule("PathPrefix(`/v1`)", &["websecure"])), None);
        assert_eq!(parse_host(&rule("", &["web"])), None);
    }

    #[test]
    fn test_host_combined_with_other_matchers() {
        assert_eq!(
            extract_host("PathPrefix(`/v1`) && Host(`api.example.com`) && Method(`GET`)"),
            Some("api.example.com")
        );
    }

    #[test]
    fn test_first_host_only() {
        assert_eq!(
            extract_host("Host(`a.example.com`) || Host(`b.example.com`)"),
            Some("a.example.com")
        );
        // Traefik v2 multi-argument form
        assert_eq!(
            extract_host("Host(`a.example.com`, `b.example.com`)"),
            Some("a.example.com")
        );
    }

    #[test]
    fn test_other_host_matchers_ignored() {
        assert_eq!(extract_host("HostRegexp(`{sub:[a-z]+}.example.com`)"), None);
        assert_eq!(extract_host("HostSNI(`db.example.com`)"), None);
        assert_eq!(extract_host("HostHeader(`legacy.example.com`)"), None);
        assert_eq!(extract_host("VirtualHost(`x`)"), None);
    }

    #[test]
    fn test_double_quotes_and_spacing() {
        assert_eq!(extract_host("Host(\"q.example.com\")"), Some("q.example.com"));
        assert_eq!(extract_host("Host( `s.example.com` )"), Some("s.example.com"));
    }

    #[test]
    fn test_malformed_terms() {
        assert_eq!(extract_host("Host(`unterminated"), None);
        assert_eq!(extract_host("Host(example.com)"), None);
        assert_eq!(extract_host("Host(``)"), None);
        // A broken first term does not hide a later well-formed one.
        assert_eq!(extract_host("Host() || Host(`ok.example.com`)"), Some("ok.example.com"));
    }

    #[test]
    fn test_hostname_passes_through_unvalidated() {
        assert_eq!(
            parse_host(&rule("Host(`not a host!`)", &["web"])),
            Some("http://not a host!".to_string())
        );
    }

    #[test]
    fn test_deterministic() {
        let r = rule("Host(`h`) && PathPrefix(`/`)", &["web", "websecure"]);
        assert_eq!(parse_host(&r), parse_host(&r));
    }
}
