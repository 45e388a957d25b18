//! RFC 5988 `Link` header parsing
//!
//! The API signals pagination through a standard link-relation header:
//! `Link: <https://host/...?start=x>; rel="next", <...>; rel="prev"`.
//! Only the `next` relation is consumed; its absence marks the final page.

use reqwest::header::HeaderMap;

/// Extract the next-page URL from a response's `Link` header, if present
pub fn next_link(headers: &HeaderMap) -> Option<String> {
    let header = headers.get("link")?.to_str().ok()?;
    parse_link_header(header, "next")
}

/// Parse a `Link` header and return the URL for the given relation
///
/// Entries are scanned by their `<...>` delimiters rather than split on
/// every comma, so a page URL containing a literal comma stays intact.
fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    let mut rest = header;

    while let Some(start) = rest.find('<') {
        let entry = &rest[start + 1..];
        let end = entry.find('>')?;
        let url = &entry[..end];

        // Relation parameters run until the next entry's opening bracket.
        let tail = &entry[end + 1..];
        let (params, next) = match tail.find('<') {
            Some(i) => tail.split_at(i),
            None => (tail, ""),
        };

        let matches_rel = params.split(';').any(|segment| {
            segment
                .trim()
                .trim_end_matches(',')
                .trim_end()
                .strip_prefix("rel=")
                .map(|rel| rel.trim_matches('"') == target_rel)
                .unwrap_or(false)
        });

        if matches_rel {
            return Some(url.to_string());
        }
        rest = next;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_relation() {
        let header = "<http://host/rest/v2/hosts?start=10>; rel=\"next\"";
        assert_eq!(
            parse_link_header(header, "next"),
            Some("http://host/rest/v2/hosts?start=10".to_string())
        );
    }

    #[test]
    fn test_parse_multiple_relations() {
        let header = "<http://host/a>; rel=\"prev\", <http://host/b>; rel=\"next\"";
        assert_eq!(
            parse_link_header(header, "next"),
            Some("http://host/b".to_string())
        );
        assert_eq!(
            parse_link_header(header, "prev"),
            Some("http://host/a".to_string())
        );
    }

    #[test]
    fn test_parse_unquoted_rel() {
        let header = "<http://host/b>; rel=next";
        assert_eq!(
            parse_link_header(header, "next"),
            Some("http://host/b".to_string())
        );
    }

    #[test]
    fn test_url_containing_comma_stays_intact() {
        let header = "<http://host/rest/v2/tasks?ids=t1,t2,t3>; rel=\"next\"";
        assert_eq!(
            parse_link_header(header, "next"),
            Some("http://host/rest/v2/tasks?ids=t1,t2,t3".to_string())
        );
    }

    #[test]
    fn test_multiple_relations_with_comma_urls() {
        let header =
            "<http://host/a?ids=1,2>; rel=\"prev\", <http://host/b?ids=3,4>; rel=\"next\"";
        assert_eq!(
            parse_link_header(header, "next"),
            Some("http://host/b?ids=3,4".to_string())
        );
        assert_eq!(
            parse_link_header(header, "prev"),
            Some("http://host/a?ids=1,2".to_string())
        );
    }

    #[test]
    fn test_missing_relation() {
        let header = "<http://host/a>; rel=\"prev\"";
        assert_eq!(parse_link_header(header, "next"), None);
    }

    #[test]
    fn test_malformed_header() {
        assert_eq!(parse_link_header("garbage", "next"), None);
        assert_eq!(parse_link_header("", "next"), None);
    }
}
