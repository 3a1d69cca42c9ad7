//! Classification of text typed or committed in the search bar.
//!
//! The controller needs to know whether committed text is a direct navigation
//! (an entered-URL metric, no search count) or a query for the selected
//! engine. Three shapes count as addresses:
//!
//! - `scheme://...` that parses as an absolute URL with a host
//! - `scheme:opaque` such as `about:config`
//! - a host, optionally with `:port` and a `/`, `?` or `#` tail. A host is
//!   either a single label followed by a port, or dotted labels whose last
//!   label is alphabetic and at least two characters long.
//!
//! Labels are runs of ASCII word characters and dashes that start and end with
//! a word character.
//!
//! | input              | url? |
//! |--------------------|------|
//! | `mozilla.org`      | yes  |
//! | `https://a.b/c?d`  | yes  |
//! | `localhost:8080`   | yes  |
//! | `about:config`     | yes  |
//! | `rust`             | no   |
//! | `rust lifetimes`   | no   |
//! | `3.14`             | no   |
//! | `e.g.`             | no   |

use url::Url;

const fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `true` when `text` is exactly one label.
fn is_label(text: &str) -> bool {
    let starts_with_word = text.chars().next().is_some_and(is_word);
    let ends_with_word = text.chars().next_back().is_some_and(is_word);
    starts_with_word && ends_with_word && text.chars().all(|c| is_word(c) || c == '-')
}

fn is_scheme(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn is_host(host: &str, has_port: bool) -> bool {
    let labels: Vec<&str> = host.split('.').collect();
    if !labels.iter().all(|label| is_label(label)) {
        return false;
    }

    match labels.as_slice() {
        [_] => has_port,
        [.., tld] => tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()),
        [] => false,
    }
}

/// Returns `true` when `text` should be loaded as an address rather than
/// searched for.
#[must_use]
pub fn is_url(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return false;
    }

    if let Some((scheme, _)) = trimmed.split_once("://") {
        return is_scheme(scheme) && Url::parse(trimmed).is_ok_and(|url| url.has_host());
    }

    let authority_end = trimmed
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(trimmed.len());
    let (authority, tail) = trimmed.split_at(authority_end);

    match authority.split_once(':') {
        None => is_host(authority, false),
        Some((host, port)) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => {
            is_host(host, true)
        }
        Some((scheme, opaque)) => {
            tail.is_empty() && is_scheme(scheme) && is_label(opaque) && Url::parse(trimmed).is_ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::is_url;

    #[test]
    fn recognises_addresses() {
        for text in [
            "mozilla.org",
            "www.mozilla.org/en-US/firefox",
            "https://example.com/path?q=1",
            "http://localhost",
            "localhost:8080",
            "about:config",
            "  padded.example  ",
            "my-site.co.uk",
            "example.com:8443/admin",
            "docs.rs#search",
        ] {
            assert!(is_url(text), "{text:?} should be a url");
        }
    }

    #[test]
    fn treats_everything_else_as_search_terms() {
        for text in [
            "",
            "   ",
            "test",
            "rust lifetimes",
            "what is mozilla.org",
            "trailing.",
            ".leading",
            "dash-.org",
            "a.b-",
            "3.14",
            "1.5",
            "e.g.",
            "v1.2",
            "mozilla.org:",
            "ftp://",
        ] {
            assert!(!is_url(text), "{text:?} should not be a url");
        }
    }
}
