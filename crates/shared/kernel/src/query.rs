//! Codec between a [`Selection`] and the location's query string.
//!
//! The hub owns exactly two parameters, `site` and `group`, and never writes both.

use phub_domain::selection::Selection;
use url::form_urlencoded;

pub const SITE_PARAM: &str = "site";
pub const GROUP_PARAM: &str = "group";

/// Reads the requested selection from a query string (with or without the leading `?`).
///
/// The identifier is not checked against the catalog here. `site` wins over `group`
/// when a hand-written URL carries both; empty values count as absent.
#[must_use]
pub fn parse(search: &str) -> Selection {
    let search = search.strip_prefix('?').unwrap_or(search);

    let mut site = None;
    let mut group = None;
    for (key, value) in form_urlencoded::parse(search.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            SITE_PARAM if site.is_none() => site = Some(value.into_owned()),
            GROUP_PARAM if group.is_none() => group = Some(value.into_owned()),
            _ => {},
        }
    }

    match (site, group) {
        (Some(id), _) => Selection::Site(id),
        (None, Some(id)) => Selection::Group(id),
        (None, None) => Selection::Home,
    }
}

/// Renders the query string for a selection, including the leading `?`.
///
/// Home renders as an empty string so the location bar shows the bare page URL.
#[must_use]
pub fn render(selection: &Selection) -> String {
    let (key, id) = match selection {
        Selection::Home => return String::new(),
        Selection::Site(id) => (SITE_PARAM, id),
        Selection::Group(id) => (GROUP_PARAM, id),
    };

    let encoded = form_urlencoded::Serializer::new(String::new()).append_pair(key, id).finish();
    format!("?{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_site_and_group() {
        assert_eq!(parse("?site=blog"), Selection::Site("blog".into()));
        assert_eq!(parse("group=tools"), Selection::Group("tools".into()));
        assert_eq!(parse(""), Selection::Home);
        assert_eq!(parse("?"), Selection::Home);
    }

    #[test]
    fn site_takes_precedence_and_empty_values_are_ignored() {
        assert_eq!(parse("?group=g&site=s"), Selection::Site("s".into()));
        assert_eq!(parse("?site=&group=g"), Selection::Group("g".into()));
        assert_eq!(parse("?site=a&site=b"), Selection::Site("a".into()));
        assert_eq!(parse("?utm_source=mail"), Selection::Home);
    }

    #[test]
    fn render_encodes_reserved_characters() {
        assert_eq!(render(&Selection::Home), "");
        assert_eq!(render(&Selection::Site("blog".into())), "?site=blog");
        assert_eq!(render(&Selection::Group("a b&c".into())), "?group=a+b%26c");
        assert_eq!(parse(&render(&Selection::Group("a b&c".into()))), Selection::Group("a b&c".into()));
    }
}
