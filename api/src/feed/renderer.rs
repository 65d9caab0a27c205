//! Feed renderer
//!
//! Renders feeds to Atom 1.0 XML.

use atom_syndication::{Content, Entry, Feed as AtomFeed, Link, Person};

use crate::app::{Feed, FeedEntry};
use crate::error::AppError;

/// Content type for rendered feeds
pub const ATOM_CONTENT_TYPE: &str = "application/atom+xml; charset=utf-8";

/// Render a feed to an Atom document.
///
/// The whole document is built in memory, so a failure never leaves a
/// partial body behind.
pub fn render_atom(feed: &Feed) -> Result<String, AppError> {
    let atom = to_atom(feed);

    let bytes = atom
        .write_to(Vec::new())
        .map_err(|e| AppError::Serialization(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| AppError::Serialization(e.to_string()))
}

fn to_atom(feed: &Feed) -> AtomFeed {
    let mut self_link = Link::default();
    self_link.set_href(feed.self_link.clone());
    self_link.set_rel("self");

    let mut alternate_link = Link::default();
    alternate_link.set_href(feed.alternate_link.clone());
    alternate_link.set_rel("alternate");

    let mut author = Person::default();
    author.set_name(feed.author.name.clone());
    author.set_email(feed.author.email.clone());

    let mut atom = AtomFeed::default();
    atom.set_title(feed.title.clone());
    atom.set_id(feed.id.clone());
    atom.set_updated(feed.updated);
    atom.set_links(vec![self_link, alternate_link]);
    atom.set_authors(vec![author]);
    atom.set_entries(feed.entries.iter().map(render_entry).collect::<Vec<_>>());
    atom
}

fn render_entry(entry: &FeedEntry) -> Entry {
    let mut link = Link::default();
    link.set_href(entry.link.clone());

    let mut content = Content::default();
    content.set_content_type(Some("html".to_string()));
    content.set_value(Some(entry.content.clone()));

    let mut atom_entry = Entry::default();
    atom_entry.set_title(entry.title.clone());
    atom_entry.set_id(entry.id.clone());
    atom_entry.set_updated(entry.updated);
    atom_entry.set_links(vec![link]);
    atom_entry.set_content(Some(content));
    atom_entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_feed, EntryContent, FeedSettings};
    use crate::test_utils::{test_gist, test_settings};
    use chrono::{DateTime, FixedOffset};

    fn generated_at() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z").unwrap()
    }

    fn sample_feed(settings: &FeedSettings) -> Feed {
        let gists = vec![
            test_gist("abc", "demo snippet"),
            test_gist("skip", ""),
            test_gist("def", "second <b>one</b>"),
        ];
        build_feed(settings, "alice", &gists, generated_at()).unwrap()
    }

    #[test]
    fn declares_atom_namespace() {
        let xml = render_atom(&sample_feed(&test_settings())).unwrap();

        assert!(xml.contains(r#"xmlns="http://www.w3.org/2005/Atom""#));
        assert!(xml.contains("<feed"));
    }

    #[test]
    fn renders_feed_level_fields() {
        let xml = render_atom(&sample_feed(&test_settings())).unwrap();
        let atom: AtomFeed = xml.parse().unwrap();

        assert_eq!(atom.title().to_string(), "alice gists");
        assert_eq!(atom.id(), "https://feeds.example.com/alice");
        assert_eq!(atom.updated(), &generated_at());
        assert_eq!(atom.authors()[0].name(), "alice");

        let links: Vec<(&str, &str)> = atom.links().iter().map(|l| (l.rel(), l.href())).collect();
        assert_eq!(
            links,
            vec![
                ("self", "https://feeds.example.com/alice"),
                ("alternate", "https://gist.github.com/alice"),
            ]
        );
    }

    #[test]
    fn renders_entries_in_order_with_html_content() {
        let xml = render_atom(&sample_feed(&test_settings())).unwrap();
        let atom: AtomFeed = xml.parse().unwrap();

        let entries = atom.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title().to_string(), "demo snippet");
        assert_eq!(entries[0].id(), "https://gist.github.com/alice/abc");
        assert_eq!(entries[0].links()[0].href(), "https://gist.github.com/alice/abc");
        assert_eq!(entries[0].updated().to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(
            entries[0].content().and_then(|c| c.content_type()),
            Some("html")
        );
        assert_eq!(entries[1].title().to_string(), "second <b>one</b>");
    }

    #[test]
    fn escapes_embedded_markup() {
        let settings = FeedSettings {
            content: EntryContent::Embed,
            ..test_settings()
        };

        let xml = render_atom(&sample_feed(&settings)).unwrap();

        assert!(xml.contains("&lt;script"));
        assert!(!xml.contains("<script"));
        let atom: AtomFeed = xml.parse().unwrap();
        assert_eq!(
            atom.entries()[0].content().and_then(|c| c.value()),
            Some(r#"<script src="https://gist.github.com/alice/abc.js"></script>"#)
        );
    }

    #[test]
    fn author_email_is_written_when_configured() {
        let settings = FeedSettings {
            author_email: Some("alice@example.com".to_string()),
            ..test_settings()
        };

        let xml = render_atom(&sample_feed(&settings)).unwrap();

        assert!(xml.contains("<email>alice@example.com</email>"));
    }

    #[test]
    fn identical_feeds_render_identically() {
        let feed = sample_feed(&test_settings());

        assert_eq!(render_atom(&feed).unwrap(), render_atom(&feed.clone()).unwrap());
    }

    #[test]
    fn only_updated_differs_between_generations() {
        let gists = vec![test_gist("abc", "demo snippet")];
        let earlier = build_feed(&test_settings(), "alice", &gists, generated_at()).unwrap();
        let later = build_feed(
            &test_settings(),
            "alice",
            &gists,
            DateTime::parse_from_rfc3339("2024-06-02T08:30:00Z").unwrap(),
        )
        .unwrap();

        let earlier_xml = render_atom(&earlier).unwrap();
        let later_xml = render_atom(&later).unwrap();

        assert_ne!(earlier_xml, later_xml);
        assert_eq!(
            earlier_xml.replace("2024-06-01T12:00:00+00:00", "GENERATED"),
            later_xml.replace("2024-06-02T08:30:00+00:00", "GENERATED")
        );
    }
}
