//! RSS headline extraction.
//!
//! Well-formed RSS 2.0 goes through the `rss` crate. Payloads it rejects fall
//! back to a tolerant `<item>` scanner that accepts plain, entity-escaped or
//! CDATA-wrapped titles.

use crate::domain::news::{MAX_HEADLINES, RawHeadline, sanitize_title};
use crate::infrastructure::news::SourceError;
use chrono::{DateTime, Utc};
use rss::Channel;
use std::collections::HashSet;
use std::io::Cursor;
use tracing::debug;
use url::Url;

#[derive(Debug, Default)]
struct FeedItem {
    title: Option<String>,
    link: Option<String>,
    pub_date: Option<String>,
}

impl From<&rss::Item> for FeedItem {
    fn from(item: &rss::Item) -> Self {
        Self {
            title: item.title().map(str::to_string),
            link: item.link().map(str::to_string),
            pub_date: item.pub_date().map(str::to_string),
        }
    }
}

/// Extracts up to [`MAX_HEADLINES`] headlines in feed order.
///
/// Items without a title or an absolute link are skipped, as are repeated
/// titles. Unparseable publish dates fall back to `now`.
pub fn parse_feed(body: &str, now: DateTime<Utc>) -> Result<Vec<RawHeadline>, SourceError> {
    let items: Vec<FeedItem> = match Channel::read_from(Cursor::new(body.as_bytes())) {
        Ok(channel) => channel.items().iter().map(FeedItem::from).collect(),
        Err(e) => {
            debug!("feed_parser: strict RSS parse failed ({}), scanning items", e);
            if !body.contains("<item") {
                return Err(SourceError::Parse(e.to_string()));
            }
            scan_items(body)
        }
    };

    Ok(collect_headlines(items, now))
}

fn collect_headlines(items: Vec<FeedItem>, now: DateTime<Utc>) -> Vec<RawHeadline> {
    let mut seen_titles = HashSet::new();
    let mut headlines = Vec::new();

    for item in items {
        if headlines.len() >= MAX_HEADLINES {
            break;
        }

        let (Some(title), Some(link)) = (item.title, item.link) else {
            continue;
        };

        let Some(url) = absolute_url(&link) else {
            debug!("feed_parser: dropping item with non-absolute link '{}'", link);
            continue;
        };

        let title = sanitize_title(&title);
        if title.is_empty() || !seen_titles.insert(title.clone()) {
            continue;
        }

        let published_at = item
            .pub_date
            .as_deref()
            .and_then(parse_pub_date)
            .unwrap_or(now);

        headlines.push(RawHeadline {
            title,
            url,
            published_at,
        });
    }

    headlines
}

/// The link as published, if it parses as an absolute http(s) URL.
fn absolute_url(link: &str) -> Option<String> {
    let link = link.trim();
    let url = Url::parse(link).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| link.to_string())
}

/// RSS dates are RFC-2822 usually; some feeds emit RFC-3339.
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

fn scan_items(xml: &str) -> Vec<FeedItem> {
    xml.split("<item")
        .skip(1)
        .filter_map(|block| {
            // Skip tags that merely start with "item", e.g. <itemCount>
            let rest = match block.chars().next()? {
                '>' => &block[1..],
                c if c.is_whitespace() => &block[block.find('>')? + 1..],
                _ => return None,
            };
            let body = rest.split("</item>").next().unwrap_or(rest);

            Some(FeedItem {
                title: extract_tag(body, "title"),
                link: extract_tag(body, "link"),
                pub_date: extract_tag(body, "pubDate"),
            })
        })
        .collect()
}

fn extract_tag(text: &str, tag: &str) -> Option<String> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = text.find(&open)? + open.len();
    let end = start + text[start..].find(&close)?;
    let raw = text[start..end].trim();

    let value = match raw
        .strip_prefix("<![CDATA[")
        .and_then(|r| r.strip_suffix("]]>"))
    {
        Some(cdata) => cdata.to_string(),
        None => decode_entities(raw),
    };
    Some(value)
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
