//! rss.xml built by reading rendered post pages back
//!
//! The feed does not see front matter. Each post page is expected to carry
//! its title in `<title>`, its date as the first `<p>`, and its content in
//! the element with id `text-post`.

use chrono::{DateTime, Utc};

use crate::helpers::date::rss_pub_date;
use crate::helpers::html;
use crate::helpers::html::escape_xml;

/// Id of the element holding a post's content
pub const CONTENT_ID: &str = "text-post";

/// One `<item>` of the feed
#[derive(Debug, Clone, PartialEq)]
pub struct RssItem {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub description: String,
}

impl RssItem {
    /// Scrape a rendered post page
    ///
    /// `fallback_title` is used when the page has no `<title>`; a missing
    /// date or content element gives the build time and an empty body.
    pub fn scrape(page: &str, link: String, fallback_title: &str, now: &DateTime<Utc>) -> Self {
        let title = html::title(page).unwrap_or_else(|| fallback_title.to_string());
        let date_text = html::first_paragraph_text(page).unwrap_or_default();
        let description = html::element_by_id(page, CONTENT_ID)
            .unwrap_or_default()
            .to_string();

        Self {
            title,
            link,
            pub_date: rss_pub_date(&date_text, now),
            description,
        }
    }

    fn to_xml(&self) -> String {
        format!(
            "<item><title>{title}</title><link>{link}</link><guid>{link}</guid>\
             <pubDate>{date}</pubDate><description><![CDATA[{desc}]]></description></item>",
            title = self.title,
            link = self.link,
            date = self.pub_date,
            desc = cdata_safe(&self.description),
        )
    }
}

/// Channel metadata
#[derive(Debug, Clone)]
pub struct Channel<'a> {
    pub title: &'a str,
    pub link: &'a str,
    pub description: &'a str,
}

/// Render an RSS 2.0 document
pub fn render_rss(channel: &Channel<'_>, items: &[RssItem]) -> String {
    let items: Vec<String> = items.iter().map(RssItem::to_xml).collect();

    let mut rss = String::new();
    rss.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    rss.push_str("<rss version=\"2.0\">\n");
    rss.push_str("<channel>\n");
    rss.push_str(&format!(
        "<title>{}</title>\n<link>{}</link>\n<description>{}</description>\n",
        escape_xml(channel.title),
        channel.link,
        escape_xml(channel.description)
    ));
    rss.push_str(&items.join("\n"));
    rss.push_str("\n</channel>\n</rss>");
    rss
}

/// A literal `]]>` would end the CDATA section early
fn cdata_safe(s: &str) -> String {
    s.replace("]]>", "]]]]><![CDATA[>")
}
