use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::domain::{FeedDocument, NewsItem};
use crate::errors::FeederResult;

const INDENT_WIDTH: usize = 2;

pub struct FeedBuilder;

impl FeedBuilder {
    /// Render the document as an indented RSS 2.0 string
    pub fn render(document: &FeedDocument) -> FeederResult<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        writer.write_event(Event::Start(rss))?;
        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        let channel = &document.channel;
        write_text_element(&mut writer, "title", &channel.title)?;
        write_text_element(&mut writer, "link", &channel.link)?;
        write_text_element(&mut writer, "description", &channel.description)?;
        write_text_element(&mut writer, "language", &channel.language)?;
        write_text_element(&mut writer, "lastBuildDate", &document.last_build_date())?;

        for item in &document.items {
            write_item(&mut writer, item)?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        let mut xml = String::from_utf8(writer.into_inner())?;
        xml.push('\n');
        Ok(xml)
    }
}

fn write_item<W: Write>(writer: &mut Writer<W>, item: &NewsItem) -> FeederResult<()> {
    writer.write_event(Event::Start(BytesStart::new("item")))?;
    write_text_element(writer, "title", &item.title)?;
    write_text_element(writer, "link", &item.link)?;
    write_text_element(writer, "description", &item.summary)?;
    write_text_element(writer, "pubDate", &item.pub_date())?;
    write_text_element(writer, "guid", &item.link)?;
    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> FeederResult<()> {
    let text = sanitize_xml_text(text);
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(&text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Drop control characters that XML 1.0 does not allow (tab, LF and CR are kept)
fn sanitize_xml_text(text: &str) -> String {
    text.chars()
        .filter(|&c| matches!(c, '\t' | '\n' | '\r') || c >= '\u{20}')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChannelInfo, NewsItem, FETCH_FAILED};
    use chrono::{DateTime, TimeZone, Utc};

    fn built_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap()
    }

    fn item(n: usize) -> NewsItem {
        NewsItem::new(
            format!("Headline {}", n),
            format!("https://udn.com/news/story/{}", n),
            built_at(),
        )
        .with_summary(format!("Summary {}", n))
    }

    fn render(items: Vec<NewsItem>) -> String {
        let document = FeedDocument::new(ChannelInfo::udn(), items, built_at());
        FeedBuilder::render(&document).unwrap()
    }

    #[test]
    fn test_render_structure() {
        let xml = render(vec![item(1)]);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<rss version=\"2.0\">"));
        assert!(xml.contains("\n  <channel>\n"));
        assert!(xml.contains("\n    <title>聯合新聞網 - 即時新聞</title>\n"));
        assert!(xml.contains("<link>https://udn.com/news/breaknews/1/99</link>"));
        assert!(xml.contains("<description>聯合新聞網即時新聞 RSS 聚合</description>"));
        assert!(xml.contains("<language>zh-tw</language>"));
        assert!(xml.contains("<lastBuildDate>Mon, 19 Oct 2026 08:00:00 +0000</lastBuildDate>"));
        assert!(xml.contains("\n    <item>\n      <title>Headline 1</title>\n"));
        assert!(xml.contains("<description>Summary 1</description>"));
        assert!(xml.contains("<pubDate>Mon, 19 Oct 2026 08:00:00 +0000</pubDate>"));
        assert!(xml.contains("<guid>https://udn.com/news/story/1</guid>"));
        assert!(xml.ends_with("</channel>\n</rss>\n"));
    }

    #[test]
    fn test_channel_fields_precede_items() {
        let xml = render(vec![item(1), item(2)]);

        let last_build = xml.find("<lastBuildDate>").unwrap();
        let first_item = xml.find("<item>").unwrap();
        let second_item = xml.rfind("<item>").unwrap();
        assert!(last_build < first_item);
        assert!(first_item < second_item);
        assert!(xml.find("Headline 1").unwrap() < xml.find("Headline 2").unwrap());
    }

    #[test]
    fn test_item_count_matches_document() {
        let xml = render((1..=15).map(item).collect());
        assert_eq!(xml.matches("<item>").count(), 15);
        assert_eq!(xml.matches("</item>").count(), 15);
    }

    #[test]
    fn test_text_is_escaped() {
        let risky = NewsItem::new(
            "A & B <breaking>".to_string(),
            "https://udn.com/search?q=a&page=2".to_string(),
            built_at(),
        );
        let xml = render(vec![risky]);

        assert!(xml.contains("A &amp; B &lt;breaking&gt;"));
        assert!(xml.contains("q=a&amp;page=2"));
        assert!(!xml.contains("<breaking>"));
    }

    #[test]
    fn test_control_characters_dropped() {
        assert_eq!(sanitize_xml_text("a\u{0}b\u{1b}c"), "abc");
        assert_eq!(sanitize_xml_text("line\none\ttab"), "line\none\ttab");
    }

    #[test]
    fn test_placeholder_renders_single_item() {
        let xml = render(vec![FETCH_FAILED.to_item(built_at())]);

        assert_eq!(xml.matches("<item>").count(), 1);
        assert!(xml.contains("<title>新聞抓取暫時失敗</title>"));
        assert!(xml.contains("<description>RSS 生成器正在調整中，請稍後再試。</description>"));
    }

    #[test]
    fn test_round_trip_through_feed_parser() {
        let items: Vec<NewsItem> = (1..=3).map(item).collect();
        let xml = render(items);

        let parsed = feed_rs::parser::parse(xml.as_bytes()).unwrap();
        assert_eq!(parsed.feed_type, feed_rs::model::FeedType::RSS2);
        assert_eq!(parsed.title.unwrap().content, "聯合新聞網 - 即時新聞");
        assert_eq!(
            parsed.description.unwrap().content,
            "聯合新聞網即時新聞 RSS 聚合"
        );
        assert!(parsed
            .links
            .iter()
            .any(|l| l.href == "https://udn.com/news/breaknews/1/99"));
        assert_eq!(parsed.language.as_deref(), Some("zh-tw"));
        assert_eq!(parsed.entries.len(), 3);

        let first = &parsed.entries[0];
        assert_eq!(first.title.as_ref().unwrap().content, "Headline 1");
        assert!(first
            .links
            .iter()
            .any(|l| l.href == "https://udn.com/news/story/1"));
        assert!(first.published.is_some());
    }
}
