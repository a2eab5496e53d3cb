//! Item reader shared by the RSS flavors (Rumble, Odysee).
//!
//! Item children are matched on their local name, so `<author>` and
//! `<itunes:author>` land in the same field. Items routinely carry both, and
//! the first non-empty value wins.

use quick_xml::events::{BytesStart, Event};
use quick_xml::{DeError, Reader};

use crate::app::{Result, VidfeedError};
use crate::domain::Platform;

/// The fields of one `<item>` the normalizers consume.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct RssItem {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub guid: String,
    pub author: String,
    /// `image@href` (plain or `itunes:`)
    pub image: String,
    /// `thumbnail@url` (usually `media:`), at any depth inside the item
    pub thumbnail: String,
}

impl RssItem {
    fn set_text(&mut self, name: &[u8], value: &str) {
        let field = match name {
            b"title" => &mut self.title,
            b"link" => &mut self.link,
            b"pubDate" => &mut self.pub_date,
            b"guid" => &mut self.guid,
            b"author" => &mut self.author,
            _ => return,
        };
        set_first(field, value);
    }

    fn set_attributes(&mut self, element: &BytesStart<'_>) -> std::result::Result<(), quick_xml::Error> {
        match element.local_name().as_ref() {
            b"image" => {
                if let Some(href) = attribute(element, b"href")? {
                    set_first(&mut self.image, &href);
                }
            }
            b"thumbnail" => {
                if let Some(url) = attribute(element, b"url")? {
                    set_first(&mut self.thumbnail, &url);
                }
            }
            _ => {}
        }
        Ok(())
    }
}

fn set_first(field: &mut String, value: &str) {
    let value = value.trim();
    if field.is_empty() && !value.is_empty() {
        *field = value.to_string();
    }
}

fn attribute(
    element: &BytesStart<'_>,
    key: &[u8],
) -> std::result::Result<Option<String>, quick_xml::Error> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Every `<item>` directly under `<channel>`, in document order.
///
/// A body without a `<channel>` element, or with broken markup, is a
/// [`VidfeedError::Parse`].
pub(super) fn parse_items(body: &[u8], platform: Platform) -> Result<Vec<RssItem>> {
    read_items(body)
        .map_err(|source| VidfeedError::Parse { platform, source })?
        .ok_or_else(|| VidfeedError::Parse {
            platform,
            source: DeError::Custom("missing field `channel`".to_string()),
        })
}

fn read_items(body: &[u8]) -> std::result::Result<Option<Vec<RssItem>>, DeError> {
    let mut reader = Reader::from_reader(body);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    // Local names of the currently open elements
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut saw_channel = false;
    let mut items = Vec::new();
    // The item being read and the depth of its children
    let mut current: Option<(RssItem, usize)> = None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf).map_err(DeError::from)? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                match current.as_mut() {
                    Some((item, _)) => item.set_attributes(&e).map_err(DeError::from)?,
                    None if name == b"item"
                        && open.last().map(Vec::as_slice) == Some(b"channel".as_slice()) =>
                    {
                        current = Some((RssItem::default(), open.len() + 2));
                    }
                    None => {}
                }
                if name == b"channel" {
                    saw_channel = true;
                }
                open.push(name);
                text.clear();
            }
            Event::Empty(e) => {
                if let Some((item, _)) = current.as_mut() {
                    item.set_attributes(&e).map_err(DeError::from)?;
                }
                if e.local_name().as_ref() == b"channel" {
                    saw_channel = true;
                }
            }
            Event::Text(e) => {
                if matches!(current, Some((_, depth)) if open.len() == depth) {
                    match e.unescape() {
                        Ok(value) => text.push_str(&value),
                        // Unknown entities keep their raw form
                        Err(_) => text.push_str(&String::from_utf8_lossy(&e)),
                    }
                }
            }
            Event::CData(e) => {
                if matches!(current, Some((_, depth)) if open.len() == depth) {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                let depth = open.len();
                let name = open.pop().unwrap_or_default();
                let child_depth = current.as_ref().map(|(_, d)| *d);
                if child_depth == Some(depth) {
                    if let Some((item, _)) = current.as_mut() {
                        item.set_text(&name, &text);
                    }
                    text.clear();
                } else if child_depth == Some(depth + 1) {
                    items.extend(current.take().map(|(item, _)| item));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(saw_channel.then_some(items))
}
