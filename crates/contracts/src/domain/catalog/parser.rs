//! Catalog document decoder
//!
//! Expected shape:
//!
//! ```xml
//! <catalog>
//!   <category name="Kicks">
//!     <item>
//!       <name>Mae Geri</name>
//!       <level>5th Kyu</level>
//!       <description>Front kick</description>
//!       <video_link>https://...</video_link>   <!-- optional -->
//!     </item>
//!   </category>
//! </catalog>
//! ```
//!
//! The root element name is not checked. Field values are copied verbatim
//! (no trimming), entities are unescaped and CDATA sections are included.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::aggregate::{Catalog, Item};
use super::error::CatalogError;

const TAG_CATEGORY: &[u8] = b"category";
const TAG_ITEM: &[u8] = b"item";
const ATTR_CATEGORY_NAME: &str = "name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Level,
    Description,
    VideoLink,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"name" => Some(Field::Name),
            b"level" => Some(Field::Level),
            b"description" => Some(Field::Description),
            b"video_link" => Some(Field::VideoLink),
            _ => None,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Level => "level",
            Field::Description => "description",
            Field::VideoLink => "video_link",
        }
    }
}

/// Item fields collected so far; `depth` is the element depth of `<item>`
struct ItemDraft {
    depth: usize,
    name: Option<String>,
    level: Option<String>,
    description: Option<String>,
    video_link: Option<String>,
}

impl ItemDraft {
    fn new(depth: usize) -> Self {
        Self {
            depth,
            name: None,
            level: None,
            description: None,
            video_link: None,
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Name => &mut self.name,
            Field::Level => &mut self.level,
            Field::Description => &mut self.description,
            Field::VideoLink => &mut self.video_link,
        }
    }

    /// First occurrence wins
    fn fill(&mut self, field: Field, value: String) {
        let slot = self.slot(field);
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    fn finish(self, category: &str, index: usize) -> Result<Item, CatalogError> {
        let missing = |field: Field| CatalogError::MissingField {
            category: category.to_string(),
            index,
            field: field.tag(),
        };
        Ok(Item {
            name: self.name.ok_or_else(|| missing(Field::Name))?,
            level: self.level.ok_or_else(|| missing(Field::Level))?,
            description: self.description.ok_or_else(|| missing(Field::Description))?,
            video_link: self.video_link.unwrap_or_default(),
        })
    }
}

struct OpenCategory {
    depth: usize,
    name: String,
    items: Vec<Item>,
}

impl OpenCategory {
    fn push(&mut self, draft: ItemDraft) -> Result<(), CatalogError> {
        let item = draft.finish(&self.name, self.items.len())?;
        self.items.push(item);
        Ok(())
    }
}

/// Text of the field currently being read
struct Capture {
    depth: usize,
    field: Field,
    text: String,
}

fn xml_error(e: impl std::fmt::Display) -> CatalogError {
    CatalogError::Xml(e.to_string())
}

fn category_name(
    e: &BytesStart<'_>,
    reader: &Reader<&[u8]>,
    index: usize,
) -> Result<String, CatalogError> {
    let attr = e
        .try_get_attribute(ATTR_CATEGORY_NAME)
        .map_err(xml_error)?
        .ok_or(CatalogError::MissingCategoryName { index })?;
    let value = attr
        .decode_and_unescape_value(reader.decoder())
        .map_err(xml_error)?;
    Ok(value.into_owned())
}

/// Decodes a catalog document.
///
/// # Errors
///
/// - [`CatalogError::Xml`] for malformed XML, an empty document, or input that
///   ends inside an open category
/// - [`CatalogError::MissingCategoryName`] for a `<category>` without `name`
/// - [`CatalogError::MissingField`] for an item without `name`, `level` or
///   `description`; the whole load is rejected
pub fn parse_catalog(xml: &str) -> Result<Catalog, CatalogError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut catalog = Catalog::new();
    let mut depth: usize = 0;
    let mut saw_root = false;
    let mut category_index: usize = 0;

    let mut category: Option<OpenCategory> = None;
    let mut item: Option<ItemDraft> = None;
    let mut capture: Option<Capture> = None;

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| {
            CatalogError::Xml(format!("at position {}: {}", reader.buffer_position(), e))
        })?;

        match event {
            Event::Start(e) => {
                depth += 1;
                saw_root = true;
                let tag = e.name();

                if capture.is_some() {
                    // markup nested inside a field only contributes its text
                } else if let Some(draft) = item.as_mut() {
                    if let Some(field) = Field::from_tag(tag.as_ref()) {
                        if draft.slot(field).is_none() {
                            capture = Some(Capture {
                                depth,
                                field,
                                text: String::new(),
                            });
                        }
                    }
                } else if category.is_some() {
                    if tag.as_ref() == TAG_ITEM {
                        item = Some(ItemDraft::new(depth));
                    }
                } else if tag.as_ref() == TAG_CATEGORY {
                    let name = category_name(&e, &reader, category_index)?;
                    category_index += 1;
                    category = Some(OpenCategory {
                        depth,
                        name,
                        items: Vec::new(),
                    });
                }
            }
            Event::Empty(e) => {
                saw_root = true;
                let tag = e.name();

                if capture.is_some() {
                    // contributes no text
                } else if let Some(draft) = item.as_mut() {
                    if let Some(field) = Field::from_tag(tag.as_ref()) {
                        draft.fill(field, String::new());
                    }
                } else if let Some(open) = category.as_mut() {
                    if tag.as_ref() == TAG_ITEM {
                        open.push(ItemDraft::new(depth + 1))?;
                    }
                } else if tag.as_ref() == TAG_CATEGORY {
                    let name = category_name(&e, &reader, category_index)?;
                    category_index += 1;
                    catalog.insert(name, Vec::new());
                }
            }
            Event::End(_) => {
                let closing = depth;
                depth = depth.saturating_sub(1);

                if capture.as_ref().is_some_and(|c| c.depth == closing) {
                    if let (Some(done), Some(draft)) = (capture.take(), item.as_mut()) {
                        draft.fill(done.field, done.text);
                    }
                } else if capture.is_none() && item.as_ref().is_some_and(|d| d.depth == closing) {
                    if let (Some(draft), Some(open)) = (item.take(), category.as_mut()) {
                        open.push(draft)?;
                    }
                } else if item.is_none() && category.as_ref().is_some_and(|c| c.depth == closing) {
                    if let Some(open) = category.take() {
                        catalog.insert(open.name, open.items);
                    }
                }
            }
            Event::Text(e) => {
                if let Some(cap) = capture.as_mut() {
                    cap.text.push_str(&e.unescape().map_err(xml_error)?);
                }
            }
            Event::CData(e) => {
                if let Some(cap) = capture.as_mut() {
                    let bytes = e.into_inner();
                    cap.text
                        .push_str(&reader.decoder().decode(&bytes).map_err(xml_error)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(CatalogError::Xml("document has no root element".to_string()));
    }
    if let Some(open) = category {
        return Err(CatalogError::Xml(format!(
            "unexpected end of document inside category '{}'",
            open.name
        )));
    }

    Ok(catalog)
}
