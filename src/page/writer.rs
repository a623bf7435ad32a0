//! HTML writer on top of `quick_xml::Writer`.
//!
//! Text is escaped with `partial_escape` (only `<`, `>`, `&`), attribute
//! values with full escaping. Revealable elements are numbered here, in
//! document order, so the ids in the markup and the ids handed to the
//! runtime always agree.

use crate::runtime::ElementId;
use anyhow::Result;
use quick_xml::{
    Writer,
    escape::partial_escape,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Cursor;

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Class marking an element for the scroll-reveal runtime.
pub const REVEAL_CLASS: &str = "reveal";

pub struct HtmlWriter {
    writer: XmlWriter,
    reveal_ids: Vec<ElementId>,
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2),
            reveal_ids: Vec::new(),
        }
    }

    /// `<!DOCTYPE html>`
    pub fn doctype(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::DocType(BytesText::from_escaped("html")))?;
        Ok(())
    }

    /// `<tag attrs>` … body … `</tag>`
    pub fn elem<F>(&mut self, tag: &str, attrs: &[(&str, &str)], body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.writer.write_event(Event::Start(start_tag(tag, attrs)))?;
        body(self)?;
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    /// `<tag attrs>text</tag>`
    pub fn text_elem(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        self.elem(tag, attrs, |w| w.text(text))
    }

    /// Void element such as `<img>` or `<meta>`.
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
        self.writer.write_event(Event::Empty(start_tag(tag, attrs)))?;
        Ok(())
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
        Ok(())
    }

    /// Trusted markup written verbatim (inline SVG, scripts).
    ///
    /// Goes through a text event so the indenter treats it as inline content.
    pub fn raw(&mut self, html: &str) -> Result<()> {
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(html)))?;
        Ok(())
    }

    /// A revealable element: gets `class="reveal {class}"` and a fresh
    /// `data-reveal` id.
    pub fn reveal<F>(&mut self, tag: &str, class: &str, attrs: &[(&str, &str)], body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let id = ElementId(self.reveal_ids.len() as u32);
        self.reveal_ids.push(id);

        let class = if class.is_empty() {
            REVEAL_CLASS.to_owned()
        } else {
            format!("{REVEAL_CLASS} {class}")
        };
        let id = id.to_string();
        let mut all = vec![("class", class.as_str()), ("data-reveal", id.as_str())];
        all.extend_from_slice(attrs);
        self.elem(tag, &all, body)
    }

    pub fn reveal_ids(&self) -> &[ElementId] {
        &self.reveal_ids
    }

    pub fn finish(self) -> (Vec<u8>, Vec<ElementId>) {
        (self.writer.into_inner().into_inner(), self.reveal_ids)
    }
}

fn start_tag<'a>(tag: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    elem
}
