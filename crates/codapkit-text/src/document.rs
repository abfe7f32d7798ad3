//! Note documents and their stored forms.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{TextError, TextResult};

/// Inline formatting applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Bold,
    Italic,
    Underlined,
    Deleted,
    Code,
    Superscript,
    Subscript,
}

/// Text with uniform formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub marks: BTreeSet<Mark>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: BTreeSet::new(),
        }
    }

    pub fn marked(text: impl Into<String>, marks: impl IntoIterator<Item = Mark>) -> Self {
        Self {
            text: text.into(),
            marks: marks.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    #[default]
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    BlockQuote,
    OrderedListItem,
    BulletedListItem,
}

/// One line-level element of a note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub kind: BlockKind,
    #[serde(default)]
    pub runs: Vec<TextRun>,
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            runs: vec![TextRun::plain(text)],
        }
    }

    pub fn new(kind: BlockKind, runs: Vec<TextRun>) -> Self {
        Self { kind, runs }
    }

    /// The block's text without formatting.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// The editor's value: a sequence of blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteDocument {
    pub blocks: Vec<Block>,
}

impl NoteDocument {
    /// A document holding a single empty paragraph.
    pub fn empty() -> Self {
        text_to_document("")
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|block| block.text().is_empty())
    }

    pub fn to_json(&self) -> TextResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parse serialized content.
    pub fn from_json(value: &serde_json::Value) -> TextResult<Self> {
        let doc: NoteDocument = serde_json::from_value(value.clone())
            .map_err(|e| TextError::Malformed(e.to_string()))?;
        if doc.blocks.is_empty() {
            return Err(TextError::Malformed("document has no blocks".to_string()));
        }
        Ok(doc)
    }
}

impl Default for NoteDocument {
    fn default() -> Self {
        Self::empty()
    }
}

/// A note's stored content.
///
/// Older documents store notes as plain text; newer ones store the
/// serialized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteContent {
    Text(String),
    Serialized(serde_json::Value),
}

impl NoteContent {
    pub fn from_document(doc: &NoteDocument) -> TextResult<Self> {
        Ok(Self::Serialized(doc.to_json()?))
    }
}

/// One paragraph per line.
pub fn text_to_document(text: &str) -> NoteDocument {
    NoteDocument {
        blocks: text.split('\n').map(Block::paragraph).collect(),
    }
}

/// Block texts joined by newlines, formatting dropped.
pub fn document_to_text(doc: &NoteDocument) -> String {
    doc.blocks
        .iter()
        .map(Block::text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The value to hand the editor.
///
/// The editor's own latest value wins. Otherwise stored content is adapted:
/// plain text is converted, absent content starts an empty document and
/// serialized content is parsed.
pub fn value_for_editor(
    editor_value: Option<&NoteDocument>,
    stored: Option<&NoteContent>,
) -> TextResult<NoteDocument> {
    if let Some(doc) = editor_value {
        return Ok(doc.clone());
    }
    match stored {
        Some(NoteContent::Text(text)) => Ok(text_to_document(text)),
        None | Some(NoteContent::Serialized(serde_json::Value::Null)) => Ok(NoteDocument::empty()),
        Some(NoteContent::Serialized(value)) => NoteDocument::from_json(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_round_trip_keeps_lines() {
        let doc = text_to_document("first\n\nthird");
        assert_eq!(doc.blocks.len(), 3);
        assert_eq!(doc.blocks[1].text(), "");
        assert_eq!(document_to_text(&doc), "first\n\nthird");
    }

    #[test]
    fn test_empty_document() {
        let doc = NoteDocument::empty();
        assert_eq!(doc.blocks.len(), 1);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_formatting_is_dropped_as_text() {
        let doc = NoteDocument {
            blocks: vec![Block::new(
                BlockKind::Heading1,
                vec![
                    TextRun::marked("Big", [Mark::Bold]),
                    TextRun::plain(" title"),
                ],
            )],
        };
        assert_eq!(document_to_text(&doc), "Big title");
    }

    #[test]
    fn test_serialized_shape() {
        let doc = NoteDocument {
            blocks: vec![Block::new(
                BlockKind::BlockQuote,
                vec![TextRun::marked("q", [Mark::Italic])],
            )],
        };
        assert_eq!(
            doc.to_json().expect("json"),
            json!({"blocks": [{"kind": "block-quote", "runs": [{"text": "q", "marks": ["italic"]}]}]})
        );
    }

    #[test]
    fn test_editor_value_wins() {
        let editor = text_to_document("live");
        let stored = NoteContent::Text("stale".to_string());
        let doc = value_for_editor(Some(&editor), Some(&stored)).expect("value");
        assert_eq!(document_to_text(&doc), "live");
    }

    #[test]
    fn test_stored_forms() {
        let legacy = NoteContent::Text("a\nb".to_string());
        assert_eq!(
            value_for_editor(None, Some(&legacy)).expect("text").blocks.len(),
            2
        );
        assert!(value_for_editor(None, None).expect("empty").is_empty());

        let serialized = NoteContent::from_document(&text_to_document("saved")).expect("json");
        let doc = value_for_editor(None, Some(&serialized)).expect("serialized");
        assert_eq!(document_to_text(&doc), "saved");
    }

    #[test]
    fn test_malformed_content() {
        let bad = NoteContent::Serialized(json!({"nodes": 3}));
        assert!(matches!(
            value_for_editor(None, Some(&bad)),
            Err(TextError::Malformed(_))
        ));

        let no_blocks = NoteContent::Serialized(json!({"blocks": []}));
        assert!(value_for_editor(None, Some(&no_blocks)).is_err());
    }

    #[test]
    fn test_stored_content_is_untagged() {
        let text: NoteContent = serde_json::from_str(r#""hello""#).expect("text");
        assert_eq!(text, NoteContent::Text("hello".to_string()));
        let doc: NoteContent = serde_json::from_str(r#"{"blocks": []}"#).expect("doc");
        assert!(matches!(doc, NoteContent::Serialized(_)));
    }
}
