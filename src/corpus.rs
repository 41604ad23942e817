//! The immutable record set a [`Searcher`](crate::Searcher) filters.
//!
//! Records are built in code or loaded from JSON shaped like
//! `{"records": [{"id": .., "group": .., "fields": [{"name": .., "text": .., "mode": ..}]}]}`
//! where `mode` is `right_to_left`, `latin` (the default) or `literal`.
use crate::{context::Script, normalize::normalize};
use serde::{Deserialize, Serialize};
use std::{
    borrow::Cow,
    collections::HashSet,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use thiserror::Error;
use tracing::debug;

static BUILTIN_JSON: &str = include_str!("../data/exam.json");

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read corpus: {0}")]
    Io(#[from] std::io::Error),
    #[error("duplicate record id `{0}`")]
    DuplicateId(String),
    #[error("record `{0}` has no fields")]
    EmptyRecord(String),
}

/// How a field is compared against the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ModeName", into = "ModeName")]
pub enum MatchMode {
    /// The full fault-tolerant predicate for the given script.
    Tolerant(Script),
    /// Case-sensitive raw substring, no length floor. For labels like `4:9`.
    Literal,
}

impl Default for MatchMode {
    fn default() -> Self {
        MatchMode::Tolerant(Script::Latin)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ModeName {
    RightToLeft,
    #[default]
    Latin,
    Literal,
}

impl From<ModeName> for MatchMode {
    fn from(name: ModeName) -> Self {
        match name {
            ModeName::RightToLeft => MatchMode::Tolerant(Script::RightToLeft),
            ModeName::Latin => MatchMode::Tolerant(Script::Latin),
            ModeName::Literal => MatchMode::Literal,
        }
    }
}

impl From<MatchMode> for ModeName {
    fn from(mode: MatchMode) -> Self {
        match mode {
            MatchMode::Tolerant(Script::RightToLeft) => ModeName::RightToLeft,
            MatchMode::Tolerant(Script::Latin) => ModeName::Latin,
            MatchMode::Literal => ModeName::Literal,
        }
    }
}

/// One named text of a record.
///
/// Right-to-left fields keep their display form next to the raw text, so
/// normalization runs once at load time instead of on every search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FieldRepr", into = "FieldRepr")]
pub struct Field {
    name: String,
    text: String,
    mode: MatchMode,
    display: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct FieldRepr {
    name: String,
    text: String,
    #[serde(default)]
    mode: MatchMode,
}

impl From<FieldRepr> for Field {
    fn from(repr: FieldRepr) -> Self {
        Field::new(repr.name, repr.text, repr.mode)
    }
}

impl From<Field> for FieldRepr {
    fn from(field: Field) -> Self {
        FieldRepr { name: field.name, text: field.text, mode: field.mode }
    }
}

impl Field {
    pub fn new(name: impl Into<String>, text: impl Into<String>, mode: MatchMode) -> Self {
        let text = text.into();
        let display = match mode {
            MatchMode::Tolerant(Script::RightToLeft) => match normalize(&text) {
                Cow::Owned(shown) => Some(shown),
                Cow::Borrowed(_) => None,
            },
            _ => None,
        };
        Self { name: name.into(), text, mode, display }
    }

    #[inline]
    pub fn rtl(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, text, MatchMode::Tolerant(Script::RightToLeft))
    }

    #[inline]
    pub fn latin(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, text, MatchMode::Tolerant(Script::Latin))
    }

    #[inline]
    pub fn literal(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, text, MatchMode::Literal)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text as loaded.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// What a reader sees: the display-normalized form for right-to-left
    /// fields, the raw text otherwise.
    pub fn display_text(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: String,
    /// Session or section the record is listed under.
    #[serde(default)]
    group: String,
    fields: Vec<Field>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), group: String::new(), fields: Vec::new() }
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn rtl(self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.field(Field::rtl(name, text))
    }

    pub fn latin(self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.field(Field::latin(name, text))
    }

    pub fn literal(self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.field(Field::literal(name, text))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn group_name(&self) -> &str {
        &self.group
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// First field called `name`.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Deserialize)]
struct CorpusFile {
    records: Vec<Record>,
}

/// Ordered, validated, never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Corpus {
    records: Vec<Record>,
}

impl Corpus {
    /// Rejects duplicate ids and records without fields.
    pub fn new(records: Vec<Record>) -> Result<Self, CorpusError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.fields.is_empty() {
                return Err(CorpusError::EmptyRecord(record.id.clone()));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(CorpusError::DuplicateId(record.id.clone()));
            }
        }
        debug!(records = records.len(), "corpus loaded");
        Ok(Self { records })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let file: CorpusFile = serde_json::from_str(json)?;
        Self::new(file.records)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let file: CorpusFile = serde_json::from_reader(reader)?;
        Self::new(file.records)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// The bundled exam material: verses by session, the prayer guide by
    /// section, pillars, key terms and notes.
    pub fn builtin() -> Result<Self, CorpusError> {
        Self::from_json_str(BUILTIN_JSON)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
