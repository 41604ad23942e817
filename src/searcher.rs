//! Runs the per-field predicate and highlighter over a whole [`Corpus`].
use crate::{
    context::Context,
    corpus::{Corpus, Field, MatchMode, Record},
    highlight::Highlight,
    search::{fault_tolerant_match_with, highlight_literal, highlight_text_with, literal_match},
};
use tracing::debug;

/// A corpus plus the thresholds to search it with. Stateless between calls.
#[derive(Debug, Clone)]
pub struct Searcher {
    corpus: Corpus,
    ctx: Context,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearcherBuilder {
    ctx: Context,
}

impl SearcherBuilder {
    pub fn context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn min_query_chars(mut self, n: usize) -> Self {
        self.ctx.min_query_chars = n;
        self
    }

    pub fn fuzzy_min_query_chars(mut self, n: usize) -> Self {
        self.ctx.fuzzy_min_query_chars = n;
        self
    }

    pub fn max_distance(mut self, n: usize) -> Self {
        self.ctx.max_distance = n;
        self
    }

    pub fn short_query_chars(mut self, n: usize) -> Self {
        self.ctx.short_query_chars = n;
        self
    }

    pub fn short_query_distance(mut self, n: usize) -> Self {
        self.ctx.short_query_distance = n;
        self
    }

    pub fn min_word_chars(mut self, n: usize) -> Self {
        self.ctx.min_word_chars = n;
        self
    }

    pub fn phonetic_slack(mut self, n: usize) -> Self {
        self.ctx.phonetic_slack = n;
        self
    }

    pub fn build(self, corpus: Corpus) -> Searcher {
        Searcher { corpus, ctx: self.ctx }
    }
}

impl Searcher {
    pub fn builder() -> SearcherBuilder {
        SearcherBuilder::default()
    }

    /// Default thresholds.
    pub fn new(corpus: Corpus) -> Self {
        Self::builder().build(corpus)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn field_matches(&self, field: &Field, query: &str) -> bool {
        match field.mode() {
            MatchMode::Tolerant(script) => {
                fault_tolerant_match_with(field.text(), query, script, &self.ctx)
            }
            MatchMode::Literal => literal_match(field.text(), query),
        }
    }

    /// A record matches when any of its fields does.
    pub fn matches(&self, record: &Record, query: &str) -> bool {
        record.fields().iter().any(|f| self.field_matches(f, query))
    }

    /// Right-to-left fields are highlighted over their display form.
    pub fn highlight<'a>(&self, field: &'a Field, query: &str) -> Highlight<'a> {
        match field.mode() {
            MatchMode::Tolerant(script) => {
                highlight_text_with(field.display_text(), query, script, &self.ctx)
            }
            MatchMode::Literal => highlight_literal(field.text(), query),
        }
    }

    /// Matching records in corpus order. An empty query yields none.
    pub fn filter<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Record> {
        self.corpus.iter().filter(move |r| self.matches(r, query))
    }

    /// Filter and highlight. A blank query returns every record with
    /// nothing highlighted.
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        let query = query.trim();
        let hits: Vec<Hit<'_>> = if query.is_empty() {
            self.corpus.iter().map(Hit::unfiltered).collect()
        } else {
            self.filter(query).map(|record| self.hit(record, query)).collect()
        };
        debug!(query, hits = hits.len(), "search finished");
        SearchResults { query: query.to_owned(), hits }
    }

    fn hit<'a>(&self, record: &'a Record, query: &str) -> Hit<'a> {
        let fields = record
            .fields()
            .iter()
            .map(|field| FieldHit {
                field,
                matched: self.field_matches(field, query),
                highlight: self.highlight(field, query),
            })
            .collect();
        Hit { record, fields }
    }
}

#[derive(Debug, Clone)]
pub struct FieldHit<'a> {
    pub field: &'a Field,
    /// The predicate accepted this field. It may still carry no highlight.
    pub matched: bool,
    pub highlight: Highlight<'a>,
}

#[derive(Debug, Clone)]
pub struct Hit<'a> {
    pub record: &'a Record,
    pub fields: Vec<FieldHit<'a>>,
}

impl<'a> Hit<'a> {
    fn unfiltered(record: &'a Record) -> Self {
        let fields = record
            .fields()
            .iter()
            .map(|field| FieldHit {
                field,
                matched: false,
                highlight: Highlight::plain(field.display_text()),
            })
            .collect();
        Self { record, fields }
    }

    pub fn id(&self) -> &'a str {
        self.record.id()
    }

    pub fn matched_fields(&self) -> impl Iterator<Item = &FieldHit<'a>> {
        self.fields.iter().filter(|f| f.matched)
    }

    pub fn field(&self, name: &str) -> Option<&FieldHit<'a>> {
        self.fields.iter().find(|f| f.field.name() == name)
    }
}

/// Hits sharing a record group, in corpus order.
#[derive(Debug)]
pub struct Group<'r, 'a> {
    pub name: &'a str,
    pub hits: Vec<&'r Hit<'a>>,
}

#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    query: String,
    hits: Vec<Hit<'a>>,
}

impl<'a> SearchResults<'a> {
    /// The trimmed query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn hits(&self) -> &[Hit<'a>] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.hits.iter().map(Hit::id)
    }

    /// Groups in the order their first hit appears.
    pub fn groups(&self) -> Vec<Group<'_, 'a>> {
        let mut groups: Vec<Group<'_, 'a>> = Vec::new();
        for hit in &self.hits {
            let name = hit.record.group_name();
            match groups.iter_mut().find(|g| g.name == name) {
                Some(group) => group.hits.push(hit),
                None => groups.push(Group { name, hits: vec![hit] }),
            }
        }
        groups
    }
}
