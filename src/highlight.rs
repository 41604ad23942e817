//! Renderable result of highlighting one field: plain and marked runs that
//! borrow from the highlighted text.
use crate::fuzzy::Span;
use smallvec::SmallVec;
use std::fmt;

/// Which strategy produced a highlight. Strategies are alternatives; the
/// first one that finds something decides the whole segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStrategy {
    /// Every occurrence of the normalized query.
    Exact,
    /// One approximate span rescaled out of phonetic space.
    Phonetic,
    /// One span from the fuzzy match locator.
    Fuzzy,
    /// Nothing emphasized.
    None,
}

impl MatchStrategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            MatchStrategy::Exact => "exact",
            MatchStrategy::Phonetic => "phonetic",
            MatchStrategy::Fuzzy => "fuzzy",
            MatchStrategy::None => "none",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Marked(&'a str),
}

impl<'a> Segment<'a> {
    #[inline(always)]
    pub const fn text(&self) -> &'a str {
        match *self {
            Segment::Plain(s) | Segment::Marked(s) => s,
        }
    }

    #[inline(always)]
    pub const fn is_marked(&self) -> bool {
        matches!(self, Segment::Marked(_))
    }
}

/// Walks `text` forward, turning char offsets into byte offsets. Targets
/// behind the cursor or past the end clamp.
struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, byte: 0, chars: 0 }
    }

    fn advance_to(&mut self, target: usize) -> usize {
        while self.chars < target {
            let Some(c) = self.text[self.byte..].chars().next() else { break };
            self.byte += c.len_utf8();
            self.chars += 1;
        }
        self.byte
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight<'a> {
    text: &'a str,
    segments: SmallVec<[Segment<'a>; 3]>,
    strategy: MatchStrategy,
}

impl<'a> Highlight<'a> {
    /// The text unchanged, nothing emphasized.
    pub fn plain(text: &'a str) -> Self {
        let mut segments = SmallVec::new();
        if !text.is_empty() {
            segments.push(Segment::Plain(text));
        }
        Self { text, segments, strategy: MatchStrategy::None }
    }

    /// Build from ascending char spans. Spans are clamped to the text and
    /// to each other, so any input is safe. If nothing is left to mark the
    /// result reports [`MatchStrategy::None`].
    pub fn from_spans<I>(text: &'a str, spans: I, strategy: MatchStrategy) -> Self
    where
        I: IntoIterator<Item = Span>,
    {
        let mut segments = SmallVec::new();
        let mut cursor = CharCursor::new(text);
        let mut last = 0;

        for span in spans {
            let start = cursor.advance_to(span.start);
            let end = cursor.advance_to(span.end);
            if start == end {
                continue;
            }
            if start > last {
                segments.push(Segment::Plain(&text[last..start]));
            }
            segments.push(Segment::Marked(&text[start..end]));
            last = end;
        }

        if segments.is_empty() {
            return Self::plain(text);
        }
        if last < text.len() {
            segments.push(Segment::Plain(&text[last..]));
        }
        Self { text, segments, strategy }
    }

    #[inline(always)]
    pub fn text(&self) -> &'a str {
        self.text
    }

    #[inline(always)]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    #[inline(always)]
    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Emphasized runs, left to right.
    pub fn marked(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().filter(|s| s.is_marked()).map(Segment::text)
    }

    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.segments.iter().any(Segment::is_marked)
    }

    /// HTML with `<mark>` around emphasized runs. All text is escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + 16);
        for segment in &self.segments {
            let escaped = html_escape::encode_text(segment.text());
            if segment.is_marked() {
                out.push_str("<mark>");
                out.push_str(&escaped);
                out.push_str("</mark>");
            } else {
                out.push_str(&escaped);
            }
        }
        out
    }
}

/// Bracket rendering: `the [quick] fox`.
impl fmt::Display for Highlight<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Plain(s) => f.write_str(s)?,
                Segment::Marked(s) => write!(f, "[{s}]")?,
            }
        }
        Ok(())
    }
}
