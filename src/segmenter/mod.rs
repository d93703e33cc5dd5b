// WHY: Documents arrive as paragraphs; the engine works one sentence at a time
// Boundaries come from one compiled regex-automata pattern plus an abbreviation guard

use anyhow::{Context, Result};
use regex_automata::{meta::Regex, Input};
use tracing::{debug, info};

pub mod abbreviations;
pub mod normalization;

pub use abbreviations::AbbreviationChecker;
pub use normalization::{normalize_sentence, normalize_sentence_into};

/// Terminal punctuation, optional closing quotes, whitespace, optional opening quotes, uppercase letter
const BOUNDARY_PATTERN: &str = r#"[.!?…]["'”’“»)\]]*\s+["'“„‚«(\[]*\p{Lu}"#;

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | '”' | '’' | '“' | '»' | ')' | ']')
}

/// One sentence of a document, borrowed from the document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSpan<'t> {
    pub index: usize,
    /// Byte offsets into the document
    pub start: usize,
    pub end: usize,
    /// 1-based line the sentence starts on
    pub line: usize,
    pub raw: &'t str,
}

impl SentenceSpan<'_> {
    /// `raw` with whitespace runs collapsed to one space and trimmed; no longer a slice of the input
    pub fn normalized(&self) -> String {
        normalize_sentence(self.raw)
    }
}

pub struct SentenceSegmenter {
    boundary: Regex,
    abbreviations: AbbreviationChecker,
}

impl SentenceSegmenter {
    pub fn new() -> Result<Self> {
        info!("Compiling sentence boundary pattern");
        let boundary = Regex::new(BOUNDARY_PATTERN)
            .with_context(|| format!("invalid boundary pattern {BOUNDARY_PATTERN:?}"))?;
        debug!("Compiled boundary pattern: {}", BOUNDARY_PATTERN);
        Ok(Self {
            boundary,
            abbreviations: AbbreviationChecker::new(),
        })
    }

    /// Lazily segment `text`; the returned iterator can be cloned to restart from its current position
    pub fn segment<'s, 't>(&'s self, text: &'t str) -> Sentences<'s, 't> {
        Sentences {
            segmenter: self,
            text,
            start: 0,
            search_from: 0,
            index: 0,
            line: 1,
            finished: false,
        }
    }

    /// Segment and normalize, dropping empty sentences
    /// Internal whitespace runs are collapsed, so the results are not byte-identical to `text`
    pub fn sentences(&self, text: &str) -> Vec<String> {
        self.segment(text).map(|span| span.normalized()).collect()
    }
}

/// Lazy sentence iterator over one document
///
/// Spans borrow the input unchanged. Callers that want corpus text use
/// [`SentenceSpan::normalized`], which collapses internal whitespace, so that text no longer
/// matches the input bytes.
#[derive(Clone)]
pub struct Sentences<'s, 't> {
    segmenter: &'s SentenceSegmenter,
    text: &'t str,
    start: usize,
    search_from: usize,
    index: usize,
    line: usize,
    finished: bool,
}

impl<'t> Sentences<'_, 't> {
    /// Byte offset just past the terminal punctuation and any closing quotes
    fn sentence_end(&self, punct_start: usize) -> usize {
        let mut chars = self.text[punct_start..].char_indices();
        let mut end = punct_start;
        if let Some((_, punct)) = chars.next() {
            end += punct.len_utf8();
        }
        for (_, ch) in chars {
            if !is_closing(ch) {
                break;
            }
            end += ch.len_utf8();
        }
        end
    }

    /// Emit `start..end` (if it holds any text) and move the cursor to `next_start`
    fn take(&mut self, end: usize, next_start: usize) -> Option<SentenceSpan<'t>> {
        let raw = &self.text[self.start..end];
        let span = (!raw.trim().is_empty()).then(|| SentenceSpan {
            index: self.index,
            start: self.start,
            end,
            line: self.line,
            raw,
        });
        if span.is_some() {
            self.index += 1;
        }
        self.line += self.text[self.start..next_start].matches('\n').count();
        self.start = next_start;
        self.search_from = next_start;
        span
    }
}

impl<'t> Iterator for Sentences<'_, 't> {
    type Item = SentenceSpan<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let input = Input::new(self.text).range(self.search_from..);
            let Some(found) = self.segmenter.boundary.find(input) else {
                self.finished = true;
                return self.take(self.text.len(), self.text.len());
            };

            let end = self.sentence_end(found.start());
            if self.segmenter.abbreviations.ends_with_abbreviation(&self.text[self.start..end]) {
                let punct_len = self.text[found.start()..].chars().next().map_or(1, char::len_utf8);
                self.search_from = found.start() + punct_len;
                continue;
            }

            let rest = &self.text[end..];
            let next_start = end + (rest.len() - rest.trim_start().len());
            if let Some(span) = self.take(end, next_start) {
                return Some(span);
            }
        }
        None
    }
}
