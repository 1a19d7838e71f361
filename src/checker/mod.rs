use crate::engine::SpellEngine;
use crate::filter::StopwordFilter;
use crate::parser::{Comment, Document, SourceLang};
use crate::report::{self, ReportSink};
use crate::{CommentFailure, ScanResult, WordCounts};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Drives one scan: visits comments in source order, feeds each through the
/// stopword filter and the engine, and accumulates the structured result
/// while streaming the report to the sink.
pub struct CommentChecker<E> {
    engine: E,
    filter: StopwordFilter,
}

impl<E: SpellEngine> CommentChecker<E> {
    pub fn new(engine: E, filter: StopwordFilter) -> Self {
        Self { engine, filter }
    }

    /// Read, parse and scan one file.
    pub fn scan_path(&self, path: &Path, sink: &mut dyn ReportSink) -> Result<ScanResult> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let document = Document::parse(&content, SourceLang::from_path(path));
        self.scan(&document, sink)
    }

    /// Scan an already-parsed document. The accumulators live and die with
    /// this call; nothing carries over between scans.
    pub fn scan(&self, document: &Document, sink: &mut dyn ReportSink) -> Result<ScanResult> {
        document.validate()?;

        let mut result = ScanResult::default();
        for comment in document.comments() {
            if let Some(fail) = self.process_comment(comment, &mut result.counts, sink)? {
                result.fails.push(fail);
            }
        }

        if !result.counts.is_empty() {
            sink.append(&report::frequency_summary(&result.counts));
        }
        sink.finish().context("failed to finalize report sink")?;

        Ok(result)
    }

    /// Check one comment. Recoverable engine failures are logged and count
    /// as zero words so one bad comment cannot sink the rest of the scan.
    fn process_comment(
        &self,
        comment: &Comment,
        global: &mut WordCounts,
        sink: &mut dyn ReportSink,
    ) -> Result<Option<CommentFailure>> {
        let text = self.filter.strip(&comment.text);
        if text.trim().is_empty() {
            return Ok(None);
        }

        let words = match self.engine.check_text(&text) {
            Ok(words) => words,
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => {
                log::warn!("spell check failed for comment at line {}: {}", comment.line, e);
                Vec::new()
            }
        };
        if words.is_empty() {
            return Ok(None);
        }

        let mut counts = WordCounts::new();
        for word in words {
            *counts.entry(word).or_insert(0) += 1;
        }
        for (word, &n) in &counts {
            *global.entry(word.clone()).or_insert(0) += n;
        }

        sink.append(&report::comment_line(comment.line, &counts));

        Ok(Some(CommentFailure {
            line: comment.line,
            counts,
        }))
    }
}
