use crate::WordCounts;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Column the report is wrapped to.
pub const WRAP_WIDTH: usize = 79;

/// Target for rendered report fragments.
///
/// Fragments arrive incrementally while a scan runs; `finish` is the explicit
/// flush point and reports any write error that happened along the way.
pub trait ReportSink {
    fn append(&mut self, text: &str);
    fn finish(&mut self) -> io::Result<()>;
}

impl ReportSink for String {
    fn append(&mut self, text: &str) {
        self.push_str(text);
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Adapts any `io::Write` into a sink. The first write error is held back
/// until `finish` so a broken pipe cannot abort a scan halfway through.
pub struct WriteSink<W: Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: Write> WriteSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }
}

impl<W: Write> ReportSink for WriteSink<W> {
    fn append(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.inner.write_all(text.as_bytes()) {
            self.error = Some(e);
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.inner.flush()
    }
}

/// Wrap `pieces` to `width` columns behind `label`, with continuation lines
/// indented by the label width. A piece longer than the remaining width is
/// emitted whole on its own line rather than split.
fn wrap(label: &str, pieces: &[String], width: usize) -> String {
    let indent = " ".repeat(label.len());
    let mut out = String::new();
    let mut line = label.to_string();
    let mut line_has_pieces = false;

    for piece in pieces {
        if line_has_pieces && line.len() + piece.len() + 1 > width {
            out.push_str(&line);
            out.push('\n');
            line = indent.clone();
            line_has_pieces = false;
        }
        if line_has_pieces {
            line.push(' ');
        }
        line.push_str(piece);
        line_has_pieces = true;
    }

    out.push_str(&line);
    out.push('\n');
    out
}

/// Render the detail line for one failed comment.
///
/// Words appear in lexicographic order, each tagged `(x<k>)` when it occurred
/// more than once in that comment.
pub fn comment_line(line: usize, counts: &WordCounts) -> String {
    let label = format!("line {:>4}: ", line);
    let pieces: Vec<String> = counts
        .iter()
        .map(|(word, &n)| {
            if n > 1 {
                format!("{}(x{})", word, n)
            } else {
                word.clone()
            }
        })
        .collect();
    wrap(&label, &pieces, WRAP_WIDTH)
}

/// Render the end-of-scan summary: one wrapped block per distinct frequency,
/// ascending, listing the words of that frequency comma-joined.
pub fn frequency_summary(counts: &WordCounts) -> String {
    let mut by_frequency: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for (word, &n) in counts {
        by_frequency.entry(n).or_default().push(word);
    }

    let mut out = String::from("\n");
    for (frequency, words) in &by_frequency {
        let label = format!("{:>9}: ", frequency);
        let pieces: Vec<String> = words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i + 1 < words.len() {
                    format!("{},", word)
                } else {
                    (*word).to_string()
                }
            })
            .collect();
        out.push_str(&wrap(&label, &pieces, WRAP_WIDTH));
    }
    out
}
