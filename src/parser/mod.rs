pub mod source_code;

use anyhow::{ensure, Result};
use std::path::Path;

/// Languages we know the comment syntax for. `Other` falls back to the
/// C-family line-comment marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLang {
    Rust,
    JavaScript,
    TypeScript,
    Python,
    Go,
    Java,
    C,
    Cpp,
    Shell,
    Ruby,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommentStyle {
    Slash,
    Hash,
}

impl SourceLang {
    /// Detect language from the file extension.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "rs" => SourceLang::Rust,
            "js" | "mjs" | "cjs" => SourceLang::JavaScript,
            "ts" | "mts" | "cts" => SourceLang::TypeScript,
            "py" | "pyw" => SourceLang::Python,
            "go" => SourceLang::Go,
            "java" => SourceLang::Java,
            "c" | "h" => SourceLang::C,
            "cpp" | "cc" | "cxx" | "hpp" | "hh" => SourceLang::Cpp,
            "sh" | "bash" | "zsh" => SourceLang::Shell,
            "rb" => SourceLang::Ruby,
            _ => SourceLang::Other,
        }
    }

    pub(crate) fn comment_style(self) -> CommentStyle {
        match self {
            SourceLang::Python | SourceLang::Shell | SourceLang::Ruby => CommentStyle::Hash,
            _ => CommentStyle::Slash,
        }
    }
}

/// One comment, attributed to its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub line: usize,
    pub text: String,
}

/// Parsed view of one source file: its comments in source order plus the
/// line index they are attributed against.
#[derive(Debug, Clone)]
pub struct Document {
    comments: Vec<Comment>,
    line_count: usize,
}

impl Document {
    pub fn parse(content: &str, lang: SourceLang) -> Self {
        let comments = source_code::extract_comments(content, lang.comment_style());
        Self {
            comments,
            line_count: content.lines().count(),
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Check that every comment points at a real source line, in order.
    pub fn validate(&self) -> Result<()> {
        let mut previous = 0;
        for comment in &self.comments {
            ensure!(
                comment.line >= 1 && comment.line <= self.line_count,
                "comment attributed to line {} outside file of {} lines",
                comment.line,
                self.line_count
            );
            ensure!(
                comment.line >= previous,
                "comments out of source order at line {}",
                comment.line
            );
            previous = comment.line;
        }
        Ok(())
    }
}
