use crate::parser::{Comment, CommentStyle};

/// Extract line comments with their 1-based line numbers, in source order.
pub(crate) fn extract_comments(content: &str, style: CommentStyle) -> Vec<Comment> {
    match style {
        CommentStyle::Slash => extract_slash_style(content),
        CommentStyle::Hash => extract_hash_style(content),
    }
}

fn extract_slash_style(content: &str) -> Vec<Comment> {
    let mut comments = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if let Some(idx) = line.find("//") {
            let text = line[idx + 2..].trim();
            if !text.is_empty() {
                comments.push(Comment {
                    line: line_num + 1,
                    text: text.to_string(),
                });
            }
        }
    }

    // TODO: handle multi-line block comments /* ... */
    comments
}

fn extract_hash_style(content: &str) -> Vec<Comment> {
    let mut comments = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if let Some(idx) = line.find('#') {
            // Make sure the marker is not inside a string
            let before = &line[..idx];
            let quote_count = before.matches('"').count() + before.matches('\'').count();
            if quote_count % 2 != 0 {
                continue;
            }

            let text = line[idx + 1..].trim();
            if !text.is_empty() {
                comments.push(Comment {
                    line: line_num + 1,
                    text: text.to_string(),
                });
            }
        }
    }

    comments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_comments_with_line_numbers() {
        let content = "fn main() {\n    let x = 1; // trailing note\n}\n// closing remark\n";
        let comments = extract_comments(content, CommentStyle::Slash);

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].line, 2);
        assert_eq!(comments[0].text, "trailing note");
        assert_eq!(comments[1].line, 4);
        assert_eq!(comments[1].text, "closing remark");
    }

    #[test]
    fn test_empty_comments_are_skipped() {
        let comments = extract_comments("//\n//   \n// real\n", CommentStyle::Slash);
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].line, 3);
    }

    #[test]
    fn test_hash_comments_skip_string_contents() {
        let content = "print(\"# not a comment\")\nvalue = 1  # real comment\n";
        let comments = extract_comments(content, CommentStyle::Hash);

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].line, 2);
        assert_eq!(comments[0].text, "real comment");
    }
}
