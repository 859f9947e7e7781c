//! Keyword matching against individual content blocks.
//!
//! Weights: a text hit is worth 1, a tool name hit 2, a tool input hit 1
//! and a tool result hit 0.5. Each check contributes at most once per block
//! no matter how many terms it matches.

use crate::models::ContentBlock;

pub const SNIPPET_CHARS: usize = 200;

const TEXT_WEIGHT: f64 = 1.0;
const TOOL_NAME_WEIGHT: f64 = 2.0;
const TOOL_INPUT_WEIGHT: f64 = 1.0;
const TOOL_RESULT_WEIGHT: f64 = 0.5;

pub const TOOL_RESULT_SNIPPET: &str = "Tool result matched";

/// Lowercased, de-duplicated search terms.
#[derive(Debug, Clone, Default)]
pub struct SearchTerms {
    terms: Vec<String>,
}

impl SearchTerms {
    pub fn parse(query: &str) -> Self {
        let mut terms: Vec<String> = Vec::new();
        for word in query.split_whitespace() {
            let lower = word.to_lowercase();
            if !terms.contains(&lower) {
                terms.push(lower);
            }
        }
        SearchTerms { terms }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    /// True if any term occurs in `haystack`, which must already be lowercase.
    pub fn any_in(&self, haystack: &str) -> bool {
        self.terms.iter().any(|t| haystack.contains(t.as_str()))
    }

    /// Number of distinct terms occurring in `haystack` (already lowercase).
    pub fn count_in(&self, haystack: &str) -> usize {
        self.terms
            .iter()
            .filter(|t| haystack.contains(t.as_str()))
            .count()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BlockMatch {
    pub snippets: Vec<String>,
    pub score: f64,
}

impl BlockMatch {
    pub fn is_match(&self) -> bool {
        self.score > 0.0
    }
}

/// First `SNIPPET_CHARS` characters of `text`, original case.
pub fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}

pub fn tool_snippet(name: &str) -> String {
    format!("Tool: {}", name)
}

pub fn match_block(block: &ContentBlock, terms: &SearchTerms) -> BlockMatch {
    let mut m = BlockMatch::default();

    match block {
        ContentBlock::Text { text } => {
            if terms.any_in(&text.to_lowercase()) {
                m.score += TEXT_WEIGHT;
                m.snippets.push(snippet(text));
            }
        }
        ContentBlock::ToolUse { name, input } => {
            let label = tool_snippet(name);

            if terms.any_in(&name.to_lowercase()) {
                m.score += TOOL_NAME_WEIGHT;
                m.snippets.push(label.clone());
            }

            let input_str = serde_json::to_string(input).unwrap_or_default();
            if terms.any_in(&input_str.to_lowercase()) {
                m.score += TOOL_INPUT_WEIGHT;
                if !m.snippets.contains(&label) {
                    m.snippets.push(label);
                }
            }
        }
        ContentBlock::ToolResult { content } => {
            let content_str = match content {
                serde_json::Value::String(s) => s.to_lowercase(),
                other => other.to_string().to_lowercase(),
            };
            if terms.any_in(&content_str) {
                m.score += TOOL_RESULT_WEIGHT;
                m.snippets.push(TOOL_RESULT_SNIPPET.to_string());
            }
        }
        ContentBlock::Other => {}
    }

    m
}
