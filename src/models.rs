use serde::Deserialize;

/// One line of a session log. Only `message.content` is ever looked at;
/// metadata such as `sessionId` or `gitBranch` is ignored so it can't
/// produce false positives.
#[derive(Debug, Deserialize)]
pub struct Record {
    pub message: Message,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub content: MessageContent,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<BlockSlot>),
    Other(serde_json::Value),
}

/// A content array entry. Anything that doesn't parse as a known block
/// (non-objects, a `text` block without a string `text`, ...) lands in
/// `Unrecognized` and is ignored by matching.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BlockSlot {
    Known(ContentBlock),
    Unrecognized(serde_json::Value),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    ToolUse {
        #[serde(default)]
        name: String,
        #[serde(default = "empty_object")]
        input: serde_json::Value,
    },
    ToolResult {
        #[serde(default = "empty_string")]
        content: serde_json::Value,
    },
    #[serde(other)]
    Other,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

fn empty_string() -> serde_json::Value {
    serde_json::Value::String(String::new())
}

impl BlockSlot {
    pub fn block(&self) -> Option<&ContentBlock> {
        match self {
            BlockSlot::Known(b) => Some(b),
            BlockSlot::Unrecognized(_) => None,
        }
    }
}

impl Record {
    pub fn parse(line: &str) -> Option<Record> {
        serde_json::from_str(line).ok()
    }
}

impl ContentBlock {
    /// Tool name of a `tool_use` block, if it has one.
    pub fn tool_name(&self) -> Option<&str> {
        match self {
            ContentBlock::ToolUse { name, .. } if !name.is_empty() => Some(name.as_str()),
            _ => None,
        }
    }

    /// The `file_path` argument a tool was invoked with.
    pub fn referenced_file(&self) -> Option<&str> {
        match self {
            ContentBlock::ToolUse { input, .. } => input.get("file_path")?.as_str(),
            _ => None,
        }
    }
}
