use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column shared by boards and comments.
pub const BOARD_ID_FIELD: &str = "board_id";

/// A discussion board row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board(pub Map<String, Value>);

impl Board {
    pub fn new(columns: Map<String, Value>) -> Self {
        Self(columns)
    }

    pub fn board_id(&self) -> Option<&Value> {
        self.0.get(BOARD_ID_FIELD)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A comment row, possibly enriched with its `rich_content` columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comment(pub Map<String, Value>);

impl Comment {
    pub fn new(columns: Map<String, Value>) -> Self {
        Self(columns)
    }

    pub fn board_id(&self) -> Option<&Value> {
        self.0.get(BOARD_ID_FIELD)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// Adds joined rich-content columns to the comment. A column the comment
    /// already has keeps the comment's value.
    pub fn enrich(mut self, rich_content: &Map<String, Value>) -> Self {
        for (column, value) in rich_content {
            self.0
                .entry(column.clone())
                .or_insert_with(|| value.clone());
        }
        self
    }
}

/// A board together with every comment posted on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardThread {
    pub board: Option<Board>,
    pub comments: Vec<Comment>,
}

/// Text form of a column value, the way PostgreSQL renders `column::text`.
///
/// Lookup tokens arrive as raw strings and are compared against this form,
/// so an id column of any scalar type matches its textual token.
pub fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
