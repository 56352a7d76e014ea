use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::{id_text, ports::BoardStore, Board, Comment, DomainError};

type Row = Map<String, Value>;

/// Board store over plain row vectors, joining comments to rich content the
/// same way the Postgres store does.
pub struct InMemoryBoardStore {
    boards: Vec<Board>,
    comments: Vec<Comment>,
    rich_content: Vec<Row>,
    join_key: String,
}

impl InMemoryBoardStore {
    pub fn new(boards: Vec<Board>, comments: Vec<Comment>, rich_content: Vec<Row>) -> Self {
        Self {
            boards,
            comments,
            rich_content,
            join_key: "comment_id".to_string(),
        }
    }

    /// Builds the store from JSON objects; anything else is skipped.
    pub fn from_values(boards: Vec<Value>, comments: Vec<Value>, rich_content: Vec<Value>) -> Self {
        Self::new(
            rows(boards).map(Board::new).collect(),
            rows(comments).map(Comment::new).collect(),
            rows(rich_content).collect(),
        )
    }

    pub fn with_join_key(mut self, join_key: impl Into<String>) -> Self {
        self.join_key = join_key.into();
        self
    }

    /// Every rich-content row sharing the comment's join key. A null or
    /// missing key joins nothing.
    fn rich_content_for<'a>(&'a self, comment: &Comment) -> Vec<&'a Row> {
        match comment.get(&self.join_key).filter(|v| !v.is_null()) {
            Some(key) => self
                .rich_content
                .iter()
                .filter(|row| row.get(&self.join_key) == Some(key))
                .collect(),
            None => Vec::new(),
        }
    }

    /// One row per matching rich-content row, or the bare comment when none
    /// match.
    fn join(&self, comment: &Comment) -> Vec<Comment> {
        let rich_rows = self.rich_content_for(comment);
        if rich_rows.is_empty() {
            return vec![comment.clone()];
        }
        rich_rows
            .into_iter()
            .map(|rich| comment.clone().enrich(rich))
            .collect()
    }
}

fn rows(values: Vec<Value>) -> impl Iterator<Item = Row> {
    values.into_iter().filter_map(|v| match v {
        Value::Object(row) => Some(row),
        _ => None,
    })
}

/// `column::text = $1`, where a missing parameter is SQL NULL and matches
/// nothing.
fn matches(column: Option<&Value>, board_id: Option<&str>) -> bool {
    match (column.and_then(id_text), board_id) {
        (Some(text), Some(id)) => text == id,
        _ => false,
    }
}

#[async_trait]
impl BoardStore for InMemoryBoardStore {
    async fn comments_for_board(
        &self,
        board_id: Option<&str>,
    ) -> Result<Vec<Comment>, DomainError> {
        Ok(self
            .comments
            .iter()
            .filter(|c| matches(c.board_id(), board_id))
            .flat_map(|c| self.join(c))
            .collect())
    }

    async fn board(&self, board_id: Option<&str>) -> Result<Option<Board>, DomainError> {
        Ok(self
            .boards
            .iter()
            .find(|b| matches(b.board_id(), board_id))
            .cloned())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_string_and_numeric_ids_match_by_text() {
        let store = InMemoryBoardStore::from_values(
            vec![json!({"board_id": 1, "name": "Cats"}), json!({"board_id": "dogs"})],
            vec![],
            vec![],
        );

        assert!(store.board(Some("1")).await.unwrap().is_some());
        assert!(store.board(Some("dogs")).await.unwrap().is_some());
        assert!(store.board(Some("01")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_custom_join_key() {
        let store = InMemoryBoardStore::from_values(
            vec![],
            vec![json!({"board_id": 3, "rich_id": "r1", "text": "hello"})],
            vec![json!({"rich_id": "r1", "gif": "wave.gif"})],
        )
        .with_join_key("rich_id");

        let comments = store.comments_for_board(Some("3")).await.unwrap();

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].get("gif"), Some(&json!("wave.gif")));
        assert_eq!(comments[0].get("text"), Some(&json!("hello")));
    }

    #[tokio::test]
    async fn test_rich_content_never_overrides_comment_columns() {
        let store = InMemoryBoardStore::from_values(
            vec![],
            vec![json!({"comment_id": 5, "board_id": 1, "text": "hi"})],
            vec![json!({"comment_id": 5, "board_id": null, "text": null, "image": "k.png"})],
        );

        let comments = store.comments_for_board(Some("1")).await.unwrap();

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].board_id(), Some(&json!(1)));
        assert_eq!(comments[0].get("text"), Some(&json!("hi")));
        assert_eq!(comments[0].get("image"), Some(&json!("k.png")));
    }

    #[tokio::test]
    async fn test_each_matching_rich_row_yields_a_comment_row() {
        let store = InMemoryBoardStore::from_values(
            vec![],
            vec![
                json!({"comment_id": 5, "board_id": 1, "text": "hi"}),
                json!({"comment_id": 6, "board_id": 1, "text": "plain"}),
            ],
            vec![
                json!({"comment_id": 5, "image": "a.png"}),
                json!({"comment_id": 5, "image": "b.png"}),
            ],
        );

        let comments = store.comments_for_board(Some("1")).await.unwrap();

        let images: Vec<Option<&Value>> = comments.iter().map(|c| c.get("image")).collect();
        assert_eq!(
            images,
            vec![Some(&json!("a.png")), Some(&json!("b.png")), None]
        );
        assert!(comments.iter().all(|c| c.board_id() == Some(&json!(1))));
    }

    #[tokio::test]
    async fn test_null_join_key_is_left_unjoined() {
        let store = InMemoryBoardStore::from_values(
            vec![],
            vec![json!({"board_id": 3, "comment_id": null, "text": "orphan"})],
            vec![json!({"comment_id": null, "gif": "nope.gif"})],
        );

        let comments = store.comments_for_board(Some("3")).await.unwrap();

        assert_eq!(comments[0].get("gif"), None);
    }
}
