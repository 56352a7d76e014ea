use std::sync::Arc;
use tracing::instrument;

use crate::domain::{ports::BoardStore, BoardThread, DomainError};

pub struct BoardService {
    store: Arc<dyn BoardStore>,
}

impl BoardService {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }

    /// Loads a board and its comments. Both lookups are in flight at the
    /// same time; the first failure fails the whole thread.
    #[instrument(skip(self))]
    pub async fn thread(&self, board_id: Option<&str>) -> Result<BoardThread, DomainError> {
        let (comments, board) = tokio::try_join!(
            self.store.comments_for_board(board_id),
            self.store.board(board_id)
        )?;

        tracing::debug!(
            found = board.is_some(),
            comments = comments.len(),
            "board thread loaded"
        );

        Ok(BoardThread { board, comments })
    }

    pub async fn ping(&self) -> Result<(), DomainError> {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Board, Comment};
    use crate::infrastructure::InMemoryBoardStore;
    use async_trait::async_trait;
    use serde_json::json;
    use std::time::Duration;
    use tokio::time::Instant;

    const QUERY_LATENCY: Duration = Duration::from_millis(100);

    struct SlowStore {
        fail_board: bool,
    }

    #[async_trait]
    impl BoardStore for SlowStore {
        async fn comments_for_board(
            &self,
            _board_id: Option<&str>,
        ) -> Result<Vec<Comment>, DomainError> {
            tokio::time::sleep(QUERY_LATENCY).await;
            Ok(vec![Comment::default()])
        }

        async fn board(&self, _board_id: Option<&str>) -> Result<Option<Board>, DomainError> {
            tokio::time::sleep(QUERY_LATENCY).await;
            if self.fail_board {
                return Err(DomainError::query("boards relation is gone"));
            }
            Ok(Some(Board::default()))
        }

        async fn ping(&self) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn fixture() -> InMemoryBoardStore {
        InMemoryBoardStore::from_values(
            vec![
                json!({"board_id": 1, "name": "Cats"}),
                json!({"board_id": 2, "name": "Dogs"}),
            ],
            vec![
                json!({"comment_id": 10, "board_id": 1, "text": "hi"}),
                json!({"comment_id": 11, "board_id": 1, "text": "meow"}),
                json!({"comment_id": 12, "board_id": 2, "text": "woof"}),
            ],
            vec![json!({"comment_id": 10, "image": "cat.png"})],
        )
    }

    #[tokio::test]
    async fn test_thread_scopes_to_board() {
        let service = BoardService::new(Arc::new(fixture()));

        let thread = service.thread(Some("1")).await.unwrap();

        assert_eq!(thread.board.unwrap().board_id(), Some(&json!(1)));
        assert_eq!(thread.comments.len(), 2);
        assert!(thread.comments.iter().all(|c| c.board_id() == Some(&json!(1))));
        assert_eq!(thread.comments[0].get("image"), Some(&json!("cat.png")));
        assert_eq!(thread.comments[1].get("image"), None);
    }

    #[tokio::test]
    async fn test_thread_for_unknown_board_is_empty() {
        let service = BoardService::new(Arc::new(fixture()));

        let thread = service.thread(Some("404")).await.unwrap();

        assert_eq!(thread, BoardThread::default());
    }

    #[tokio::test]
    async fn test_thread_without_id_matches_nothing() {
        let service = BoardService::new(Arc::new(fixture()));

        let thread = service.thread(None).await.unwrap();

        assert!(thread.board.is_none());
        assert!(thread.comments.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_thread_queries_run_concurrently() {
        let service = BoardService::new(Arc::new(SlowStore { fail_board: false }));

        let start = Instant::now();
        let thread = service.thread(Some("1")).await.unwrap();

        assert!(start.elapsed() < QUERY_LATENCY * 2);
        assert!(thread.board.is_some());
        assert_eq!(thread.comments.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_thread_fails_when_either_query_fails() {
        let service = BoardService::new(Arc::new(SlowStore { fail_board: true }));

        let err = service.thread(Some("1")).await.unwrap_err();

        assert!(matches!(err, DomainError::Query(_)));
    }
}
