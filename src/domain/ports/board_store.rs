use async_trait::async_trait;

use crate::domain::{errors::DomainError, Board, Comment};

#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Comments on the board, each joined with its rich content.
    async fn comments_for_board(&self, board_id: Option<&str>)
        -> Result<Vec<Comment>, DomainError>;

    /// The first board row with the given id, if any.
    async fn board(&self, board_id: Option<&str>) -> Result<Option<Board>, DomainError>;

    async fn ping(&self) -> Result<(), DomainError>;
}
