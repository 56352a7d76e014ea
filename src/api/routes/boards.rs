use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::api::{error::ApiError, routes::SearchQuery, state::BoardsState};
use crate::domain::{Board, BoardThread, Comment};

/// A missing board renders as `{}` and missing comments as `[]`, never
/// `null`.
#[derive(Debug, Serialize)]
pub struct BoardThreadResponse {
    pub status: &'static str,
    pub board: Board,
    pub comments: Vec<Comment>,
}

impl From<BoardThread> for BoardThreadResponse {
    fn from(thread: BoardThread) -> Self {
        Self {
            status: "success",
            board: thread.board.unwrap_or_default(),
            comments: thread.comments,
        }
    }
}

pub async fn get_board_thread(
    State(state): State<BoardsState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<BoardThreadResponse>, ApiError> {
    let thread = state
        .board_service
        .thread(query.search.as_deref())
        .await?;

    Ok(Json(BoardThreadResponse::from(thread)))
}
