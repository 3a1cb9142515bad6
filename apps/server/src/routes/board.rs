use actix_web::{web, HttpResponse};

use crate::error::{AppError, AppResult};
use crate::models::{BoardOptionsResponse, BoardQuery, BoardView};
use crate::services::BoardService;
use crate::source::SnapshotStore;

/// GET /api/board
/// Returns the board grouped and ordered by the selected modes
pub async fn get_board(
    store: web::Data<SnapshotStore>,
    defaults: web::Data<BoardView>,
    query: web::Query<BoardQuery>,
) -> AppResult<HttpResponse> {
    let view = query.resolve(*defaults.get_ref());
    let snapshot = store.snapshot().await?;

    let board = BoardService::render(&snapshot, view)?;

    Ok(HttpResponse::Ok().json(board))
}

/// GET /api/board/options
/// Lists the grouping and ordering choices for the board controls
pub async fn get_options(defaults: web::Data<BoardView>) -> HttpResponse {
    HttpResponse::Ok().json(BoardOptionsResponse::new(*defaults.get_ref()))
}

/// Configure board routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Unknown mode names come back as our JSON validation error
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into());

    cfg.service(
        web::scope("/api/board")
            .app_data(query_config)
            .route("", web::get().to(get_board))
            .route("/options", web::get().to(get_options)),
    );
}
