#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use serde_json::Value;

    use crate::catalog::{CatalogError, ValidationError};
    use crate::error::AppError;
    use crate::task::TaskConflict;

    async fn response_parts(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn bad_request_maps_to_400_with_flat_error_body() {
        let (status, body) = response_parts(AppError::BadRequest("invalid id".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "invalid id" }));
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, body) = response_parts(AppError::NotFound("book not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "book not found");
    }

    #[tokio::test]
    async fn conflict_maps_to_409() {
        let (status, body) = response_parts(AppError::from(TaskConflict)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "task already running");
    }

    #[tokio::test]
    async fn internal_errors_hide_their_detail() {
        let err = AppError::from(anyhow::anyhow!("connection refused to secret host"));
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal server error");
    }

    #[tokio::test]
    async fn validation_errors_become_bad_requests() {
        for (err, message) in [
            (ValidationError::EmptyTitle, "title must not be empty"),
            (ValidationError::YearOutOfRange, "year out of range"),
            (ValidationError::IsbnInvalidLength, "isbn invalid length"),
        ] {
            let (status, body) = response_parts(AppError::from(err)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], message);
        }
    }

    #[tokio::test]
    async fn catalog_errors_split_between_400_and_404() {
        let (status, body) = response_parts(AppError::from(CatalogError::DuplicateId)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "book with this id already exists");

        let (status, body) = response_parts(AppError::from(CatalogError::NotFound)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "book not found");
    }
}
