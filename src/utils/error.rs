use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::api::catalog::AVAILABLE_ROUTES;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Campo requerido ausente o conflicto de unicidad
    Validation(String),
    /// Fallo del servicio de cócteles remoto; el mensaje ya incluye el contexto
    Upstream(String),
    /// Ninguna ruta coincide; contiene la URL original con su query
    NotFound(String),
    DatabaseError(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    message: String,
    #[serde(rename = "availableRoutes", skip_serializing_if = "Option::is_none")]
    available_routes: Option<&'a [&'a str]>,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "{}", msg),
            AppError::Upstream(msg) => write!(f, "{}", msg),
            AppError::NotFound(url) => write!(f, "Ruta no encontrada: {}", url),
            AppError::DatabaseError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) | AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let available_routes = match self {
            AppError::NotFound(_) => Some(AVAILABLE_ROUTES),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            message: self.to_string(),
            available_routes,
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Upstream("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::NotFound("/x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::DatabaseError("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_message_includes_url() {
        let err = AppError::NotFound("/api/nope?x=1".into());
        assert_eq!(err.to_string(), "Ruta no encontrada: /api/nope?x=1");
    }
}
