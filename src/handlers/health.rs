use crate::types::response::ApiResponse;
use actix_web::{HttpResponse, Result};

pub async fn health_check() -> Result<HttpResponse> {
    let response = ApiResponse {
        message: "Employee Management API is running".to_string(),
        status: "healthy".to_string(),
    };
    Ok(HttpResponse::Ok().json(response))
}

pub async fn index() -> Result<HttpResponse> {
    let response = ApiResponse {
        message: "Welcome to Employee Management API".to_string(),
        status: "success".to_string(),
    };
    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode};

    #[actix_web::test]
    async fn health_check_reports_healthy() {
        let response = health_check().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body()).await.unwrap();
        let parsed: ApiResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.status, "healthy");
    }
}
