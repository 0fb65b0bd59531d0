use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use userdesk_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match &err {
        DomainError::Validation(_) | DomainError::InvalidId(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
    };
    json_error(status, err.code(), err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
            "code": code,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_domain_error_to_its_status() {
        let cases = [
            (DomainError::validation("Invalid email format"), StatusCode::BAD_REQUEST),
            (DomainError::invalid_id("UserId: bad"), StatusCode::BAD_REQUEST),
            (DomainError::not_found("User not found"), StatusCode::NOT_FOUND),
            (DomainError::conflict("User with this email already exists"), StatusCode::CONFLICT),
        ];
        for (err, status) in cases {
            assert_eq!(domain_error_to_response(err).status(), status);
        }
    }
}
