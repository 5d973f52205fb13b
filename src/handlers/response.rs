use actix_web::HttpResponse;

use crate::validation::ValidationError;

/// Build the standardized 400 Bad Request response for a rejected scheduling
/// request. `details` carries one `{field, message}` object per problem so
/// clients can attach each error to the offending task field (e.g.
/// `tasks[2].estimatedHours`) instead of parsing flattened strings.
pub fn validation_error_response(errors: &[ValidationError]) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": "Validation failed",
        "details": errors
    }))
}
