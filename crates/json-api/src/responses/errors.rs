//! API errors.

use salvo::{
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
    writing::Scribe,
};
use serde::{Deserialize, Serialize};
use yori::validation::Violations;

/// Message for 422 responses.
pub(crate) const VALIDATION_MESSAGE: &str = "Validation error";

/// Message for 500 responses; the cause is only logged.
pub(crate) const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// A problem with one request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct FieldError {
    /// Field name as sent by the client.
    pub field: String,

    /// What is wrong with it.
    pub message: String,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    /// Summary of the failure.
    pub message: String,

    /// Per-field problems, present on validation failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

/// An error response: a status code and the body rendered for it.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                message: message.into(),
                errors: Vec::new(),
            },
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub(crate) fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
    }

    /// 422 with a single field problem.
    pub(crate) fn invalid_field(field: &str, message: &str) -> Self {
        Self::invalid_fields([FieldError {
            field: field.to_owned(),
            message: message.to_owned(),
        }])
    }

    /// 422 with every problem found.
    pub(crate) fn invalid_fields(errors: impl IntoIterator<Item = FieldError>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: ErrorBody {
                message: VALIDATION_MESSAGE.to_owned(),
                errors: errors.into_iter().collect(),
            },
        }
    }

    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    pub(crate) fn message(&self) -> &str {
        &self.body.message
    }
}

impl From<Violations> for ApiError {
    fn from(violations: Violations) -> Self {
        Self::invalid_fields(violations.iter().map(|violation| FieldError {
            field: violation.field.to_owned(),
            message: violation.message.to_owned(),
        }))
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(self.body));
    }
}

/// Catcher hoop rendering errors raised outside a handler, such as an
/// unreadable request body, as an [`ErrorBody`].
#[handler]
pub(crate) async fn render_status_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);
    let message = status.canonical_reason().unwrap_or("Error");

    res.render(ApiError::new(status, message));
    ctrl.skip_rest();
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        let schema = ErrorBody::to_schema(components);

        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Bad Request"),
            (StatusCode::UNAUTHORIZED, "Missing or invalid API token"),
            (StatusCode::NOT_FOUND, "Not Found"),
            (StatusCode::CONFLICT, "Conflict"),
            (StatusCode::UNPROCESSABLE_ENTITY, "Validation error"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", oapi::Content::new(schema.clone())),
            );
        }
    }
}
