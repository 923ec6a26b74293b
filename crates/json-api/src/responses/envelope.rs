//! Success envelope.

use salvo::{oapi::ToSchema, prelude::Json};
use serde::{Deserialize, Serialize};

/// Successful response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct Envelope<T: ToSchema + 'static> {
    /// What was done.
    pub message: String,

    /// The resource.
    pub data: T,
}

/// Wrap `data` with a message, ready to be returned from a handler.
pub(crate) fn envelope<T>(message: &str, data: T) -> Json<Envelope<T>>
where
    T: ToSchema + 'static,
{
    Json(Envelope {
        message: message.to_owned(),
        data,
    })
}
