//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;
use yori_app::{auth::AuthServiceError, domain::users::records::UserUuid};

use crate::{extensions::*, responses::ApiError, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let user = match authenticate(req, depot).await {
        Ok(user) => user,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_user_uuid(user);

    ctrl.call_next(req, depot, res).await;
}

async fn authenticate(req: &Request, depot: &Depot) -> Result<UserUuid, ApiError> {
    let token = extract_bearer_token(req)
        .ok_or_else(|| ApiError::unauthorized("Access token is required"))?;

    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .auth
        .authenticate_bearer(token)
        .await
        .map_err(|auth_error| match auth_error {
            AuthServiceError::NotFound => ApiError::unauthorized("Invalid API token"),
            other => {
                error!("failed to authenticate api token: {other}");

                ApiError::internal()
            }
        })
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
