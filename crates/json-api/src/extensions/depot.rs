//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;
use tracing::error;
use yori_app::domain::users::records::UserUuid;

use crate::responses::ApiError;

/// Typed access to what middleware leaves in the depot.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    /// Record the authenticated user for the rest of the request.
    fn insert_user_uuid(&mut self, user: UserUuid);

    /// The authenticated user, or 401 when the auth middleware did not run.
    fn user_uuid_or_401(&self) -> Result<UserUuid, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_missing| {
            error!("depot is missing {}", std::any::type_name::<T>());

            ApiError::internal()
        })
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.inject(user);
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, ApiError> {
        self.obtain::<UserUuid>()
            .copied()
            .map_err(|_missing| ApiError::unauthorized("Access token is required"))
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn user_uuid_round_trips_through_the_depot() {
        let mut depot = Depot::new();
        let user = UserUuid::from_uuid(Uuid::nil());

        depot.insert_user_uuid(user);

        assert!(
            matches!(depot.user_uuid_or_401(), Ok(found) if found == user),
            "stored user is returned"
        );
    }

    #[test]
    fn missing_user_is_unauthorized() {
        let result = Depot::new().user_uuid_or_401();

        assert!(
            matches!(&result, Err(error) if error.status() == StatusCode::UNAUTHORIZED),
            "expected 401, got {result:?}"
        );
    }
}
