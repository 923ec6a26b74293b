//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    auth::{
        ApiTokenMetadata, ApiTokenVersion, AuthServiceError, IssuedApiToken, NewApiToken,
        format_api_token, generate_api_token_secret, parse_api_token,
        repository::PgAuthRepository, token_verifier, verifiers_match,
    },
    database::Db,
    domain::users::records::UserUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    db: Db,
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAuthRepository::new(),
        }
    }

    /// Issue a new API token for the given user.
    ///
    /// # Errors
    ///
    /// Returns an error if the expiry is not in the future, the user does not
    /// exist or the insert fails.
    pub async fn issue_api_token(
        &self,
        user: UserUuid,
        expires_at: Option<Timestamp>,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        if expires_at.is_some_and(|expires_at| expires_at <= Timestamp::now()) {
            return Err(AuthServiceError::ExpiryInPast);
        }

        let token_uuid = Uuid::now_v7();
        let version = ApiTokenVersion::V1;
        let secret = generate_api_token_secret();
        let token = format_api_token(token_uuid, version, &secret);
        let token_hash = token_verifier(&token_uuid, version, user, &secret);

        let mut tx = self.db.begin().await?;

        let metadata = self
            .repository
            .create_api_token(
                &mut tx,
                &NewApiToken {
                    uuid: token_uuid,
                    user_uuid: user,
                    version,
                    token_hash,
                    expires_at,
                },
            )
            .await?;

        tx.commit().await?;

        info!(user.uuid = %user, token.uuid = %token_uuid, "api token issued");

        Ok(IssuedApiToken { token, metadata })
    }

    /// List all tokens for the given user, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_api_tokens(
        &self,
        user: UserUuid,
    ) -> Result<Vec<ApiTokenMetadata>, AuthServiceError> {
        let mut tx = self.db.begin().await?;

        let tokens = self.repository.list_api_tokens(&mut tx, user).await?;

        tx.commit().await?;

        Ok(tokens)
    }

    /// Revoke a token by UUID. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, token_uuid: Uuid) -> Result<bool, AuthServiceError> {
        let mut tx = self.db.begin().await?;

        let revoked = self
            .repository
            .revoke_api_token(&mut tx, token_uuid)
            .await?
            .is_some();

        tx.commit().await?;

        if revoked {
            info!(token.uuid = %token_uuid, "api token revoked");
        }

        Ok(revoked)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError> {
        let parsed_token =
            parse_api_token(bearer_token).map_err(|_malformed| AuthServiceError::NotFound)?;

        let mut tx = self.db.begin().await?;

        let token = self
            .repository
            .find_active_api_token(&mut tx, parsed_token.token_uuid, parsed_token.version)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        let verifier = token_verifier(
            &parsed_token.token_uuid,
            parsed_token.version,
            token.user_uuid,
            &parsed_token.secret,
        );

        if !verifiers_match(&token.token_hash, &verifier) {
            return Err(AuthServiceError::NotFound);
        }

        // Recording last use is best-effort.
        match self
            .repository
            .touch_api_token(&mut tx, parsed_token.token_uuid)
            .await
        {
            Ok(_rows) => {
                if let Err(error) = tx.commit().await {
                    warn!(token.uuid = %parsed_token.token_uuid, %error, "failed to record token use");
                }
            }
            Err(error) => {
                warn!(token.uuid = %parsed_token.token_uuid, %error, "failed to record token use");
            }
        }

        Ok(token.user_uuid)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to the user it was issued to.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError>;
}
