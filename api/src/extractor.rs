use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use kernel::model::{booking::OwnerIdentity, id::UserId};
use registry::AppRegistry;
use shared::error::AppError;

fn header_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Caller identity as supplied by the auth layer in front of this service.
/// The values are trusted as-is; nothing here verifies them.
pub struct OwnerHeaders(pub OwnerIdentity);

#[async_trait]
impl FromRequestParts<AppRegistry> for OwnerHeaders {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let owner_id = header_value(parts, "x-user-id").and_then(|v| v.parse::<UserId>().ok());
        Ok(Self(OwnerIdentity {
            owner_id,
            owner_role: header_value(parts, "x-user-role"),
            owner_email: header_value(parts, "x-user-email"),
            owner_name: header_value(parts, "x-user-name"),
        }))
    }
}

/// Shared-secret admin gate. Handlers taking this extractor reject callers
/// without the right `x-admin-key` before any work happens.
pub struct AdminKey;

#[async_trait]
impl FromRequestParts<AppRegistry> for AdminKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        match header_value(parts, "x-admin-key") {
            Some(key) if key == registry.admin_api_key() => Ok(Self),
            _ => Err(AppError::ForbiddenOperation("Admin access required".into())),
        }
    }
}
