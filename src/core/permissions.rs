//! Permessi a livello di oggetto
//!
//! I metodi sicuri (GET, HEAD, OPTIONS, TRACE) sono sempre consentiti.
//! Gli altri richiedono che il chiamante sia il proprietario dell'oggetto:
//! anonimo -> 401, profilo diverso -> 403.

use crate::core::AppError;
use crate::entities::{ProfileFeedItem, UserProfile};
use axum::http::Method;
use tracing::{debug, instrument, warn};

const NOT_AUTHENTICATED: &str = "Authentication credentials were not provided.";
const PERMISSION_DENIED: &str = "You do not have permission to perform this action.";

fn require_owner(
    method: &Method,
    caller: Option<&UserProfile>,
    owner_id: i64,
    is_owner: impl FnOnce(&UserProfile) -> bool,
) -> Result<(), AppError> {
    if method.is_safe() {
        return Ok(());
    }

    let caller = caller.ok_or_else(|| {
        warn!("Anonymous {} on object owned by {}", method, owner_id);
        AppError::unauthorized(NOT_AUTHENTICATED)
    })?;

    if !is_owner(caller) {
        warn!(
            "Profile {} attempted {} on object owned by {}",
            caller.id, method, owner_id
        );
        return Err(AppError::forbidden(PERMISSION_DENIED));
    }

    debug!("Ownership check passed for profile {}", caller.id);
    Ok(())
}

/// Un profilo può modificare o cancellare solo se stesso
#[instrument(skip(caller, profile), fields(profile_id = %profile.id))]
pub fn update_own_profile(
    method: &Method,
    caller: Option<&UserProfile>,
    profile: &UserProfile,
) -> Result<(), AppError> {
    require_owner(method, caller, profile.id, |caller| caller.id == profile.id)
}

/// Un profilo può modificare o cancellare solo i propri stati
#[instrument(skip(caller, item), fields(item_id = %item.id))]
pub fn post_own_status(
    method: &Method,
    caller: Option<&UserProfile>,
    item: &ProfileFeedItem,
) -> Result<(), AppError> {
    require_owner(method, caller, item.user_profile_id, |caller| {
        item.is_owned_by(caller.id)
    })
}
