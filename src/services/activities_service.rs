use serde::Serialize;
use tracing::{info, warn};

use crate::database::ActivityDirectory;
use crate::error::Result;
use crate::models::Catalog;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Confirmation {
    pub message: String,
}

pub async fn list_activities(directory: &ActivityDirectory) -> Catalog {
    directory.snapshot().await
}

/// Sign `email` up for `activity_name`. No format check is done on the email.
pub async fn sign_up(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation> {
    if let Err(e) = directory.add_participant(activity_name, email).await {
        warn!(activity = %e.activity(), email = ?e.email(), error = %e, "signup_rejected");
        return Err(e);
    }

    info!(activity = %activity_name, email = %email, "signup_ok");
    Ok(Confirmation {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

pub async fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation> {
    if let Err(e) = directory.remove_participant(activity_name, email).await {
        warn!(activity = %e.activity(), email = ?e.email(), error = %e, "unregister_rejected");
        return Err(e);
    }

    info!(activity = %activity_name, email = %email, "unregister_ok");
    Ok(Confirmation {
        message: format!("Unregistered {} from {}", email, activity_name),
    })
}
