use tokio::sync::RwLock;

use crate::database::seed_catalog;
use crate::error::{DirectoryError, Result};
use crate::models::{Activity, Catalog};

/// Process-local activity store.
///
/// One directory-wide lock guards the catalog. Mutations hold the write lock
/// across the whole lookup, check and update, so two concurrent signups for the
/// same email cannot both pass the duplicate check.
#[derive(Debug)]
pub struct ActivityDirectory {
    catalog: RwLock<Catalog>,
}

impl ActivityDirectory {
    pub fn new(activities: Vec<Activity>) -> Self {
        let mut deduped: Vec<Activity> = Vec::with_capacity(activities.len());
        for activity in activities {
            if deduped.iter().any(|a| a.name == activity.name) {
                tracing::warn!(activity = %activity.name, "duplicate activity name ignored");
                continue;
            }
            deduped.push(activity);
        }
        Self {
            catalog: RwLock::new(Catalog {
                activities: deduped,
            }),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_catalog::default_activities())
    }

    pub async fn snapshot(&self) -> Catalog {
        self.catalog.read().await.clone()
    }

    pub async fn add_participant(&self, activity_name: &str, email: &str) -> Result<()> {
        let mut catalog = self.catalog.write().await;
        let activity = find_mut(&mut catalog, activity_name)?;

        if activity.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    pub async fn remove_participant(&self, activity_name: &str, email: &str) -> Result<()> {
        let mut catalog = self.catalog.write().await;
        let activity = find_mut(&mut catalog, activity_name)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::ParticipantNotFound {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        };

        activity.participants.remove(pos);
        Ok(())
    }
}

impl Default for ActivityDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

fn find_mut<'a>(catalog: &'a mut Catalog, activity_name: &str) -> Result<&'a mut Activity> {
    catalog
        .activities
        .iter_mut()
        .find(|a| a.name == activity_name)
        .ok_or_else(|| DirectoryError::ActivityNotFound {
            activity: activity_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(catalog: &Catalog, name: &str) -> Vec<String> {
        catalog.get(name).unwrap().participants.clone()
    }

    #[tokio::test]
    async fn seeded_directory_has_nine_activities_in_order() {
        let dir = ActivityDirectory::seeded();
        let catalog = dir.snapshot().await;

        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.names().next(), Some("Chess Club"));
        assert_eq!(catalog.names().last(), Some("Math Club"));
        for activity in &catalog.activities {
            assert_eq!(activity.participants.len(), 2);
        }
    }

    #[tokio::test]
    async fn duplicate_names_keep_first_entry() {
        let dir = ActivityDirectory::new(vec![
            Activity::new("Chess Club", "first", "Mondays", 10, &[]),
            Activity::new("Chess Club", "second", "Tuesdays", 5, &[]),
        ]);
        let catalog = dir.snapshot().await;

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Chess Club").unwrap().description, "first");
    }

    #[tokio::test]
    async fn add_then_remove_restores_roster() {
        let dir = ActivityDirectory::seeded();
        let before = roster(&dir.snapshot().await, "Chess Club");

        dir.add_participant("Chess Club", "x@example.com").await.unwrap();
        let during = roster(&dir.snapshot().await, "Chess Club");
        assert_eq!(during.len(), before.len() + 1);
        assert_eq!(during.last().map(String::as_str), Some("x@example.com"));

        dir.remove_participant("Chess Club", "x@example.com")
            .await
            .unwrap();
        assert_eq!(roster(&dir.snapshot().await, "Chess Club"), before);
    }

    #[tokio::test]
    async fn remove_keeps_order_of_remaining_entries() {
        let dir = ActivityDirectory::new(vec![Activity::new(
            "Art Club",
            "Painting",
            "Wednesdays",
            3,
            &["a@x.edu", "b@x.edu", "c@x.edu"],
        )]);

        dir.remove_participant("Art Club", "b@x.edu").await.unwrap();
        assert_eq!(
            roster(&dir.snapshot().await, "Art Club"),
            vec!["a@x.edu".to_string(), "c@x.edu".to_string()]
        );
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected_without_mutation() {
        let dir = ActivityDirectory::seeded();
        let err = dir
            .add_participant("Chess Club", "michael@mergington.edu")
            .await
            .unwrap_err();

        assert!(matches!(err, DirectoryError::AlreadySignedUp { .. }));
        assert_eq!(roster(&dir.snapshot().await, "Chess Club").len(), 2);
    }

    #[tokio::test]
    async fn capacity_is_not_enforced() {
        let dir = ActivityDirectory::new(vec![Activity::new(
            "Tiny Club",
            "Small",
            "Never",
            1,
            &["a@x.edu"],
        )]);

        dir.add_participant("Tiny Club", "b@x.edu").await.unwrap();
        assert_eq!(roster(&dir.snapshot().await, "Tiny Club").len(), 2);
    }

    #[tokio::test]
    async fn unknown_activity_is_not_found() {
        let dir = ActivityDirectory::seeded();
        let before = dir.snapshot().await;

        let add = dir.add_participant("Unknown Club", "x@example.com").await;
        let remove = dir.remove_participant("Unknown Club", "x@example.com").await;

        assert!(matches!(add, Err(DirectoryError::ActivityNotFound { .. })));
        assert!(matches!(remove, Err(DirectoryError::ActivityNotFound { .. })));
        assert_eq!(dir.snapshot().await, before);
    }
}
