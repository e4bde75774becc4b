//! User operations
//!
//! CRUD actions against a [`UserStore`]. Each mutating operation checks
//! everything it needs before its single write, so a failed call leaves the
//! store untouched. Timestamps come in from the caller.

use crate::error::{Result, RosterError};
use crate::store::UserStore;
use crate::types::{CreateUser, UpdateUser, User, UserId};
use chrono::{DateTime, Utc};

/// All users in insertion order
pub fn list_users(store: &UserStore) -> &[User] {
    store.all()
}

/// Look up a single user
pub fn get_user<'a>(store: &'a UserStore, id: &UserId) -> Result<&'a User> {
    store.find_by_id(id).ok_or_else(|| RosterError::not_found(id))
}

/// Create a user from a validated request
///
/// Fails with [`RosterError::EmailTaken`] if any user already has the email.
pub fn create_user(store: &mut UserStore, input: CreateUser, now: DateTime<Utc>) -> Result<User> {
    if store.find_by(|u| u.email == input.email).is_some() {
        tracing::debug!(email = %input.email, "Rejected create: email already exists");
        return Err(RosterError::email_taken(input.email));
    }

    let user = User::new(input.name, input.email, now);
    store.append(user.clone());

    tracing::info!(user_id = %user.id, "Created user");
    Ok(user)
}

/// Apply a validated partial update
///
/// Keeps `id` and `created_at`, replaces supplied fields, and refreshes
/// `updated_at`. The new `updated_at` never precedes `created_at`.
pub fn update_user(
    store: &mut UserStore,
    id: &UserId,
    input: UpdateUser,
    now: DateTime<Utc>,
) -> Result<User> {
    let index = store.position(id).ok_or_else(|| RosterError::not_found(id))?;

    if let Some(email) = &input.email {
        if store.find_by(|u| &u.email == email && &u.id != id).is_some() {
            tracing::debug!(user_id = %id, email = %email, "Rejected update: email already exists");
            return Err(RosterError::email_taken(email.clone()));
        }
    }

    let mut updated = store.all()[index].clone();
    if let Some(name) = input.name {
        updated.name = name;
    }
    if let Some(email) = input.email {
        updated.email = email;
    }
    updated.updated_at = now.max(updated.created_at);

    store.replace_at(index, updated.clone());

    tracing::info!(user_id = %id, "Updated user");
    Ok(updated)
}

/// Remove a user, keeping the order of the others
pub fn delete_user(store: &mut UserStore, id: &UserId) -> Result<()> {
    let index = store.position(id).ok_or_else(|| RosterError::not_found(id))?;
    store.remove_at(index);

    tracing::info!(user_id = %id, "Deleted user");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn create(store: &mut UserStore, name: &str, email: &str) -> User {
        create_user(
            store,
            CreateUser {
                name: name.to_string(),
                email: email.to_string(),
            },
            t0(),
        )
        .unwrap()
    }

    #[test]
    fn test_list_on_empty_store() {
        let store = UserStore::new();
        assert!(list_users(&store).is_empty());
    }

    #[test]
    fn test_create_then_get() {
        let mut store = UserStore::new();
        let ann = create(&mut store, "Ann", "ann@x.com");

        assert_eq!(ann.created_at, t0());
        assert_eq!(ann.updated_at, t0());
        assert_eq!(get_user(&store, &ann.id).unwrap(), &ann);
        assert_eq!(list_users(&store), [ann]);
    }

    #[test]
    fn test_get_unknown_id() {
        let store = UserStore::new();
        let id = UserId::new("zzz");
        assert_eq!(get_user(&store, &id), Err(RosterError::UserNotFound(id)));
    }

    #[test]
    fn test_create_rejects_duplicate_email() {
        let mut store = UserStore::new();
        create(&mut store, "Ann", "ann@x.com");

        let result = create_user(
            &mut store,
            CreateUser {
                name: "Bob".to_string(),
                email: "ann@x.com".to_string(),
            },
            t0(),
        );

        assert_eq!(result, Err(RosterError::EmailTaken("ann@x.com".to_string())));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_email_comparison_is_exact() {
        let mut store = UserStore::new();
        create(&mut store, "Ann", "ann@x.com");
        create(&mut store, "Ann", "Ann@x.com");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_replaces_supplied_fields_only() {
        let mut store = UserStore::new();
        let ann = create(&mut store, "Ann", "ann@x.com");
        let later = t0() + Duration::minutes(5);

        let updated = update_user(
            &mut store,
            &ann.id,
            UpdateUser {
                name: None,
                email: Some("bob@x.com".to_string()),
            },
            later,
        )
        .unwrap();

        assert_eq!(updated.id, ann.id);
        assert_eq!(updated.name, "Ann");
        assert_eq!(updated.email, "bob@x.com");
        assert_eq!(updated.created_at, ann.created_at);
        assert_eq!(updated.updated_at, later);
        assert_eq!(get_user(&store, &ann.id).unwrap(), &updated);
    }

    #[test]
    fn test_update_keeps_position() {
        let mut store = UserStore::new();
        create(&mut store, "Ann", "ann@x.com");
        let bob = create(&mut store, "Bob", "bob@x.com");
        create(&mut store, "Cid", "cid@x.com");

        update_user(
            &mut store,
            &bob.id,
            UpdateUser {
                name: Some("Robert".to_string()),
                email: None,
            },
            t0(),
        )
        .unwrap();

        let names: Vec<&str> = store.all().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Ann", "Robert", "Cid"]);
    }

    #[test]
    fn test_update_allows_keeping_own_email() {
        let mut store = UserStore::new();
        let ann = create(&mut store, "Ann", "ann@x.com");

        let updated = update_user(
            &mut store,
            &ann.id,
            UpdateUser {
                name: Some("Annie".to_string()),
                email: Some("ann@x.com".to_string()),
            },
            t0(),
        )
        .unwrap();

        assert_eq!(updated.email, "ann@x.com");
        assert_eq!(updated.name, "Annie");
    }

    #[test]
    fn test_update_rejects_email_of_other_user() {
        let mut store = UserStore::new();
        let ann = create(&mut store, "Ann", "ann@x.com");
        create(&mut store, "Bob", "bob@x.com");
        let before = store.all().to_vec();

        let result = update_user(
            &mut store,
            &ann.id,
            UpdateUser {
                name: Some("Annie".to_string()),
                email: Some("bob@x.com".to_string()),
            },
            t0(),
        );

        assert_eq!(result, Err(RosterError::EmailTaken("bob@x.com".to_string())));
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = UserStore::new();
        let id = UserId::new("zzz");

        let result = update_user(
            &mut store,
            &id,
            UpdateUser {
                name: Some("Nobody".to_string()),
                email: None,
            },
            t0(),
        );

        assert_eq!(result, Err(RosterError::UserNotFound(id)));
    }

    #[test]
    fn test_update_clamps_backwards_clock() {
        let mut store = UserStore::new();
        let ann = create(&mut store, "Ann", "ann@x.com");

        let updated = update_user(
            &mut store,
            &ann.id,
            UpdateUser {
                name: Some("Annie".to_string()),
                email: None,
            },
            t0() - Duration::hours(1),
        )
        .unwrap();

        assert_eq!(updated.updated_at, updated.created_at);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let mut store = UserStore::new();
        let ann = create(&mut store, "Ann", "ann@x.com");
        let bob = create(&mut store, "Bob", "bob@x.com");
        let cid = create(&mut store, "Cid", "cid@x.com");

        delete_user(&mut store, &bob.id).unwrap();

        assert_eq!(list_users(&store), [ann, cid]);
        assert!(get_user(&store, &bob.id).is_err());
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut store = UserStore::new();
        create(&mut store, "Ann", "ann@x.com");
        let id = UserId::new("zzz");

        assert_eq!(
            delete_user(&mut store, &id),
            Err(RosterError::UserNotFound(id))
        );
        assert_eq!(store.len(), 1);
    }
}
