//! Profile use-case service.
//!
//! # Responsibility
//! - Load the singular profile, seeding the sample profile on first read.
//! - Flip the notifications preference and persist the result.
//!
//! # Invariants
//! - Toggling changes `preferences.notifications_enabled` and nothing else.

use crate::model::profile::UserProfile;
use crate::seed;
use crate::store::{DataStore, StoreResult};

/// Profile service facade over store implementations.
pub struct ProfileService<S: DataStore> {
    store: S,
}

impl<S: DataStore> ProfileService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the profile, writing the sample profile first if none is
    /// stored.
    pub fn load_profile(&self) -> StoreResult<UserProfile> {
        if let Some(profile) = self.store.get_user_profile()? {
            return Ok(profile);
        }

        let seeded = seed::sample_profile();
        self.store.save_user_profile(&seeded)?;
        Ok(seeded)
    }

    /// Flips the notifications preference and persists the updated profile.
    pub fn toggle_notifications(&self) -> StoreResult<UserProfile> {
        let mut profile = self.load_profile()?;
        profile.toggle_notifications();
        self.store.save_user_profile(&profile)?;
        Ok(profile)
    }
}
