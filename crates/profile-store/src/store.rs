use crate::error::StoreError;
use core_types::UserProfile;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A partial profile edit: only the set fields are overlaid onto the stored
/// profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub age: Option<u32>,
    pub retirement_age: Option<u32>,
    pub annual_income: Option<Decimal>,
    pub current_savings: Option<Decimal>,
    pub monthly_contribution: Option<Decimal>,
    pub safe_withdrawal_rate: Option<Decimal>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    fn apply(&self, profile: &mut UserProfile) {
        if let Some(age) = self.age {
            profile.age = age;
        }
        if let Some(retirement_age) = self.retirement_age {
            profile.retirement_age = retirement_age;
        }
        if let Some(annual_income) = self.annual_income {
            profile.annual_income = annual_income;
        }
        if let Some(current_savings) = self.current_savings {
            profile.current_savings = current_savings;
        }
        if let Some(monthly_contribution) = self.monthly_contribution {
            profile.monthly_contribution = monthly_contribution;
        }
        if let Some(safe_withdrawal_rate) = self.safe_withdrawal_rate {
            profile.safe_withdrawal_rate = safe_withdrawal_rate;
        }
    }
}

/// The on-device store for the single user profile.
///
/// The profile lives in one JSON file. A missing file is not an error: loading
/// yields the default profile.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Points the store at a profile file. No IO happens until `load`/`save`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored profile, or the default if none has been saved yet.
    pub fn load(&self) -> Result<UserProfile, StoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no profile file, using defaults");
            return Ok(UserProfile::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        let profile = serde_json::from_str(&contents)?;
        Ok(profile)
    }

    /// Validates and writes the profile, creating parent directories as needed.
    pub fn save(&self, profile: &UserProfile) -> Result<(), StoreError> {
        profile.validate()?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, contents)?;
        tracing::debug!(path = %self.path.display(), "profile saved");
        Ok(())
    }

    /// Overlays a partial edit onto the stored profile and writes it back.
    /// Returns the resulting profile.
    pub fn update(&self, update: &ProfileUpdate) -> Result<UserProfile, StoreError> {
        let mut profile = self.load()?;
        update.apply(&mut profile);
        self.save(&profile)?;
        Ok(profile)
    }

    /// Restores the default profile, removing any stored state.
    pub fn reset(&self) -> Result<UserProfile, StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!(path = %self.path.display(), "profile reset");
        }
        Ok(UserProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ProfileStore {
        ProfileStore::open(dir.path().join("profile.json"))
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().unwrap(), UserProfile::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let profile = UserProfile {
            age: 42,
            current_savings: dec!(123456.78),
            ..UserProfile::default()
        };
        store.save(&profile).unwrap();
        assert_eq!(store.load().unwrap(), profile);
    }

    #[test]
    fn update_overlays_only_set_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let updated = store
            .update(&ProfileUpdate {
                annual_income: Some(dec!(85000)),
                ..ProfileUpdate::default()
            })
            .unwrap();
        assert_eq!(updated.annual_income, dec!(85000));
        // Everything else stays at the default.
        assert_eq!(updated.age, 30);
        assert_eq!(updated.monthly_contribution, dec!(500));
        assert_eq!(store.load().unwrap(), updated);
    }

    #[test]
    fn update_rejects_invalid_result() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let result = store.update(&ProfileUpdate {
            age: Some(70),
            // Default retirement age is 65: now in the past.
            ..ProfileUpdate::default()
        });
        assert!(matches!(result, Err(StoreError::InvalidProfile(_))));
        // The bad edit must not have been persisted.
        assert_eq!(store.load().unwrap(), UserProfile::default());
    }

    #[test]
    fn reset_restores_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .update(&ProfileUpdate {
                age: Some(50),
                ..ProfileUpdate::default()
            })
            .unwrap();
        assert_eq!(store.reset().unwrap(), UserProfile::default());
        assert_eq!(store.load().unwrap(), UserProfile::default());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::open(dir.path().join("nested/state/profile.json"));
        store.save(&UserProfile::default()).unwrap();
        assert!(store.path().exists());
    }
}
