//! # Local Storage
//!
//! Small on-device state that survives restarts:
//!
//! - `device_id` - anonymous installation identifier (UUID v4), generated once
//! - `profile.json` - the seller profile attached to new listings
//!
//! Both live in the configured data directory. Writes go through a temp file
//! and a rename so a crash never leaves a half-written profile.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shared::dto::SellerProfile;
use uuid::Uuid;

use crate::core::error::Result;

const DEVICE_ID_FILE: &str = "device_id";
const PROFILE_FILE: &str = "profile.json";

/// Anonymous per-installation identifier used as a pseudo user id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceIdentity(String);

impl DeviceIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fresh random identity.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for DeviceIdentity {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// File-backed store rooted at the data directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open (and create if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read the persisted device id, generating and persisting one on first
    /// run. A corrupt file is replaced.
    pub fn load_or_create_device_id(&self) -> Result<DeviceIdentity> {
        let path = self.dir.join(DEVICE_ID_FILE);

        match fs::read_to_string(&path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if Uuid::parse_str(trimmed).is_ok() {
                    return Ok(DeviceIdentity::from(trimmed));
                }
                tracing::warn!(path = %path.display(), "device id file is corrupt, regenerating");
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let identity = DeviceIdentity::generate();
        self.write_atomic(&path, identity.as_str().as_bytes())?;
        tracing::info!(device_id = %identity, "generated new device id");
        Ok(identity)
    }

    /// Load the seller profile, `None` if it was never saved.
    pub fn load_profile(&self) -> Result<Option<SellerProfile>> {
        let path = self.dir.join(PROFILE_FILE);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save_profile(&self, profile: &SellerProfile) -> Result<()> {
        let json = serde_json::to_vec_pretty(profile)?;
        self.write_atomic(&self.dir.join(PROFILE_FILE), &json)?;
        tracing::info!(dir = %self.dir.display(), "seller profile saved");
        Ok(())
    }

    fn write_atomic(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;

    #[test]
    fn test_device_id_is_generated_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();

        let first = store.load_or_create_device_id().unwrap();
        assert!(Uuid::parse_str(first.as_str()).is_ok());

        let reopened = LocalStore::open(dir.path()).unwrap();
        assert_eq!(reopened.load_or_create_device_id().unwrap(), first);
    }

    #[test]
    fn test_corrupt_device_id_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEVICE_ID_FILE), "not-a-uuid").unwrap();

        let store = LocalStore::open(dir.path()).unwrap();
        let identity = store.load_or_create_device_id().unwrap();
        assert_ne!(identity.as_str(), "not-a-uuid");
        assert_eq!(
            fs::read_to_string(dir.path().join(DEVICE_ID_FILE)).unwrap(),
            identity.as_str()
        );
    }

    #[test]
    fn test_profile_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("nested")).unwrap();
        assert_eq!(store.load_profile().unwrap(), None);

        let profile = SellerProfile {
            email: Some("asha@example.com".to_string()),
            upi_id: Some("asha@upi".to_string()),
            ..SellerProfile::named("Asha")
        };
        store.save_profile(&profile).unwrap();
        assert_eq!(store.load_profile().unwrap(), Some(profile));
    }

    #[test]
    fn test_corrupt_profile_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PROFILE_FILE), "{ nope").unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        assert!(matches!(store.load_profile(), Err(AppError::Storage(_))));
    }
}
