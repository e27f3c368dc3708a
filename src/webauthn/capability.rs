//! # Capability Probe
//!
//! Checks whether the host has a short-range wireless (bluetooth) adapter,
//! which hybrid/phone-as-authenticator flows rely on. The result is advisory:
//! it is shown to the user and logged, and never gates a ceremony.

use async_trait::async_trait;
use std::path::PathBuf;

/// Warning surfaced when the probe comes back negative
pub const BLUETOOTH_UNAVAILABLE: &str = "Bluetooth not available on this device.";

#[async_trait]
pub trait CapabilityProbe: Send + Sync {
    async fn is_available(&self) -> bool;
}

/// Looks for adapter entries under the sysfs bluetooth class directory
#[derive(Debug, Clone)]
pub struct BluetoothProbe {
    sysfs_path: PathBuf,
}

impl BluetoothProbe {
    pub fn new(sysfs_path: impl Into<PathBuf>) -> Self {
        Self {
            sysfs_path: sysfs_path.into(),
        }
    }
}

#[async_trait]
impl CapabilityProbe for BluetoothProbe {
    async fn is_available(&self) -> bool {
        let mut entries = match tokio::fs::read_dir(&self.sysfs_path).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Bluetooth probe could not read {}: {}", self.sysfs_path.display(), e);
                return false;
            }
        };

        matches!(entries.next_entry().await, Ok(Some(_)))
    }
}
