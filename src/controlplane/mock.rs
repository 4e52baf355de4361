//! controlplane::mock
//!
//! In-memory deleter for deterministic testing.
//!
//! # Example
//!
//! ```
//! use up_cli::controlplane::mock::MockDeleter;
//! use up_cli::controlplane::ControlPlaneDeleter;
//! use up_cli::core::profile::NamespacedName;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let deleter = MockDeleter::with_existing([NamespacedName::new("team-a", "ctp-1")]);
//!
//! deleter.delete(&NamespacedName::new("team-a", "ctp-1")).await.unwrap();
//! assert!(deleter.delete(&NamespacedName::new("team-a", "ctp-1")).await.unwrap_err().is_not_found());
//! # });
//! ```

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{ControlPlaneDeleter, DeleteError};
use crate::core::profile::NamespacedName;
use crate::sdk::SdkError;

/// Mock deleter.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockDeleter {
    inner: Arc<Mutex<MockDeleterInner>>,
}

#[derive(Debug, Default)]
struct MockDeleterInner {
    existing: HashSet<(String, String)>,
    /// Groups are ignored, as on the SaaS API
    ignore_group: bool,
    fail_on: Option<SdkError>,
    operations: Vec<NamespacedName>,
}

impl MockDeleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock holding the given control planes.
    pub fn with_existing(existing: impl IntoIterator<Item = NamespacedName>) -> Self {
        let mock = Self::new();
        {
            let mut inner = mock.lock();
            inner.existing = existing
                .into_iter()
                .map(|n| (n.namespace, n.name))
                .collect();
        }
        mock
    }

    /// Match control planes by name only.
    pub fn ignoring_group(self) -> Self {
        self.lock().ignore_group = true;
        self
    }

    /// Fail every delete with `error`.
    pub fn fail_with(self, error: SdkError) -> Self {
        self.lock().fail_on = Some(error);
        self
    }

    /// Targets passed to `delete`, in call order.
    pub fn operations(&self) -> Vec<NamespacedName> {
        self.lock().operations.clone()
    }

    /// Whether a control plane still exists.
    pub fn contains(&self, target: &NamespacedName) -> bool {
        let inner = self.lock();
        inner.existing.contains(&inner.key(target))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockDeleterInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MockDeleterInner {
    fn key(&self, target: &NamespacedName) -> (String, String) {
        if self.ignore_group {
            (String::new(), target.name.clone())
        } else {
            (target.namespace.clone(), target.name.clone())
        }
    }
}

#[async_trait]
impl ControlPlaneDeleter for MockDeleter {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn delete(&self, target: &NamespacedName) -> Result<(), DeleteError> {
        let mut inner = self.lock();
        inner.operations.push(target.clone());

        if let Some(err) = &inner.fail_on {
            return Err(DeleteError::Sdk(err.clone()));
        }

        let key = inner.key(target);
        if inner.existing.remove(&key) {
            Ok(())
        } else {
            Err(DeleteError::NotFound(target.name.clone()))
        }
    }
}
