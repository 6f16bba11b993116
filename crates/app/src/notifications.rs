//! Notifications
//!
//! Error, success and loading state shared by everything that talks to the
//! catalog on behalf of one user session. Created once at the application
//! root and cloned into consumers.

use std::{
    fmt::Display,
    future::Future,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tracing::debug;

#[derive(Debug, Default)]
struct NotificationState {
    error: Option<String>,
    success: Option<String>,
    in_flight: usize,
}

/// Shared notification context.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    state: Arc<RwLock<NotificationState>>,
}

impl Notifications {
    /// Create an empty context: no messages, nothing loading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error message, replacing any previous one.
    pub fn set_error(&self, message: impl Into<String>) {
        self.write().error = Some(message.into());
    }

    /// Forget the current error message.
    pub fn clear_error(&self) {
        self.write().error = None;
    }

    /// Most recent error message, if any.
    #[must_use]
    pub fn latest_error(&self) -> Option<String> {
        self.read().error.clone()
    }

    /// Remove and return the most recent error message.
    pub fn take_error(&self) -> Option<String> {
        self.write().error.take()
    }

    /// Most recent success message, if any.
    #[must_use]
    pub fn latest_success(&self) -> Option<String> {
        self.read().success.clone()
    }

    /// Whether any tracked operation is still running.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().in_flight > 0
    }

    /// Run a query, recording its failure.
    ///
    /// The previous error is cleared when the operation starts. On failure the
    /// error's message is recorded and `None` is returned.
    pub async fn track<T, E, F>(&self, operation: F) -> Option<T>
    where
        E: Display,
        F: Future<Output = Result<T, E>>,
    {
        let _loading = self.begin();

        match operation.await {
            Ok(value) => Some(value),
            Err(error) => {
                self.set_error(error.to_string());

                None
            }
        }
    }

    /// Run a mutation, recording its failure or `success_message`.
    pub async fn track_mutation<T, E, F>(
        &self,
        operation: F,
        success_message: impl Into<String>,
    ) -> Option<T>
    where
        E: Display,
        F: Future<Output = Result<T, E>>,
    {
        let value = self.track(operation).await?;

        self.write().success = Some(success_message.into());

        Some(value)
    }

    fn begin(&self) -> Loading<'_> {
        let mut state = self.write();

        state.error = None;
        state.success = None;
        state.in_flight += 1;

        debug!(in_flight = state.in_flight, "operation started");

        Loading {
            notifications: self,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, NotificationState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, NotificationState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the loading flag when a tracked operation ends, however it ends.
struct Loading<'a> {
    notifications: &'a Notifications,
}

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        let mut state = self.notifications.write();

        state.in_flight = state.in_flight.saturating_sub(1);
    }
}
