//! BoxReplyBackend -- object-safe dynamic dispatch wrapper for ReplyBackend.
//!
//! 1. Define an object-safe `ReplyBackendDyn` trait with boxed futures
//! 2. Blanket-impl `ReplyBackendDyn` for all `T: ReplyBackend`
//! 3. `BoxReplyBackend` wraps `Box<dyn ReplyBackendDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use chatwidget_types::chat::Turn;
use chatwidget_types::error::RemoteError;

use super::backend::ReplyBackend;

/// Object-safe version of [`ReplyBackend`] with boxed futures.
pub trait ReplyBackendDyn: Send + Sync {
    fn name(&self) -> &str;

    fn fetch_reply_boxed<'a>(
        &'a self,
        message: &'a str,
        conversation: &'a [Turn],
    ) -> Pin<Box<dyn Future<Output = Result<String, RemoteError>> + Send + 'a>>;
}

impl<T: ReplyBackend> ReplyBackendDyn for T {
    fn name(&self) -> &str {
        ReplyBackend::name(self)
    }

    fn fetch_reply_boxed<'a>(
        &'a self,
        message: &'a str,
        conversation: &'a [Turn],
    ) -> Pin<Box<dyn Future<Output = Result<String, RemoteError>> + Send + 'a>> {
        Box::pin(self.fetch_reply(message, conversation))
    }
}

/// Type-erased reply backend.
///
/// Lets the binary pick the HTTP backend at runtime while tests inject
/// in-memory fakes through the same resolver API.
pub struct BoxReplyBackend {
    inner: Box<dyn ReplyBackendDyn + Send + Sync>,
}

impl BoxReplyBackend {
    pub fn new<T: ReplyBackend + 'static>(backend: T) -> Self {
        Self {
            inner: Box::new(backend),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn fetch_reply(
        &self,
        message: &str,
        conversation: &[Turn],
    ) -> Result<String, RemoteError> {
        self.inner.fetch_reply_boxed(message, conversation).await
    }
}

impl std::fmt::Debug for BoxReplyBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxReplyBackend")
            .field("name", &self.name())
            .finish()
    }
}
