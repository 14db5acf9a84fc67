//! Seams to the outside world: where submissions are written and where the
//! user is sent afterwards.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use chrono::Utc;

use crate::error::SinkError;
use crate::record::{stamp_created_at, Document};

/// A boxed future for async sink operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// An append-only document store.
///
/// # Example
///
/// ```ignore
/// struct StdoutSink;
///
/// impl SubmissionSink for StdoutSink {
///     fn write<'a>(
///         &'a self,
///         collection: &'a str,
///         document: Document,
///     ) -> BoxFuture<'a, Result<(), SinkError>> {
///         Box::pin(async move {
///             println!("{collection}: {}", serde_json::to_string(&document)?);
///             Ok(())
///         })
///     }
/// }
/// ```
pub trait SubmissionSink: Send + Sync {
    /// Appends one immutable document to the named collection.
    ///
    /// Implementations stamp `createdAt` from their own clock.
    fn write<'a>(
        &'a self,
        collection: &'a str,
        document: Document,
    ) -> BoxFuture<'a, Result<(), SinkError>>;
}

/// Moves the user to another view.
pub trait Navigator: Send + Sync {
    /// Navigates to `path`.
    fn navigate_to(&self, path: &str);
}

/// A document held by [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    /// Collection the document was appended to.
    pub collection: String,
    /// The document, with `createdAt` stamped.
    pub document: Document,
}

/// In-process append-only sink.
///
/// Counts every write attempt, including rejected ones, and can be told to
/// reject writes to exercise failure paths.
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Mutex<Vec<StoredDocument>>,
    attempts: AtomicUsize,
    failing: AtomicBool,
}

impl MemorySink {
    /// Creates an empty sink that accepts writes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that rejects every write.
    pub fn failing() -> Self {
        let sink = Self::new();
        sink.set_failing(true);
        sink
    }

    /// Switches write rejection on or off.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Returns the number of write attempts so far.
    pub fn write_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Returns all stored documents in write order.
    pub fn stored(&self) -> Vec<StoredDocument> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the documents of one collection in write order.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|stored| stored.collection == collection)
            .map(|stored| stored.document.clone())
            .collect()
    }
}

impl SubmissionSink for MemorySink {
    fn write<'a>(
        &'a self,
        collection: &'a str,
        mut document: Document,
    ) -> BoxFuture<'a, Result<(), SinkError>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let result = if self.failing.load(Ordering::SeqCst) {
            Err(SinkError::Unavailable("memory sink is rejecting writes".to_string()))
        } else {
            stamp_created_at(&mut document, Utc::now());
            self.documents
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(StoredDocument {
                    collection: collection.to_string(),
                    document,
                });
            Ok(())
        };
        Box::pin(std::future::ready(result))
    }
}

/// Navigator that remembers every path it was sent to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Creates a navigator with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every path navigated to, oldest first.
    pub fn paths(&self) -> Vec<String> {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent path.
    pub fn last(&self) -> Option<String> {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}
