//! Cursor-based pagination over listing calls.
//!
//! [`Paginator`] turns a page-fetch capability into a lazy, finite sequence
//! of records: it yields buffered records first and follows the continuation
//! cursor when the buffer drains. The sequence is restartable by constructing
//! a new paginator; no cursor survives the process.

use std::collections::VecDeque;
use std::sync::Arc;

use futures::future::BoxFuture;
use stevedore_core::{ImageRecord, RepositoryRecord};

use crate::client::ArtifactSource;
use crate::error::RegistryError;

/// One page of a listing response.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Records in this page, in provider order.
    pub items: Vec<T>,

    /// Continuation cursor for the next page; `None` or empty when the
    /// listing is exhausted.
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// Creates a page with the given records and continuation cursor.
    #[must_use]
    pub const fn new(items: Vec<T>, next_page_token: Option<String>) -> Self {
        Self {
            items,
            next_page_token,
        }
    }

    /// Creates a terminal page carrying no continuation cursor.
    #[must_use]
    pub const fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }
}

type PageFn<T> =
    Box<dyn FnMut(Option<String>) -> BoxFuture<'static, Result<Page<T>, RegistryError>> + Send>;

/// Lazy sequence of records behind a paginated listing call.
///
/// Each [`try_next`](Self::try_next) call may suspend on network I/O when a
/// fresh page is needed. A listing failure propagates to the caller and is
/// fatal for this traversal.
pub struct Paginator<T> {
    fetch: PageFn<T>,
    buffer: VecDeque<T>,
    next_token: Option<String>,
    exhausted: bool,
}

impl<T> Paginator<T> {
    /// Wraps a page-fetch capability into a paginator.
    ///
    /// The capability receives the continuation cursor of the previous page
    /// (`None` for the first call) and returns the next page.
    pub fn new<F>(fetch: F) -> Self
    where
        F: FnMut(Option<String>) -> BoxFuture<'static, Result<Page<T>, RegistryError>>
            + Send
            + 'static,
    {
        Self {
            fetch: Box::new(fetch),
            buffer: VecDeque::new(),
            next_token: None,
            exhausted: false,
        }
    }

    /// Yields the next record, fetching pages as needed.
    ///
    /// Returns `Ok(None)` once a page without a continuation cursor has been
    /// drained.
    ///
    /// # Errors
    ///
    /// Propagates any [`RegistryError`] from the underlying listing call.
    pub async fn try_next(&mut self) -> Result<Option<T>, RegistryError> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            if self.exhausted {
                return Ok(None);
            }

            let page = (self.fetch)(self.next_token.take()).await?;
            self.next_token = page.next_page_token.filter(|token| !token.is_empty());
            if self.next_token.is_none() {
                self.exhausted = true;
            }
            self.buffer.extend(page.items);
        }
    }

    /// Drains the remaining sequence into a vector.
    ///
    /// # Errors
    ///
    /// Propagates the first [`RegistryError`] from the underlying listing
    /// call.
    pub async fn try_collect(mut self) -> Result<Vec<T>, RegistryError> {
        let mut items = Vec::new();
        while let Some(item) = self.try_next().await? {
            items.push(item);
        }
        Ok(items)
    }
}

/// Lazily yields every repository under `(project, region)`.
pub fn repositories(
    source: Arc<dyn ArtifactSource>,
    project: impl Into<String>,
    region: impl Into<String>,
) -> Paginator<RepositoryRecord> {
    let project = project.into();
    let region = region.into();
    Paginator::new(move |token| {
        let source = Arc::clone(&source);
        let project = project.clone();
        let region = region.clone();
        Box::pin(async move { source.repository_page(&project, &region, token).await })
    })
}

/// Lazily yields every image under the given fully-qualified repository name.
pub fn images(
    source: Arc<dyn ArtifactSource>,
    repository: impl Into<String>,
) -> Paginator<ImageRecord> {
    let repository = repository.into();
    Paginator::new(move |token| {
        let source = Arc::clone(&source);
        let repository = repository.clone();
        Box::pin(async move { source.image_page(&repository, token).await })
    })
}
