//! Fragment batches.

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;

use crate::error::Result;
use crate::fragment::Fragment;

/// One entry of the composer's sequence: fragments that are already
/// known, or a deferred computation that will yield them.
pub enum Batch {
    Resolved(Vec<Fragment>),
    Pending(BoxFuture<'static, Result<Vec<Fragment>>>),
}

impl Batch {
    /// Wrap a future as a pending batch.
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Result<Vec<Fragment>>> + Send + 'static,
    {
        Batch::Pending(Box::pin(future))
    }

    /// Await the batch's fragments.
    pub async fn resolve(self) -> Result<Vec<Fragment>> {
        match self {
            Batch::Resolved(fragments) => Ok(fragments),
            Batch::Pending(future) => future.await,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Batch::Pending(_))
    }
}

impl From<Vec<Fragment>> for Batch {
    fn from(fragments: Vec<Fragment>) -> Self {
        Batch::Resolved(fragments)
    }
}

impl From<Fragment> for Batch {
    fn from(fragment: Fragment) -> Self {
        Batch::Resolved(vec![fragment])
    }
}

impl fmt::Debug for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Batch::Resolved(fragments) => f
                .debug_tuple("Resolved")
                .field(&fragments.iter().map(|c| &c.name).collect::<Vec<_>>())
                .finish(),
            Batch::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}
