// Repository layer: the leaf capability. Knows only the domain types.

use crate::domain::{Context, Model};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Performs the operation on a `Model` against the backing store.
///
/// Implementations fail with their own `AppError` when the underlying
/// operation cannot complete.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn perform(&self, ctx: &Context, model: &Model) -> Result<()>;
}

#[async_trait]
impl<T: Repository + ?Sized> Repository for Arc<T> {
    async fn perform(&self, ctx: &Context, model: &Model) -> Result<()> {
        (**self).perform(ctx, model).await
    }
}

#[async_trait]
impl<T: Repository + ?Sized> Repository for Box<T> {
    async fn perform(&self, ctx: &Context, model: &Model) -> Result<()> {
        (**self).perform(ctx, model).await
    }
}

/// Stateless repository with no backing store. Always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRepository;

impl NoopRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Repository for NoopRepository {
    async fn perform(&self, _ctx: &Context, _model: &Model) -> Result<()> {
        Ok(())
    }
}
