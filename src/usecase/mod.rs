// Usecase layer: business rules live here. Depends on the repository
// capability only.

use crate::domain::{Context, Model};
use crate::repository::Repository;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait Usecase: Send + Sync {
    async fn perform(&self, ctx: &Context, model: &Model) -> Result<()>;
}

#[async_trait]
impl<T: Usecase + ?Sized> Usecase for Arc<T> {
    async fn perform(&self, ctx: &Context, model: &Model) -> Result<()> {
        (**self).perform(ctx, model).await
    }
}

#[async_trait]
impl<T: Usecase + ?Sized> Usecase for Box<T> {
    async fn perform(&self, ctx: &Context, model: &Model) -> Result<()> {
        (**self).perform(ctx, model).await
    }
}

/// Forwards every call to the injected repository and returns its result
/// untouched.
pub struct DelegatingUsecase<R: Repository> {
    repository: R,
}

impl<R: Repository> DelegatingUsecase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: Repository> Usecase for DelegatingUsecase<R> {
    async fn perform(&self, ctx: &Context, model: &Model) -> Result<()> {
        self.repository.perform(ctx, model).await
    }
}
