// Controller layer: where a transport adapter would turn external input
// into a `Model`. Depends on the usecase capability only.

use crate::domain::{Context, Model};
use crate::usecase::Usecase;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait Controller: Send + Sync {
    async fn perform(&self, ctx: &Context, model: &Model) -> Result<()>;
}

#[async_trait]
impl<T: Controller + ?Sized> Controller for Arc<T> {
    async fn perform(&self, ctx: &Context, model: &Model) -> Result<()> {
        (**self).perform(ctx, model).await
    }
}

#[async_trait]
impl<T: Controller + ?Sized> Controller for Box<T> {
    async fn perform(&self, ctx: &Context, model: &Model) -> Result<()> {
        (**self).perform(ctx, model).await
    }
}

pub struct DelegatingController<U: Usecase> {
    usecase: U,
}

impl<U: Usecase> DelegatingController<U> {
    pub fn new(usecase: U) -> Self {
        Self { usecase }
    }
}

#[async_trait]
impl<U: Usecase> Controller for DelegatingController<U> {
    async fn perform(&self, ctx: &Context, model: &Model) -> Result<()> {
        self.usecase.perform(ctx, model).await
    }
}
