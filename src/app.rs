// Composition root. The only module that names concrete layer types.

use crate::controller::{Controller, DelegatingController};
use crate::domain::{Context, Model};
use crate::repository::NoopRepository;
use crate::usecase::DelegatingUsecase;
use crate::utils::error::Result;

/// Id of the model the binary sends through the chain.
pub const DEFAULT_MODEL_ID: i64 = 1;

/// Builds repository, usecase and controller and injects each into the
/// layer above.
pub fn wire() -> impl Controller {
    let repository = NoopRepository::new();
    let usecase = DelegatingUsecase::new(repository);
    DelegatingController::new(usecase)
}

/// Runs one call through `controller`, logging a failure at error level.
///
/// The error is returned as produced by the lowest layer.
pub async fn run_once<C: Controller + ?Sized>(
    ctx: &Context,
    controller: &C,
    model: Model,
) -> Result<()> {
    let result = controller.perform(ctx, &model).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Failed to execute usecase function");
    }
    result
}
