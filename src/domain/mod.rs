// Domain layer: the entity and the request context shared by every layer.

pub mod context;
pub mod model;

pub use context::Context;
pub use model::Model;
