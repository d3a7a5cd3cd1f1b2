use serde::{Deserialize, Serialize};

/// The entity handed down through controller, usecase and repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
}

impl Model {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}
