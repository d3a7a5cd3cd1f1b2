pub mod app;
pub mod config;
pub mod controller;
pub mod domain;
pub mod repository;
pub mod usecase;
pub mod utils;

pub use config::Config;
pub use controller::{Controller, DelegatingController};
pub use domain::{Context, Model};
pub use repository::{NoopRepository, Repository};
pub use usecase::{DelegatingUsecase, Usecase};
pub use utils::error::{AppError, Result};
