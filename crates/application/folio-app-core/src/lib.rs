pub mod app;
pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod kernel;
pub mod viewmodel;

pub use app::{build_application, FolioApplication};
pub use app_core::*;
pub use domain::{parse_quantity_input, AppState, DetailPhase, RequestToken};
pub use kernel::{AppKernel, Waker};
pub use viewmodel::*;
