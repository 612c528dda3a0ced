pub mod auth_service;
pub mod catalog_service;
pub mod quiz_loader;
pub mod result_presenter;

pub use auth_service::AuthService;
pub use catalog_service::{slice_page, CatalogService};
pub use quiz_loader::{LoadedTest, QuizLoader};
pub use result_presenter::ResultPresenter;
