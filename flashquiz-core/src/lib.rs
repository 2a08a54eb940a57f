pub mod editor;
pub mod errors;
pub mod models;
pub mod repo;
pub mod result;
pub mod service;
pub mod session;
pub mod viewer;

pub use editor::*;
pub use errors::*;
pub use models::*;
pub use repo::*;
pub use result::*;
pub use service::*;
pub use session::*;
pub use viewer::*;
