pub use self::errors::{ServiceError, ServiceResult};

pub mod catalog;
pub mod drafts;
pub mod errors;
pub mod map;
