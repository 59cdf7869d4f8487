pub mod page_error;

pub use page_error::PageError;

pub type Result<T> = std::result::Result<T, PageError>;
