pub mod body;
pub mod client;
pub mod clinic;
pub mod config;
pub mod error;
pub mod field_view;
pub mod news;
pub mod query;
pub mod record;
pub mod resolve;
pub mod value;

pub use client::CmsClient;
pub use config::CmsClientConfig;
pub use error::{CmsError, ErrorKind};
pub use query::CollectionQuery;
pub use record::{Collection, RawRecord};
pub use value::{Excerpt, ImageRef, RichHtml};
