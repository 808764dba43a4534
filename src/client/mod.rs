pub mod fetcher;
pub mod normalize;
pub mod pagination;
pub mod source;

pub use fetcher::{ApiRequest, Fetcher, HttpFetcher, Method, RequestOptions};
pub use pagination::{to_connection, RawPage};
pub use source::StackBlitzSource;
