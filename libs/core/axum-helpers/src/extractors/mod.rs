pub mod filter_query;
pub mod id_path;

pub use filter_query::FilterQuery;
pub use id_path::IdPath;
