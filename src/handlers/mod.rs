mod index;
mod upload;

pub use index::index_handler;
pub use upload::{method_not_allowed, read_files, upload_handler};
