mod types;

pub use types::{base_name, extension_of, UploadedFile, ALLOWED_EXTENSIONS};
