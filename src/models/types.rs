use bytes::Bytes;

/// Extensions accepted for archiving, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 3] = [".pdf", ".jpg", ".jpeg"];

/// A file part pulled out of the upload form, held for the length of one request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub contents: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, contents: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    /// Extension declared by the filename, including the leading dot.
    pub fn extension(&self) -> Option<&str> {
        extension_of(&self.file_name)
    }

    pub fn has_allowed_extension(&self) -> bool {
        matches!(
            self.extension(),
            Some(ext) if ALLOWED_EXTENSIONS.iter().any(|allowed| ext.eq_ignore_ascii_case(allowed))
        )
    }
}

/// Last path component of a client-supplied filename, split on `/` and `\`.
pub fn base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// Suffix of the last path component starting at its final `.`.
///
/// Unlike [`std::path::Path::extension`], a leading dot counts, so `.pdf`
/// yields `Some(".pdf")`.
pub fn extension_of(name: &str) -> Option<&str> {
    let base = base_name(name);
    base.rfind('.').map(|idx| &base[idx..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_keeps_dot_and_case() {
        assert_eq!(extension_of("scan.PDF"), Some(".PDF"));
        assert_eq!(extension_of("photo.tar.jpeg"), Some(".jpeg"));
        assert_eq!(extension_of(".pdf"), Some(".pdf"));
        assert_eq!(extension_of("README"), None);
    }

    #[test]
    fn extension_only_looks_at_last_component() {
        assert_eq!(extension_of("dir.pdf/notes"), None);
        assert_eq!(extension_of("C:\\docs\\a.jpg"), Some(".jpg"));
    }

    #[test]
    fn base_name_strips_directories() {
        assert_eq!(base_name("../../etc/a.pdf"), "a.pdf");
        assert_eq!(base_name("/abs/b.jpg"), "b.jpg");
        assert_eq!(base_name("dir\\c.jpeg"), "c.jpeg");
        assert_eq!(base_name("plain.pdf"), "plain.pdf");
        assert_eq!(base_name("trailing/"), "");
    }

    #[test]
    fn allowed_extensions_ignore_case() {
        assert!(UploadedFile::new("a.pdf", "x").has_allowed_extension());
        assert!(UploadedFile::new("b.JPG", "x").has_allowed_extension());
        assert!(UploadedFile::new("c.JpEg", "x").has_allowed_extension());
        assert!(!UploadedFile::new("d.exe", "x").has_allowed_extension());
        assert!(!UploadedFile::new("pdf", "x").has_allowed_extension());
        assert!(!UploadedFile::new("e.pdf.exe", "x").has_allowed_extension());
    }
}
