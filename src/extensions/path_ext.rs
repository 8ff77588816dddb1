use std::path::Path;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

pub trait FileName {
    fn string_file_name(&self) -> &str;

    /// The media type implied by the file extension, the way a browser file picker reports it.
    fn media_type(&self) -> &'static str;
}

impl FileName for Path {
    fn string_file_name(&self) -> &str {
        self.file_name().and_then(|s| s.to_str()).unwrap_or("unknown")
    }

    fn media_type(&self) -> &'static str {
        match self.extension().and_then(|e| e.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("pdf") => PDF_MEDIA_TYPE,
            _ => FALLBACK_MEDIA_TYPE,
        }
    }
}
