//! Minimal `multipart/form-data` encoder.
//!
//! The upload is signed over its exact body bytes, so the body has to exist
//! before the request is built; `reqwest::multipart::Form` only streams it.

const CRLF: &str = "\r\n";

pub struct MultipartBody {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::with_boundary(format!("ptr-sync-{:016x}", fastrand::u64(..)))
    }

    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            body: Vec::new(),
        }
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.open_part(&format!("form-data; name=\"{}\"", name), None);
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(CRLF.as_bytes());
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, mime: &str, contents: &[u8]) -> Self {
        self.open_part(
            &format!("form-data; name=\"{}\"; filename=\"{}\"", name, file_name),
            Some(mime),
        );
        self.body.extend_from_slice(contents);
        self.body.extend_from_slice(CRLF.as_bytes());
        self
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{}--{}", self.boundary, CRLF).as_bytes());
        self.body
    }

    fn open_part(&mut self, disposition: &str, mime: Option<&str>) {
        let mut head = format!("--{}{}Content-Disposition: {}{}", self.boundary, CRLF, disposition, CRLF);
        if let Some(mime) = mime {
            head.push_str(&format!("Content-Type: {}{}", mime, CRLF));
        }
        head.push_str(CRLF);
        self.body.extend_from_slice(head.as_bytes());
    }
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}
