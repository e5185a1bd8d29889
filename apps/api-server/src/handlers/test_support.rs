//! Hand-built multipart bodies for handler tests.

const BOUNDARY: &str = "----postagem-test-boundary";

enum Part {
    Text(String, Vec<u8>),
    File(String, String, Vec<u8>),
}

#[derive(Default)]
pub struct MultipartBody {
    parts: Vec<Part>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(Part::Text(name.to_string(), value.as_bytes().to_vec()));
        self
    }

    /// A text part whose bytes are sent as given, valid UTF-8 or not.
    pub fn raw_text(mut self, name: &str, value: &[u8]) -> Self {
        self.parts.push(Part::Text(name.to_string(), value.to_vec()));
        self
    }

    pub fn file(mut self, name: &str, filename: &str, bytes: &[u8]) -> Self {
        self.parts.push(Part::File(
            name.to_string(),
            filename.to_string(),
            bytes.to_vec(),
        ));
        self
    }

    /// Returns the `Content-Type` header value and the encoded body.
    pub fn build(self) -> (String, Vec<u8>) {
        let mut body = Vec::new();
        for part in self.parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    body.extend_from_slice(&value);
                }
                Part::File(name, filename, bytes) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                             Content-Type: application/octet-stream\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(&bytes);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        (format!("multipart/form-data; boundary={BOUNDARY}"), body)
    }
}
