use derive_getters::{Dissolve, Getters};
use std::fmt::{Debug, Formatter};

/// A file chosen through the upload control.
/// Its content is forwarded as-is: nothing checks that it is actually CSV.
#[derive(Clone, PartialEq, Getters, Dissolve)]
pub struct CsvFile {
    name: String,
    content_type: Option<String>,
    content: Vec<u8>,
}

impl CsvFile {
    pub fn new(name: String, content_type: Option<String>, content: Vec<u8>) -> Self {
        Self {
            name,
            content_type,
            content,
        }
    }
}

impl Debug for CsvFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CsvFile {{name={}, content_type={:?}, size={}}}",
            self.name,
            self.content_type,
            self.content.len()
        )
    }
}
