use crate::form::csv_file::CsvFile;
use derive_getters::{Dissolve, Getters};
use std::fmt::{Debug, Formatter};

/// The values of the form at submission time, detached from the live state.
#[derive(Clone, PartialEq, Getters, Dissolve)]
pub struct FormSnapshot {
    email: String,
    username: String,
    password: String,
    file: Option<CsvFile>,
    supplier: String,
}

impl FormSnapshot {
    pub fn new(
        email: String,
        username: String,
        password: String,
        file: Option<CsvFile>,
        supplier: String,
    ) -> Self {
        Self {
            email,
            username,
            password,
            file,
            supplier,
        }
    }
}

impl Debug for FormSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FormSnapshot {{email={}, username={}, password=MASKED, file={:?}, supplier={}}}",
            self.email, self.username, self.file, self.supplier
        )
    }
}
