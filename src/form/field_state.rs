use crate::form::csv_file::CsvFile;
use crate::form::snapshot::FormSnapshot;
use derive_getters::Getters;
use dto::supplier::SupplierCatalog;
use std::fmt::{Debug, Formatter};

/// Current values of the form.
///
/// `file_name` and `supplier_description` are derived from `file` and `supplier`:
/// they only change through the setters of the values they derive from.
#[derive(Default, Clone, PartialEq, Getters)]
pub struct FieldState {
    email: String,
    username: String,
    password: String,
    file: Option<CsvFile>,
    file_name: String,
    supplier: String,
    supplier_description: String,
}

impl FieldState {
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn set_username(&mut self, username: String) {
        self.username = username;
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }

    pub fn set_file(&mut self, file: Option<CsvFile>) {
        self.file_name = file
            .as_ref()
            .map(|file| file.name().clone())
            .unwrap_or_default();
        self.file = file;
    }

    pub fn clear_file(&mut self) {
        self.set_file(None);
    }

    pub fn set_supplier(&mut self, supplier: String, catalog: &SupplierCatalog) {
        self.supplier_description = catalog.resolve(&supplier).to_owned();
        self.supplier = supplier;
    }

    /// Back to the state of a freshly displayed form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::new(
            self.email.clone(),
            self.username.clone(),
            self.password.clone(),
            self.file.clone(),
            self.supplier.clone(),
        )
    }
}

impl Debug for FieldState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FieldState {{email={}, username={}, password=MASKED, file={:?}, supplier={}}}",
            self.email, self.username, self.file, self.supplier
        )
    }
}
