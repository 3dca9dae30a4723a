use rocket::fs::TempFile;
use rocket::{FromForm, FromFormField};

/// Everything the page posts: the current value of each field and the action the user took.
#[derive(FromForm)]
pub struct FormInput<'r> {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Missing while the placeholder option is selected.
    pub supplier: Option<String>,
    pub file: Option<TempFile<'r>>,
    pub action: FormAction,
}

#[derive(Debug, PartialEq, FromFormField)]
pub enum FormAction {
    #[field(value = "select_supplier")]
    SelectSupplier,
    #[field(value = "select_file")]
    SelectFile,
    #[field(value = "clear_file")]
    ClearFile,
    #[field(value = "submit")]
    Submit,
    #[field(value = "dismiss")]
    Dismiss,
}
