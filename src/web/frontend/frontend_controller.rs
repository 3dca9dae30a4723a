use crate::form::controller::FormController;
use crate::form::csv_file::CsvFile;
use crate::tools::{log_error_and_return, log_message_and_return};
use crate::web::frontend::form_input::{FormAction, FormInput};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::tokio::io::AsyncReadExt;
use rocket::Request;
use rocket_dyn_templates::{Template, context};

pub const TITLE: &str = "Attain Ordering Automation";

#[get("/")]
pub async fn index(form_controller: FormController) -> Template {
    Template::render(
        "index",
        context! {
            title: TITLE,
            form: form_controller.view()
        },
    )
}

/// Apply the posted field values, then the action the user took,
/// and send them back to the page.
#[post("/", data = "<form_input>")]
pub async fn handle_form(
    form_controller: FormController,
    form_input: Form<FormInput<'_>>,
) -> Result<Redirect, Status> {
    let form_input = form_input.into_inner();
    form_controller.set_credentials(
        form_input.email.unwrap_or_default(),
        form_input.username.unwrap_or_default(),
        form_input.password.unwrap_or_default(),
    );
    if let Some(supplier) = form_input.supplier {
        form_controller.select_supplier(supplier);
    }
    if let Some(file) = &form_input.file {
        if let Some(csv_file) = read_csv_file(file).await? {
            form_controller.select_file(Some(csv_file));
        }
    }

    match form_input.action {
        FormAction::SelectSupplier | FormAction::SelectFile => {}
        FormAction::ClearFile => form_controller.clear_file(),
        FormAction::Submit => match form_controller.submit().await {
            Ok(outcome) => log::debug!("Submission settled: {outcome:?}"),
            Err(error) => log::warn!("Submission refused: {error}"),
        },
        FormAction::Dismiss => {
            form_controller.dismiss_notification();
        }
    }

    Ok(Redirect::to(uri!(index)))
}

/// Browsers send a file without name when none has been chosen.
/// A chosen file is kept even when it is empty.
async fn read_csv_file(file: &TempFile<'_>) -> Result<Option<CsvFile>, Status> {
    let name = file
        .raw_name()
        .map(|name| base_name(name.dangerous_unsafe_unsanitized_raw().as_str()))
        .unwrap_or_default();
    if name.is_empty() {
        return Ok(None);
    }
    let name = name.to_owned();
    let content_type = file
        .content_type()
        .map(|content_type| content_type.to_string());

    let mut content = Vec::with_capacity(file.len() as usize);
    let mut reader = Box::pin(file.open().await.map_err(log_message_and_return(
        "Can't open uploaded file",
        Status::InternalServerError,
    ))?);
    reader
        .read_to_end(&mut content)
        .await
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(Some(CsvFile::new(name, content_type, content)))
}

/// Some browsers send the full client-side path of the file.
fn base_name(raw_name: &str) -> &str {
    raw_name.rsplit(['/', '\\']).next().unwrap_or(raw_name)
}

#[catch(404)]
pub async fn not_found(req: &Request<'_>) -> Template {
    Template::render(
        "error/404",
        context! {
            title: TITLE,
            uri: req.uri().to_string()
        },
    )
}
