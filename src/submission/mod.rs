use crate::form::snapshot::FormSnapshot;
use crate::submission::error::SubmissionError;
use crate::submission::error::SubmissionError::Rejected;
use dto::submission_outcome::SubmissionOutcome;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode, Url};

pub mod error;

pub const EMAIL_FIELD: &str = "email";
pub const USERNAME_FIELD: &str = "username";
pub const PASSWORD_FIELD: &str = "password";
pub const CSV_FIELD: &str = "csv";

/// Send the form to the automation backend and tell how it went.
/// This never fails: transport errors are reported as [SubmissionOutcome::NetworkFailure].
pub async fn submit(client: &Client, base_url: &Url, snapshot: FormSnapshot) -> SubmissionOutcome {
    match send_form(client, base_url, snapshot).await {
        Ok(()) => SubmissionOutcome::Success,
        Err(Rejected(status)) => SubmissionOutcome::Rejected { status },
        Err(error) => {
            log::error!("Submission failed without response: {error:#?}");
            SubmissionOutcome::NetworkFailure
        }
    }
}

async fn send_form(
    client: &Client,
    base_url: &Url,
    snapshot: FormSnapshot,
) -> Result<(), SubmissionError> {
    let url = build_endpoint(base_url, snapshot.supplier());
    log::debug!("Submitting {snapshot:?} to {url}");
    let form = build_payload(snapshot);

    let response = client.post(url).multipart(form).send().await?;

    let status = response.status();
    if status == StatusCode::OK {
        log::info!("Submission accepted by the backend.");
        Ok(())
    } else {
        log::error!("Submission refused by the backend [status: {status}]");
        Err(Rejected(status.as_u16()))
    }
}

/// `{base_url}/attain/{supplier}`, with the supplier escaped as a single path segment.
pub fn build_endpoint(base_url: &Url, supplier: &str) -> Url {
    let mut url = base_url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend(["attain", supplier]);
    }
    url
}

fn build_payload(snapshot: FormSnapshot) -> Form {
    let (email, username, password, file, _) = snapshot.dissolve();
    let form = Form::new()
        .text(EMAIL_FIELD, email)
        .text(USERNAME_FIELD, username)
        .text(PASSWORD_FIELD, password);

    let Some(file) = file else {
        log::warn!("No file has been selected, submitting without `{CSV_FIELD}` part.");
        return form;
    };
    let (name, content_type, content) = file.dissolve();
    let part = Part::bytes(content)
        .file_name(name)
        .headers(build_part_headers(content_type));

    form.part(CSV_FIELD, part)
}

/// The content type given by the browser is forwarded as is, unless it can't be sent as a header.
fn build_part_headers(content_type: Option<String>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(content_type) = content_type {
        match HeaderValue::from_str(&content_type) {
            Ok(content_type) => {
                headers.insert(CONTENT_TYPE, content_type);
            }
            Err(_) => log::warn!(
                "Invalid content type `{}`, file sent without it.",
                content_type.escape_debug()
            ),
        }
    }
    headers
}
