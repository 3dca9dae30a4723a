use crate::config::error::ConfigError;
use crate::config::error::ConfigError::{InvalidBaseUrl, InvalidNotificationDelay, NoSupplier};
use crate::tools::env_args::retrieve_arg_value;
use crate::tools::env_vars::retrieve_env_var;
use derive_getters::Getters;
use dto::supplier::SupplierCatalog;
use reqwest::Url;
use std::time::Duration;

pub mod error;

pub const BASE_URL_ENV_VAR: &str = "ATTAIN_BASE_URL";
pub const SUPPLIERS_ARG: &str = "--suppliers";
pub const NOTIFICATION_DELAY_ARG: &str = "--notification-delay-ms";
pub const DEFAULT_BASE_URL: &str = "http://localhost";
pub const DEFAULT_NOTIFICATION_DELAY: Duration = Duration::from_millis(5000);

/// Settings of the form, read once at startup and never modified afterward.
#[derive(Debug, Clone, Getters)]
pub struct FormConfig {
    base_url: Url,
    catalog: SupplierCatalog,
    notification_delay: Duration,
}

impl FormConfig {
    pub fn new(base_url: Url, catalog: SupplierCatalog, notification_delay: Duration) -> Self {
        Self {
            base_url,
            catalog,
            notification_delay,
        }
    }
}

pub fn build_form_config() -> Result<FormConfig, ConfigError> {
    let base_url = parse_base_url(retrieve_base_url())?;
    let catalog = build_supplier_catalog(retrieve_arg_value(SUPPLIERS_ARG))?;
    let notification_delay =
        parse_notification_delay(retrieve_arg_value(NOTIFICATION_DELAY_ARG))?;

    Ok(FormConfig::new(base_url, catalog, notification_delay))
}

#[cfg(not(feature = "demo"))]
fn retrieve_base_url() -> Option<String> {
    retrieve_env_var(BASE_URL_ENV_VAR)
}

#[cfg(feature = "demo")]
fn retrieve_base_url() -> Option<String> {
    crate::demo_mock_server::demo_backend_uri().or_else(|| retrieve_env_var(BASE_URL_ENV_VAR))
}

fn parse_base_url(base_url: Option<String>) -> Result<Url, ConfigError> {
    let base_url = base_url
        .filter(|base_url| !base_url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
    let url = Url::parse(base_url.trim()).map_err(|error| {
        log::error!("Can't parse base URL: {error}");
        InvalidBaseUrl(base_url.clone())
    })?;
    match url.scheme() {
        "https" => {}
        "http" => log::warn!(
            "Credentials are sent to {url} without TLS. Use an https base URL outside of local setups."
        ),
        _ => return Err(InvalidBaseUrl(base_url)),
    }
    if url.cannot_be_a_base() {
        return Err(InvalidBaseUrl(base_url));
    }

    Ok(url)
}

fn build_supplier_catalog(suppliers: Option<String>) -> Result<SupplierCatalog, ConfigError> {
    let Some(suppliers) = suppliers else {
        return Ok(SupplierCatalog::default());
    };
    let (catalog, unknown_ids) = SupplierCatalog::from_ids(suppliers.split(','));
    if !unknown_ids.is_empty() {
        log::warn!("Ignoring unknown suppliers: {unknown_ids:?}");
    }
    if catalog.suppliers().is_empty() {
        return Err(NoSupplier(suppliers));
    }

    Ok(catalog)
}

fn parse_notification_delay(delay: Option<String>) -> Result<Duration, ConfigError> {
    match delay {
        None => Ok(DEFAULT_NOTIFICATION_DELAY),
        Some(delay) => match delay.trim().parse::<u64>() {
            Ok(milliseconds) if milliseconds > 0 => Ok(Duration::from_millis(milliseconds)),
            _ => Err(InvalidNotificationDelay(delay)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::env_args::with_env_args;
    use crate::tools::env_vars::with_env_vars;
    use parameterized::{ide, parameterized};

    ide!();

    // region parse_base_url
    #[parameterized(
        base_url = {
            None,
            Some("".to_owned()),
            Some("http://backend:8080".to_owned()),
            Some(" https://automation.example.com/api ".to_owned()),
        },
        expected_result = {
            "http://localhost/",
            "http://localhost/",
            "http://backend:8080/",
            "https://automation.example.com/api",
        }
    )]
    fn should_parse_base_url(base_url: Option<String>, expected_result: &str) {
        let url = parse_base_url(base_url).unwrap();

        assert_eq!(expected_result, url.as_str());
    }

    #[parameterized(base_url = {"localhost", "ftp://backend", "mailto:someone@example.com", "http://"})]
    fn should_fail_to_parse_base_url(base_url: &str) {
        let error = parse_base_url(Some(base_url.to_owned())).unwrap_err();

        assert_eq!(InvalidBaseUrl(base_url.to_owned()), error);
    }
    // endregion

    // region build_supplier_catalog
    #[test]
    fn should_build_default_catalog() {
        let catalog = build_supplier_catalog(None).unwrap();

        assert_eq!(SupplierCatalog::default(), catalog);
    }

    #[test]
    fn should_build_restricted_catalog() {
        let catalog = build_supplier_catalog(Some("fritolay,kehe,unknown".to_owned())).unwrap();

        assert_eq!(2, catalog.suppliers().len());
        assert!(catalog.find("coremark").is_none());
    }

    #[test]
    fn should_fail_to_build_empty_catalog() {
        let error = build_supplier_catalog(Some("unknown,".to_owned())).unwrap_err();

        assert_eq!(NoSupplier("unknown,".to_owned()), error);
    }
    // endregion

    // region parse_notification_delay
    #[parameterized(
        delay = {None, Some("6000".to_owned()), Some(" 250 ".to_owned())},
        expected_result = {DEFAULT_NOTIFICATION_DELAY, Duration::from_millis(6000), Duration::from_millis(250)}
    )]
    fn should_parse_notification_delay(delay: Option<String>, expected_result: Duration) {
        assert_eq!(expected_result, parse_notification_delay(delay).unwrap());
    }

    #[parameterized(delay = {"", "0", "-5", "five seconds"})]
    fn should_fail_to_parse_notification_delay(delay: &str) {
        let error = parse_notification_delay(Some(delay.to_owned())).unwrap_err();

        assert_eq!(InvalidNotificationDelay(delay.to_owned()), error);
    }
    // endregion

    #[test]
    fn should_build_form_config() {
        let args = vec![
            format!("{SUPPLIERS_ARG}=kehe"),
            format!("{NOTIFICATION_DELAY_ARG}=6000"),
        ];

        let config = with_env_args(args, || {
            with_env_vars(vec![(BASE_URL_ENV_VAR, "https://backend")], build_form_config)
        })
        .unwrap();

        assert_eq!("https://backend/", config.base_url().as_str());
        assert_eq!(1, config.catalog().suppliers().len());
        assert_eq!(Duration::from_millis(6000), *config.notification_delay());
    }

    #[test]
    fn should_build_default_form_config() {
        let config = with_env_args(vec![], || with_env_vars(vec![], build_form_config)).unwrap();

        assert_eq!("http://localhost/", config.base_url().as_str());
        assert_eq!(SupplierCatalog::default(), *config.catalog());
        assert_eq!(DEFAULT_NOTIFICATION_DELAY, *config.notification_delay());
    }
}
