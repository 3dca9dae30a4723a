use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("The backend base URL is invalid [url: {0}]")]
    InvalidBaseUrl(String),
    #[error("No known supplier has been configured [suppliers: {0}]")]
    NoSupplier(String),
    #[error("The notification delay is not a number of milliseconds [delay: {0}]")]
    InvalidNotificationDelay(String),
}
