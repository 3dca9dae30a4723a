#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

/// Retrieve the value of an environment variable.
/// Unset and non-unicode variables both read as `None`.
///
/// In a test context, variables are never read from the real environment:
/// wrap your test with `with_env_vars(vars, fn)` to provide them.
pub fn retrieve_env_var(name: &str) -> Option<String> {
    get_env_var(name)
}

#[cfg(not(test))]
fn get_env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(test)]
thread_local! {
    static ENV_VARS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

#[cfg(test)]
fn get_env_var(name: &str) -> Option<String> {
    ENV_VARS.with(|vars| vars.borrow().get(name).cloned())
}

#[cfg(test)]
/// Run the function with the given variables as the only environment variables.
/// They are reset to their previous state afterward.
pub fn with_env_vars<F, T>(vars: Vec<(&str, &str)>, function: F) -> T
where
    F: FnOnce() -> T,
{
    let vars: HashMap<String, String> = vars
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect();
    ENV_VARS.with(|refcell| {
        let old_value = refcell.replace(vars);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
mod tests {
    use crate::tools::env_vars::{retrieve_env_var, with_env_vars};

    #[test]
    fn should_retrieve_env_var() {
        let result = with_env_vars(vec![("ATTAIN_BASE_URL", "http://backend")], || {
            retrieve_env_var("ATTAIN_BASE_URL")
        });

        assert_eq!(Some("http://backend".to_owned()), result);
    }

    #[test]
    fn should_not_retrieve_missing_env_var() {
        let result = with_env_vars(vec![("OTHER", "value")], || {
            retrieve_env_var("ATTAIN_BASE_URL")
        });

        assert_eq!(None, result);
    }

    #[test]
    fn should_restore_previous_env_vars() {
        with_env_vars(vec![("ATTAIN_BASE_URL", "http://backend")], || {
            with_env_vars(vec![], || assert_eq!(None, retrieve_env_var("ATTAIN_BASE_URL")));
            assert!(retrieve_env_var("ATTAIN_BASE_URL").is_some());
        });
    }
}
