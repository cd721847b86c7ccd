//! Command implementations.
//!
//! Each command drives the same page controller the web admin uses, against
//! a local [`Store`], then prints the notice (and the table for `list`).

pub mod cart;
pub mod categories;
pub mod products;
pub mod users;

use silva_admin::api::{ApiClient, ApiError};
use silva_admin::components::RenderedTable;
use silva_admin::config::{ConfigError, parse_api_base_url};
use silva_admin::pages::{Notice, NoticeLevel};
use silva_admin::store::{ActionError, Store};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The API root is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API client could not be built.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A local file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The operation was rejected or failed; the notice was already printed.
    #[error("{0}")]
    Rejected(Notice),
}

/// Shared command state: one API client and the local containers.
#[derive(Debug)]
pub struct Context {
    pub api: ApiClient,
    pub store: Store,
}

impl Context {
    /// Build a context for the given API root.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not a usable HTTP(S) URL.
    pub fn new(api_url: &str) -> Result<Self, CommandError> {
        let url = parse_api_base_url(api_url)?;
        Ok(Self {
            api: ApiClient::new(url.as_str())?,
            store: Store::new(),
        })
    }
}

/// Print a notice; anything but success becomes an error.
#[allow(clippy::print_stdout)]
pub fn report(notice: Notice) -> Result<(), CommandError> {
    println!("{notice}");
    match notice.level {
        NoticeLevel::Success => Ok(()),
        NoticeLevel::Warning | NoticeLevel::Error => Err(CommandError::Rejected(notice)),
    }
}

/// Print a table, then the list failure if there was one.
#[allow(clippy::print_stdout)]
pub fn print_table(table: &RenderedTable, mounted: Result<(), ActionError>) -> Result<(), CommandError> {
    print!("{}", table.to_text());
    match mounted {
        Ok(()) => Ok(()),
        Err(err) => report(Notice::from(&err)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use wiremock::MockServer;

    use super::Context;

    /// Start a mock shop API and a context pointing at its `/api` root.
    pub async fn mock_context() -> (MockServer, Context) {
        let server = MockServer::start().await;
        let ctx = Context::new(&format!("{}/api", server.uri())).unwrap();
        (server, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_maps_levels() {
        assert!(report(Notice::success()).is_ok());
        assert!(matches!(
            report(Notice::warning("rule")),
            Err(CommandError::Rejected(_))
        ));
        assert!(report(Notice::error("boom")).is_err());
    }

    #[test]
    fn test_context_rejects_bad_url() {
        assert!(matches!(
            Context::new("ftp://shop.test"),
            Err(CommandError::Config(_))
        ));
    }
}
