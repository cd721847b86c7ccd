//! User endpoints.

use reqwest::{
    Method,
    multipart::{Form, Part},
};
use silva_core::{NewUser, User};
use tracing::instrument;

use super::{ApiClient, ApiError};

/// Multipart field name the upload endpoint reads the CSV file from.
pub const CSV_FIELD: &str = "csvFile";

impl ApiClient {
    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/users").await
    }

    /// Create a single user.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create_user(&self, input: &NewUser) -> Result<User, ApiError> {
        self.send(Method::POST, "/users", input).await
    }

    /// Upload a CSV file of users.
    ///
    /// The API answers with the complete user list after the import, not
    /// with the created records only.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, contents), fields(file_name = %file_name, size = contents.len()))]
    pub async fn upload_users_csv(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<Vec<User>, ApiError> {
        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let form = Form::new().part(CSV_FIELD, part);

        self.send_multipart("/users/upload", form).await
    }
}
