//! User container operations.

use silva_core::{NewUser, User};

use super::{ActionResult, UserStore};
use crate::api::ApiClient;

impl UserStore {
    /// Fetch all users, replacing the collection.
    ///
    /// # Errors
    ///
    /// Returns the failure message; the collection is emptied.
    pub async fn fetch_all(&self, api: &ApiClient) -> ActionResult<Vec<User>> {
        self.refresh(api.list_users()).await
    }

    /// Create one user and append it.
    ///
    /// # Errors
    ///
    /// Returns the failure message; the collection is untouched.
    pub async fn create(&self, api: &ApiClient, input: &NewUser) -> ActionResult<User> {
        self.mutate("create", api.create_user(input), |state, user| {
            state.items.push(user.clone());
        })
        .await
    }

    /// Import users from a CSV file.
    ///
    /// The response is the complete user list after the import and replaces
    /// the collection wholesale, whatever its previous size.
    ///
    /// # Errors
    ///
    /// Returns the failure message; the collection is untouched.
    pub async fn import_csv(
        &self,
        api: &ApiClient,
        file_name: &str,
        contents: Vec<u8>,
    ) -> ActionResult<Vec<User>> {
        self.mutate(
            "import",
            api.upload_users_csv(file_name, contents),
            |state, users| state.items.clone_from(users),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use silva_core::{LoadStatus, UserId};
    use wiremock::matchers::{header_regex, method, path};
    use wiremock::{Mock, ResponseTemplate};

    use super::*;
    use crate::store::test_support::{mock_api, unreachable_api};

    fn users_json(ids: &[i64]) -> serde_json::Value {
        json!(
            ids.iter()
                .map(|id| json!({"id": id, "username": format!("user{id}"), "email": format!("user{id}@shop.test")}))
                .collect::<Vec<_>>()
        )
    }

    #[tokio::test]
    async fn test_fetch_all_replaces_items() {
        let (server, api) = mock_api().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_json(&[1, 2])))
            .mount(&server)
            .await;

        let store = UserStore::new();
        let users = store.fetch_all(&api).await.unwrap();

        assert_eq!(users.len(), 2);
        let state = store.snapshot().await;
        assert_eq!(state.loading, LoadStatus::Succeeded);
        assert_eq!(state.items[1].username, "user2");
    }

    #[tokio::test]
    async fn test_failed_fetch_clears_items() {
        let (server, api) = mock_api().await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "database down"})),
            )
            .mount(&server)
            .await;

        let store = UserStore::new();
        store
            .replace_items(vec![User {
                id: UserId::new(1),
                username: "alice".to_string(),
                email: "alice@shop.test".to_string(),
                password: None,
            }])
            .await;

        let err = store.fetch_all(&api).await.unwrap_err();
        assert_eq!(err.message(), "database down");

        let state = store.snapshot().await;
        assert!(state.items.is_empty());
        assert_eq!(state.loading, LoadStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("database down"));
    }

    #[tokio::test]
    async fn test_network_failure_reports_a_message() {
        let store = UserStore::new();
        let err = store.fetch_all(&unreachable_api()).await.unwrap_err();

        assert!(!err.message().is_empty());
        assert_eq!(store.snapshot().await.loading, LoadStatus::Failed);
    }

    #[tokio::test]
    async fn test_import_csv_replaces_whole_collection() {
        let (server, api) = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/users/upload"))
            .and(header_regex("content-type", "^multipart/form-data; boundary="))
            .respond_with(ResponseTemplate::new(201).set_body_json(users_json(&[1, 2, 3, 4, 5])))
            .mount(&server)
            .await;

        let store = UserStore::new();
        store
            .replace_items(vec![User {
                id: UserId::new(1),
                username: "user1".to_string(),
                email: "user1@shop.test".to_string(),
                password: None,
            }])
            .await;

        let imported = store
            .import_csv(&api, "users.csv", b"username,email,password\n".to_vec())
            .await
            .unwrap();

        assert_eq!(imported.len(), 5);
        let state = store.snapshot().await;
        assert_eq!(state.items.len(), 5);
        assert_eq!(state.loading, LoadStatus::Succeeded);

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("name=\"csvFile\""));
        assert!(body.contains("filename=\"users.csv\""));
    }

    #[tokio::test]
    async fn test_create_appends_user() {
        let (server, api) = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"id": 8, "username": "carol", "email": "carol@shop.test"})),
            )
            .mount(&server)
            .await;

        let store = UserStore::new();
        let created = store
            .create(
                &api,
                &NewUser {
                    username: "carol".to_string(),
                    email: "carol@shop.test".to_string(),
                    password: "secret1".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(created.id, UserId::new(8));
        assert_eq!(store.items().await, vec![created]);
    }
}
