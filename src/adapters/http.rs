use crate::domain::model::{ContactId, ContactPayload, ContactRecord};
use crate::domain::ports::{ConfigProvider, ContactApi};
use crate::utils::error::{ContactError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

/// 透過 REST API 存取聯絡人
#[derive(Debug, Clone)]
pub struct HttpContactApi {
    client: Client,
    contacts_url: String,
}

impl HttpContactApi {
    pub fn new(contacts_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            contacts_url: contacts_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            contacts_url: config.contacts_url().trim_end_matches('/').to_string(),
        })
    }

    pub fn contacts_url(&self) -> &str {
        &self.contacts_url
    }

    fn contact_url(&self, id: ContactId) -> String {
        format!("{}/{}", self.contacts_url, id)
    }

    /// 404 代表聯絡人不存在，其餘非 2xx 一律視為失敗
    async fn check_status(response: Response, id: Option<ContactId>) -> Result<Response> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
            return Err(ContactError::not_found(id));
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string()
        } else {
            body
        };

        Err(ContactError::StatusError {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    async fn list(&self) -> Result<Vec<ContactRecord>> {
        tracing::debug!("GET {}", self.contacts_url);
        let response = self.client.get(&self.contacts_url).send().await?;
        let response = Self::check_status(response, None).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, payload: &ContactPayload) -> Result<ContactRecord> {
        tracing::debug!("POST {}", self.contacts_url);
        let response = self.client.post(&self.contacts_url).json(payload).send().await?;
        let response = Self::check_status(response, None).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: ContactId, payload: &ContactPayload) -> Result<ContactRecord> {
        let url = self.contact_url(id);
        tracing::debug!("PUT {}", url);
        let response = self.client.put(&url).json(payload).send().await?;
        let response = Self::check_status(response, Some(id)).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: ContactId) -> Result<()> {
        let url = self.contact_url(id);
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        Self::check_status(response, Some(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_parses_records() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/contacts");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([
                    {"id": 1, "full_name": "Chase Philpot", "email": "philpotc@yahoo.com",
                     "phone_number": "1238675309", "tags": "LS,Student"}
                ]));
        });

        let api = HttpContactApi::new(server.url("/api/contacts/"));
        let records = api.list().await.unwrap();

        mock.assert();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tags.as_deref(), Some("LS,Student"));
    }

    #[tokio::test]
    async fn test_update_sends_id_in_body_and_maps_404() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/contacts/9")
                .json_body(json!({
                    "id": 9,
                    "full_name": "Nobody Here",
                    "email": "",
                    "phone_number": "",
                    "tags": ""
                }));
            then.status(404);
        });

        let api = HttpContactApi::new(server.url("/api/contacts"));
        let payload = ContactPayload {
            id: Some(ContactId::new(9)),
            full_name: "Nobody Here".to_string(),
            email: String::new(),
            phone_number: String::new(),
            tags: String::new(),
        };

        let err = api.update(ContactId::new(9), &payload).await.unwrap_err();
        mock.assert();
        assert!(matches!(err, ContactError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_server_error_keeps_status_and_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/contacts");
            then.status(400).body("full_name is required");
        });

        let api = HttpContactApi::new(server.url("/api/contacts"));
        let err = api
            .create(&ContactPayload {
                id: None,
                full_name: String::new(),
                email: String::new(),
                phone_number: String::new(),
                tags: String::new(),
            })
            .await
            .unwrap_err();

        match err {
            ContactError::StatusError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "full_name is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/contacts");
            then.status(200).body("<html>not json</html>");
        });

        let api = HttpContactApi::new(server.url("/api/contacts"));
        assert!(matches!(api.list().await, Err(ContactError::ApiError(_))));
    }
}
