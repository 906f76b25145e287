use clinic_scheduler_api_structs::Enveloped;
use reqwest::{Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    Unauthorized,
    BadClientData,
    NotFound,
    UnexpectedStatusCode,
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

impl Display for APIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.variant, self.message)
    }
}

impl std::error::Error for APIError {}

impl APIError {
    pub(crate) fn network(e: reqwest::Error) -> Self {
        Self {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        }
    }

    pub(crate) fn malformed<T: Display>(e: T) -> Self {
        Self {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        }
    }

    pub(crate) fn bad_client_data<T: Display>(e: T) -> Self {
        Self {
            variant: APIErrorVariant::BadClientData,
            message: e.to_string(),
        }
    }
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
    api_token: Option<String>,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address,
            api_token: None,
        }
    }

    pub fn set_api_token(&mut self, api_token: String) {
        self.api_token = Some(api_token);
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.address, path);
        let builder = self.client.request(method, &url);
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn expect_status(res: Response, expected_status_code: StatusCode) -> APIResponse<Response> {
        let status = res.status();
        if status == expected_status_code {
            return Ok(res);
        }

        let variant = match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                APIErrorVariant::BadClientData
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => APIErrorVariant::Unauthorized,
            StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
            _ => APIErrorVariant::UnexpectedStatusCode,
        };
        let message = res.text().await.unwrap_or_default();
        tracing::warn!(
            "Expected status code: {} but got: {}. Response: {}",
            expected_status_code,
            status,
            message
        );
        Err(APIError { variant, message })
    }

    async fn decode<T: DeserializeOwned>(res: Response) -> APIResponse<T> {
        res.json::<Enveloped<T>>()
            .await
            .map(Enveloped::into_inner)
            .map_err(APIError::malformed)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .request(Method::GET, &path)
            .send()
            .await
            .map_err(APIError::network)?;
        let res = Self::expect_status(res, expected_status_code).await?;
        Self::decode(res).await
    }

    pub async fn post<S: Serialize, T: DeserializeOwned>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .request(Method::POST, &path)
            .json(&body)
            .send()
            .await
            .map_err(APIError::network)?;
        let res = Self::expect_status(res, expected_status_code).await?;
        Self::decode(res).await
    }

    pub async fn put<S: Serialize, T: DeserializeOwned>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .request(Method::PUT, &path)
            .json(&body)
            .send()
            .await
            .map_err(APIError::network)?;
        let res = Self::expect_status(res, expected_status_code).await?;
        Self::decode(res).await
    }

    // The delete endpoint only reports success or failure, there is no
    // body to decode.
    pub async fn delete(&self, path: String, expected_status_code: StatusCode) -> APIResponse<()> {
        let res = self
            .request(Method::DELETE, &path)
            .send()
            .await
            .map_err(APIError::network)?;
        Self::expect_status(res, expected_status_code).await.map(|_| ())
    }
}
