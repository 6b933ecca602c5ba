use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

pub(crate) struct BaseClient {
    address: String,
    api_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    BadClientData,
    Unauthorized,
    NotFound,
    Conflict,
    InternalError,
    UnexpectedStatusCode,
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    /// Value of the `error` field of the response body, if any
    pub message: String,
}

impl APIError {
    fn new(variant: APIErrorVariant, message: impl Into<String>) -> Self {
        Self {
            variant,
            message: message.into(),
        }
    }
}

pub type APIResponse<T> = Result<T, APIError>;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address: format!("{}/api/v1", address.trim_end_matches('/')),
            api_key: None,
        }
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    fn get_client(&self, method: Method, path: String, headers: &[(&str, String)]) -> RequestBuilder {
        let client = Client::new();
        let url = format!("{}/{}", self.address, path);
        let mut builder = client.request(method, &url);

        if let Some(api_key) = &self.api_key {
            builder = builder.header("x-api-key", api_key.clone());
        }
        for (name, value) in headers {
            builder = builder.header(*name, value.clone());
        }
        builder
    }

    async fn check_status_code(
        &self,
        res: Response,
        expected_status_code: StatusCode,
    ) -> Result<Response, APIError> {
        let status = res.status();
        if status == expected_status_code {
            return Ok(res);
        }

        let variant = match status {
            StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
            StatusCode::UNAUTHORIZED => APIErrorVariant::Unauthorized,
            StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
            StatusCode::CONFLICT => APIErrorVariant::Conflict,
            StatusCode::INTERNAL_SERVER_ERROR => APIErrorVariant::InternalError,
            _ => APIErrorVariant::UnexpectedStatusCode,
        };
        let message = res
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("Unexpected status code: {}", status));
        Err(APIError::new(variant, message))
    }

    async fn get_json_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Response,
    ) -> APIResponse<T> {
        res.json::<T>()
            .await
            .map_err(|e| APIError::new(APIErrorVariant::MalformedResponse, e.to_string()))
    }

    async fn handle_api_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Result<Response, reqwest::Error>,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = res.map_err(|e| APIError::new(APIErrorVariant::Network, e.to_string()))?;
        let res = self.check_status_code(res, expected_status_code).await?;
        self.get_json_response(res).await
    }

    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.get_client(Method::GET, path, &[]).send().await;
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn delete<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.get_client(Method::DELETE, path, &[]).send().await;
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn put<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .get_client(Method::PUT, path, &[])
            .json(&body)
            .send()
            .await;
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn post<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.post_with_headers(body, path, &[], expected_status_code)
            .await
    }

    pub async fn post_with_headers<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        headers: &[(&str, String)],
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .get_client(Method::POST, path, headers)
            .json(&body)
            .send()
            .await;
        self.handle_api_response(res, expected_status_code).await
    }

    /// Posts the body as is, for callers that sign the exact bytes
    pub async fn post_raw<T: for<'de> Deserialize<'de>>(
        &self,
        body: Vec<u8>,
        path: String,
        headers: &[(&str, String)],
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .get_client(Method::POST, path, headers)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await;
        self.handle_api_response(res, expected_status_code).await
    }
}
