//! HTTP 请求方法

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;

use super::HttpCustomerClient;

impl HttpCustomerClient {
    /// 拼接完整 URL，查询参数做 URL 编码
    pub(crate) fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{path}", self.base_url);
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }
        url
    }

    /// 执行 GET 请求并解析 JSON
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(path, query);
        let (status, text) =
            HttpUtils::execute_request(self.client.get(&url), "GET", &url).await?;
        let body = HttpUtils::ensure_success(status, text, path)?;
        HttpUtils::parse_json(&body)
    }

    /// 执行带 JSON 请求体的请求并解析 JSON 响应
    pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let text = self.send(method, path, Some(body)).await?;
        HttpUtils::parse_json(&text)
    }

    /// 执行请求，只关心是否成功（PUT/DELETE 的响应体不解析）
    pub(crate) async fn send_without_reply<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()> {
        self.send(method, path, body).await.map(|_| ())
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String> {
        let url = self.url(path, &[]);
        let mut builder = self.client.request(method.clone(), &url);

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| ClientError::SerializationError {
                detail: e.to_string(),
            })?;
            log::debug!("Request Body: {} bytes", bytes.len());
            builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let (status, text) = HttpUtils::execute_request(builder, method.as_str(), &url).await?;
        HttpUtils::ensure_success(status, text, path)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::{ClientConfig, HttpCustomerClient};

    fn client() -> HttpCustomerClient {
        HttpCustomerClient::new(&ClientConfig::new("http://localhost:3000/api")).unwrap()
    }

    #[test]
    fn url_without_query() {
        assert_eq!(
            client().url("/customer/3", &[]),
            "http://localhost:3000/api/customer/3"
        );
    }

    #[test]
    fn url_encodes_query_values() {
        let url = client().url(
            "/customer",
            &[("name", "José da Silva".to_string()), ("page", "1".to_string())],
        );
        assert_eq!(
            url,
            "http://localhost:3000/api/customer?name=Jos%C3%A9%20da%20Silva&page=1"
        );
    }
}
