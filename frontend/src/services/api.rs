use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder};
use shared::{ApiRequest, ApiResponse, ClientError, ClientResult, Method, Transport};

/// Browser `fetch` transport for the transactions API
#[derive(Clone, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let operation = request.operation;
        let builder = builder(request.method, &request.path);

        let sent = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ClientError::invalid_input(format!("Failed to serialize request: {}", e)))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };

        match sent {
            Ok(response) => {
                let status = response.status();
                // DELETE answers with an empty body; a failed read is treated the same way
                let body = response.text().await.unwrap_or_default();
                Ok(ApiResponse { status, body })
            }
            Err(e) => Err(ClientError::network(operation, e.to_string())),
        }
    }
}
