use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult, Operation};
use crate::model::{Page, Transaction, TransactionId};
use crate::pagination::PageRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A fully described call against the transactions resource
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub operation: Operation,
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// `GET {base}?page=n&size=m`
    pub fn list(base: &str, request: PageRequest) -> Self {
        Self {
            operation: Operation::List,
            method: Method::Get,
            path: format!("{}?page={}&size={}", base, request.page, request.size),
            body: None,
        }
    }

    /// `GET {base}/{id}`
    pub fn get(base: &str, id: TransactionId) -> Self {
        Self {
            operation: Operation::Fetch,
            method: Method::Get,
            path: format!("{}/{}", base, id),
            body: None,
        }
    }

    /// `POST {base}` with the id left out of the body
    pub fn create(base: &str, transaction: &Transaction) -> ClientResult<Self> {
        let mut transaction = transaction.clone();
        transaction.id = 0;
        Ok(Self {
            operation: Operation::Create,
            method: Method::Post,
            path: base.to_string(),
            body: Some(to_body(&transaction)?),
        })
    }

    /// `PUT {base}/{id}`
    pub fn update(base: &str, transaction: &Transaction) -> ClientResult<Self> {
        Ok(Self {
            operation: Operation::Update,
            method: Method::Put,
            path: format!("{}/{}", base, transaction.id),
            body: Some(to_body(transaction)?),
        })
    }

    /// `DELETE {base}/{id}`
    pub fn delete(base: &str, id: TransactionId) -> Self {
        Self {
            operation: Operation::Delete,
            method: Method::Delete,
            path: format!("{}/{}", base, id),
            body: None,
        }
    }

    /// Create for unsaved transactions, update otherwise
    pub fn save(base: &str, transaction: &Transaction) -> ClientResult<Self> {
        if transaction.is_saved() {
            Self::update(base, transaction)
        } else {
            Self::create(base, transaction)
        }
    }
}

fn to_body(transaction: &Transaction) -> ClientResult<serde_json::Value> {
    serde_json::to_value(transaction).map_err(|e| ClientError::invalid_input(e.to_string()))
}

/// Raw HTTP outcome handed back by a transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests somewhere. Failing to get any response is a `ClientError::Network`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse>;
}

/// Typed client for the transactions resource
#[derive(Clone)]
pub struct TransactionApi<T> {
    transport: T,
    base: String,
}

impl<T: Transport> TransactionApi<T> {
    pub fn new(transport: T, base: impl Into<String>) -> Self {
        Self {
            transport,
            base: base.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch one page of transactions
    pub async fn list(&self, request: PageRequest) -> ClientResult<Page<Transaction>> {
        let response = self.execute(ApiRequest::list(&self.base, request)).await?;
        Page::from_json(&response.body)
    }

    /// Fetch a single transaction
    pub async fn get(&self, id: TransactionId) -> ClientResult<Transaction> {
        let response = self.execute(ApiRequest::get(&self.base, id)).await?;
        decode(&response.body)
    }

    /// POST when the id is zero, PUT to `/{id}` otherwise
    pub async fn save(&self, transaction: &Transaction) -> ClientResult<()> {
        self.execute(ApiRequest::save(&self.base, transaction)?).await?;
        Ok(())
    }

    pub async fn delete(&self, id: TransactionId) -> ClientResult<()> {
        self.execute(ApiRequest::delete(&self.base, id)).await?;
        Ok(())
    }

    async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let operation = request.operation;
        log::debug!("{:?} {}", request.method, request.path);

        let response = self.transport.send(request).await?;
        if !response.ok() {
            return Err(ClientError::Http {
                operation,
                status: response.status,
                body: response.body,
            });
        }
        Ok(response)
    }
}

fn decode<D: DeserializeOwned>(body: &str) -> ClientResult<D> {
    serde_json::from_str(body).map_err(|e| ClientError::invalid_format(e.to_string()))
}
