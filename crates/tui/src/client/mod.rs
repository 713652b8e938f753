use api_types::{
    account::Account,
    budget::{Budget, BudgetNew, BudgetPage},
    goal::{Goal, GoalNew},
    partner::{Partner, PartnerInvite},
    plaid::{Ack, Exchange, LinkToken},
    transaction::{Transaction, TransactionPage, TransactionPatch, TransactionQuery},
    user::User,
};
use reqwest::{StatusCode, Url, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::error::AppError;

/// One failure mode per leg of a call: the wire, the server, the body.
///
/// A single attempt per call; no retries, no timeout. Server messages are
/// surfaced verbatim so the UI can show exactly what the backend said.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cannot reach the backend at {url}; is it running? ({source})")]
    Unreachable { url: String, source: reqwest::Error },
    #[error("{message}")]
    Server { status: StatusCode, message: String },
    #[error("malformed backend response: {detail}")]
    Malformed { detail: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::Terminal(format!("invalid base_url: {err}")))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url.join(path).map_err(|err| ClientError::Malformed {
            detail: format!("invalid endpoint {path}: {err}"),
        })
    }

    fn unreachable(&self, source: reqwest::Error) -> ClientError {
        ClientError::Unreachable {
            url: self.base_url.to_string(),
            source,
        }
    }

    /// Normalizes the three error-body shapes the backend produces: a JSON
    /// `{error}` body, a plain-text body, or an empty body (reported as
    /// `HTTP <status>`).
    async fn server_error(res: reqwest::Response) -> ClientError {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.error,
            Err(_) if !text.trim().is_empty() => text.trim().to_string(),
            Err(_) => format!("HTTP {}", status.as_u16()),
        };
        ClientError::Server { status, message }
    }

    /// Turns a response into `T`. A 2xx response that is not JSON (an
    /// intermediary serving HTML, say) is its own diagnostic.
    async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ClientError> {
        if !res.status().is_success() {
            return Err(Self::server_error(res).await);
        }

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.contains("json") {
            return Err(ClientError::Malformed {
                detail: format!("expected JSON, got `{content_type}`"),
            });
        }

        res.json::<T>().await.map_err(|err| ClientError::Malformed {
            detail: err.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let res = self
            .http
            .get(self.endpoint(path)?)
            .send()
            .await
            .map_err(|err| self.unreachable(err))?;
        Self::decode(res).await
    }

    async fn get_with_query<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ClientError> {
        let res = self
            .http
            .get(self.endpoint(path)?)
            .query(query)
            .send()
            .await
            .map_err(|err| self.unreachable(err))?;
        Self::decode(res).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let res = self
            .http
            .post(self.endpoint(path)?)
            .json(body)
            .send()
            .await
            .map_err(|err| self.unreachable(err))?;
        Self::decode(res).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let res = self
            .http
            .post(self.endpoint(path)?)
            .send()
            .await
            .map_err(|err| self.unreachable(err))?;
        Self::decode(res).await
    }

    pub async fn me(&self) -> Result<User, ClientError> {
        self.get_json("api/me").await
    }

    pub async fn accounts(&self) -> Result<Vec<Account>, ClientError> {
        self.get_json("api/accounts").await
    }

    pub async fn transactions(
        &self,
        query: &TransactionQuery,
    ) -> Result<TransactionPage, ClientError> {
        self.get_with_query("api/transactions", query).await
    }

    pub async fn update_transaction(
        &self,
        id: &str,
        patch: &TransactionPatch,
    ) -> Result<Transaction, ClientError> {
        let res = self
            .http
            .patch(self.endpoint(&format!("api/transactions/{id}"))?)
            .json(patch)
            .send()
            .await
            .map_err(|err| self.unreachable(err))?;
        Self::decode(res).await
    }

    pub async fn budgets(&self, month: &str) -> Result<BudgetPage, ClientError> {
        self.get_with_query("api/budgets", &[("month", month)]).await
    }

    pub async fn create_budget(&self, body: &BudgetNew) -> Result<Budget, ClientError> {
        self.post_json("api/budgets", body).await
    }

    pub async fn goals(&self) -> Result<Vec<Goal>, ClientError> {
        self.get_json("api/goals").await
    }

    pub async fn create_goal(&self, body: &GoalNew) -> Result<Goal, ClientError> {
        self.post_json("api/goals", body).await
    }

    pub async fn partners(&self) -> Result<Vec<Partner>, ClientError> {
        self.get_json("api/partners").await
    }

    pub async fn invite_partner(&self, body: &PartnerInvite) -> Result<Partner, ClientError> {
        self.post_json("api/partners/invite", body).await
    }

    pub async fn accept_partner(&self, id: &str) -> Result<Partner, ClientError> {
        self.post_empty(&format!("api/partners/{id}/accept")).await
    }

    pub async fn remove_partner(&self, id: &str) -> Result<(), ClientError> {
        let res = self
            .http
            .delete(self.endpoint(&format!("api/partners/{id}"))?)
            .send()
            .await
            .map_err(|err| self.unreachable(err))?;

        if res.status().is_success() {
            return Ok(());
        }
        Err(Self::server_error(res).await)
    }

    pub async fn create_link_token(&self) -> Result<LinkToken, ClientError> {
        self.post_empty("api/plaid/create-link-token").await
    }

    pub async fn exchange_public_token(&self, body: &Exchange) -> Result<Ack, ClientError> {
        self.post_json("api/plaid/exchange", body).await
    }

    pub async fn sync_transactions(&self) -> Result<Ack, ClientError> {
        self.get_json("api/plaid/sync").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::net::SocketAddr;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP response, then closes.
    async fn serve_once(status_line: &str, content_type: &str, body: &str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "{status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len(),
        );
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        addr
    }

    fn client_for(addr: SocketAddr) -> Client {
        Client::new(&format!("http://{addr}/")).unwrap()
    }

    #[tokio::test]
    async fn server_error_message_is_verbatim() {
        let addr = serve_once(
            "HTTP/1.1 401 Unauthorized",
            "application/json",
            r#"{"error":"unauthorized"}"#,
        )
        .await;

        let err = client_for(addr).me().await.unwrap_err();
        assert_eq!(err.to_string(), "unauthorized");
        match err {
            ClientError::Server { status, .. } => assert_eq!(status, StatusCode::UNAUTHORIZED),
            other => panic!("expected Server, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn plain_text_error_body_is_surfaced() {
        let addr = serve_once("HTTP/1.1 500 Internal Server Error", "text/plain", "boom").await;
        let err = client_for(addr).me().await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[tokio::test]
    async fn empty_error_body_falls_back_to_status() {
        let addr = serve_once("HTTP/1.1 502 Bad Gateway", "text/plain", "").await;
        let err = client_for(addr).me().await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[tokio::test]
    async fn html_success_body_is_malformed() {
        let addr = serve_once("HTTP/1.1 200 OK", "text/html", "<html>login</html>").await;
        let err = client_for(addr).me().await.unwrap_err();
        assert!(matches!(err, ClientError::Malformed { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn connection_refused_names_the_base_url() {
        // Bind then drop so the port is (briefly) known-closed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(addr).me().await.unwrap_err();
        match &err {
            ClientError::Unreachable { url, .. } => assert!(url.contains(&addr.to_string())),
            other => panic!("expected Unreachable, got {other:?}"),
        }
        assert!(err.to_string().contains("is it running?"));
    }

    #[tokio::test]
    async fn success_body_decodes() {
        let addr = serve_once(
            "HTTP/1.1 200 OK",
            "application/json",
            r#"{"id":"user-1","email":"demo@example.com","householdId":"household-1"}"#,
        )
        .await;

        let user = client_for(addr).me().await.unwrap();
        assert_eq!(user.id, "user-1");
        assert_eq!(user.household_id, "household-1");
    }
}
