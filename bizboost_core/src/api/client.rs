use super::error::{self, Error, ErrorResp};
use super::{login, signup, verify};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// Client for the accounts API
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Client {
    /// The server to connect to. Should only be the protocol and domain, e.g.
    /// `https://boost.your-domain.com`.
    pub server: String,
}

impl Client {
    /// Construct a new client
    pub fn new(server: String) -> Self {
        Self { server }
    }

    /// Register a new account. The server sends a verification link to the
    /// given email; the account can't log in until that link is followed.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn signup(
        &self,
        client: &reqwest::Client,
        req: &signup::Req,
    ) -> error::Result<signup::Resp> {
        let url = Url::parse(&self.server)?.join(signup::PATH)?;

        Self::handle_response(client.post(url).json(req)).await
    }

    /// Follow a verification link. Returns the confirmation page.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `send`. For a client error, the message is the
    /// body of the error page.
    pub async fn verify(&self, client: &reqwest::Client, token: &str) -> error::Result<String> {
        let url = Url::parse(&self.server)?.join(&verify::path(token))?;

        Ok(Self::send(client.get(url)).await?.text().await?)
    }

    /// Log into the server.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn login(
        &self,
        client: &reqwest::Client,
        req: &login::Req,
    ) -> error::Result<login::Resp> {
        let url = Url::parse(&self.server)?.join(login::PATH)?;

        Self::handle_response(client.post(url).json(req)).await
    }

    /// Send a request and decode a successful JSON response.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `send`, plus `Error::Http` if the body is not
    /// the JSON we expected.
    async fn handle_response<T>(req: reqwest::RequestBuilder) -> error::Result<T>
    where
        T: DeserializeOwned,
    {
        Ok(Self::send(req).await?.json().await?)
    }

    /// Send a request, interpreting errors in a standard way.
    ///
    /// ## Errors
    ///
    /// - `Ok(..)` if the server returned a success (2xx)
    /// - `Error::Client` if the server returned a client error (4xx)
    /// - `Error::Server` if the server returned a server error (5xx)
    /// - `Error::Unexpected` if the server returned something else (the server is
    ///   not supposed to issue redirects or informational responses.)
    async fn send(req: reqwest::RequestBuilder) -> error::Result<reqwest::Response> {
        let resp = req.send().await?;

        let status = resp.status();

        if status.is_success() {
            Ok(resp)
        } else if status.is_client_error() {
            let body = resp.text().await?;

            // JSON endpoints send `ErrorResp`; the verification page is HTML.
            let message = match serde_json::from_str::<ErrorResp>(&body) {
                Ok(err) => err.message,
                Err(_) => body,
            };

            Err(Error::Client(message))
        } else if status.is_server_error() {
            Err(Error::Server)
        } else {
            Err(Error::Unexpected(status))
        }
    }
}
