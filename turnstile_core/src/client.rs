use super::error::{self, Error};
use super::login;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// Client for the login API
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Client {
    /// The server to connect to. Should only be the protocol and domain, e.g.
    /// `https://login.your-domain.com`.
    pub server: String,
}

impl Client {
    /// Construct a new client
    pub fn new(server: String) -> Self {
        Self { server }
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

    /// Turn the server's answer into a result.
    ///
    /// ## Errors
    ///
    /// - `Error::Client` for a 4xx. The message is the server's `error` field,
    ///   or the status reason when the body isn't one of ours (for example a
    ///   413 from the body size limit.)
    /// - `Error::Server` for a 5xx
    /// - `Error::Unexpected` for anything else that isn't a 2xx
    async fn handle_response<T>(req: reqwest::RequestBuilder) -> error::Result<T>
    where
        T: DeserializeOwned,
    {
        let resp = req.send().await?;
        let status = resp.status();

        match status.as_u16() {
            200..=299 => Ok(resp.json().await?),
            400..=499 => {
                let message = match resp.json::<error::ErrorResp>().await {
                    Ok(body) => body.error,
                    Err(_) => status
                        .canonical_reason()
                        .unwrap_or("client error")
                        .to_lowercase(),
                };
                Err(Error::Client(message))
            }
            500..=599 => Err(Error::Server),
            _ => Err(Error::Unexpected(status)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn bad_server_url_is_a_url_error() {
        let client = Client::new("not a url".to_string());

        let err = client
            .login(&reqwest::Client::new(), &login::Req::new("a@b.c", "x"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::UrlParse(_)), "got {err:?}");
    }
}
