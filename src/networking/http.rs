//! JSON-over-HTTP move authority
//!
//! | Operation             | Route                  | Body / reply                         |
//! |-----------------------|------------------------|--------------------------------------|
//! | submit human move     | `POST api/move`        | `{"move": token}` → `{"result": s}`  |
//! | request opponent move | `POST api/ai_move`     | → `{"result": s}`                    |
//! | fetch position        | `GET  api/fen`         | → `{"fen": s}`                       |
//! | fetch move history    | `GET  api/moves`       | → `[s, ...]`                         |
//! | fetch statistics      | `GET  api/performance` | → [`Statistics`]                     |
//! | reset game            | `POST api/reset`       | reply ignored                        |
//!
//! Routes are resolved against the configured base URL, so a base with a path
//! prefix (`http://host/chess/`) works too.

use crate::networking::{AuthorityError, AuthorityResult, MoveAuthority, Statistics};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub const MOVE_ROUTE: &str = "api/move";
pub const AI_MOVE_ROUTE: &str = "api/ai_move";
pub const FEN_ROUTE: &str = "api/fen";
pub const MOVES_ROUTE: &str = "api/moves";
pub const PERFORMANCE_ROUTE: &str = "api/performance";
pub const RESET_ROUTE: &str = "api/reset";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveBody {
    #[serde(rename = "move")]
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultBody {
    pub result: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FenBody {
    pub fen: String,
}

pub struct HttpMoveAuthority {
    client: Client,
    base: Url,
}

impl HttpMoveAuthority {
    pub fn new(base: Url, timeout: Duration) -> AuthorityResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base))
    }

    /// Use a preconfigured `reqwest` client
    pub fn with_client(client: Client, mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        info!("[AUTHORITY] Using move authority at {}", base);
        Self { client, base }
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, route: &str) -> AuthorityResult<Url> {
        self.base.join(route).map_err(|e| AuthorityError::Transport {
            message: format!("cannot build URL for {}: {}", route, e),
        })
    }

    async fn get(&self, operation: &'static str, route: &str) -> AuthorityResult<Response> {
        let url = self.endpoint(route)?;
        debug!("[AUTHORITY] GET {}", url);
        let response = self.client.get(url).send().await?;
        check_status(operation, response).await
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        route: &str,
        body: Option<&B>,
    ) -> AuthorityResult<Response> {
        let url = self.endpoint(route)?;
        debug!("[AUTHORITY] POST {}", url);
        let mut request = self.client.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        check_status(operation, response).await
    }
}

async fn check_status(operation: &'static str, response: Response) -> AuthorityResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AuthorityError::Status {
        operation,
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl MoveAuthority for HttpMoveAuthority {
    async fn submit_human_move(&self, token: &str) -> AuthorityResult<String> {
        let body = MoveBody {
            token: token.to_string(),
        };
        let response = self.post("submit human move", MOVE_ROUTE, Some(&body)).await?;
        Ok(response.json::<ResultBody>().await?.result)
    }

    async fn request_opponent_move(&self) -> AuthorityResult<String> {
        let response = self
            .post::<()>("request opponent move", AI_MOVE_ROUTE, None)
            .await?;
        Ok(response.json::<ResultBody>().await?.result)
    }

    async fn fetch_position(&self) -> AuthorityResult<String> {
        let response = self.get("fetch position", FEN_ROUTE).await?;
        Ok(response.json::<FenBody>().await?.fen)
    }

    async fn fetch_move_history(&self) -> AuthorityResult<Vec<String>> {
        let response = self.get("fetch move history", MOVES_ROUTE).await?;
        Ok(response.json().await?)
    }

    async fn fetch_statistics(&self) -> AuthorityResult<Statistics> {
        let response = self.get("fetch statistics", PERFORMANCE_ROUTE).await?;
        Ok(response.json().await?)
    }

    async fn reset_game(&self) -> AuthorityResult<()> {
        self.post::<()>("reset game", RESET_ROUTE, None).await?;
        Ok(())
    }
}
