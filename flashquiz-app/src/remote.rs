use async_trait::async_trait;
use flashquiz_core::{CoreError, DeckApi, DeckValue, SaveReceipt};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::dto::{KeysResp, LoadResp, MsgResp, SaveOut, ScoreOut};

/// `DeckApi` over the deck server's HTTP endpoints.
#[derive(Clone)]
pub struct RemoteApi {
    base: String,
    http: reqwest::Client,
}

impl RemoteApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: impl reqwest::IntoUrl,
    ) -> Result<T, CoreError> {
        let resp = self.http.get(url).send().await.map_err(network)?;
        check(resp).await?.json().await.map_err(network)
    }
}

fn network(e: reqwest::Error) -> CoreError {
    CoreError::Network(e.to_string())
}

async fn check(resp: Response) -> Result<Response, CoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    debug!(%status, body = %body, "server rejected request");
    match status {
        StatusCode::NOT_FOUND => Err(CoreError::NotFound("deck")),
        StatusCode::BAD_REQUEST => Err(CoreError::Validation("rejected by server")),
        _ => Err(CoreError::Storage("server error")),
    }
}

#[async_trait]
impl DeckApi for RemoteApi {
    async fn save_deck(&self, name: &str, value: DeckValue) -> Result<SaveReceipt, CoreError> {
        let resp = self
            .http
            .post(self.url("save"))
            .json(&SaveOut { name, value: &value })
            .send()
            .await
            .map_err(network)?;
        check(resp).await?.json().await.map_err(network)
    }

    async fn load_deck(&self, name: &str) -> Result<DeckValue, CoreError> {
        let url = Url::parse_with_params(&self.url("load"), &[("name", name)])
            .map_err(|_| CoreError::Validation("bad server url"))?;
        let resp: LoadResp = self.get_json(url).await?;
        Ok(resp.value)
    }

    async fn list_decks(&self) -> Result<Vec<String>, CoreError> {
        let resp: KeysResp = self.get_json(self.url("list")).await?;
        Ok(resp.keys)
    }

    async fn save_score(&self, record: &str) -> Result<(), CoreError> {
        let resp = self
            .http
            .post(self.url("saveScores"))
            .json(&ScoreOut { value: record })
            .send()
            .await
            .map_err(network)?;
        let _: MsgResp = check(resp).await?.json().await.map_err(network)?;
        Ok(())
    }

    async fn list_scores(&self) -> Result<Vec<String>, CoreError> {
        let resp: KeysResp = self.get_json(self.url("listScores")).await?;
        Ok(resp.keys)
    }
}
