//! Level-up reward call
//!
//! `POST /api/wenp/reward` with `{ "wallet": ..., "level": ... }`. Fire and
//! forget: failures are logged and never touch game state. Nothing is sent
//! unless the player has configured a wallet.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::GameEvent;

/// Default reward endpoint (same origin)
pub const DEFAULT_REWARD_ENDPOINT: &str = "/api/wenp/reward";

/// Request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRequest {
    pub wallet: String,
    pub level: u32,
}

impl RewardRequest {
    pub fn to_json(&self) -> Result<String, RewardError> {
        serde_json::to_string(self).map_err(|e| RewardError::Encode(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewardError {
    #[error("could not encode reward request: {0}")]
    Encode(String),
    #[error("reward request failed: {0}")]
    Network(String),
    #[error("reward endpoint answered {0}")]
    Status(u16),
}

/// Where reward requests go
pub trait RewardSink {
    /// Send without blocking the game loop
    fn send(&self, request: RewardRequest);
}

/// Drops every request
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRewards;

impl RewardSink for NoRewards {
    fn send(&self, request: RewardRequest) {
        log::debug!("Reward for level {} not sent (disabled)", request.level);
    }
}

/// Reward request owed for an event, if any
pub fn reward_for(event: &GameEvent, wallet: Option<&str>) -> Option<RewardRequest> {
    let wallet = wallet.filter(|w| !w.trim().is_empty())?;
    match event {
        GameEvent::LevelUp { level, .. } => Some(RewardRequest {
            wallet: wallet.to_string(),
            level: *level,
        }),
        _ => None,
    }
}

/// Browser `fetch` sink
#[cfg(target_arch = "wasm32")]
pub struct FetchRewards {
    pub endpoint: String,
}

#[cfg(target_arch = "wasm32")]
impl FetchRewards {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    async fn post(endpoint: &str, request: &RewardRequest) -> Result<(), RewardError> {
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, RequestMode, Response};

        let network = |e: JsValue| RewardError::Network(format!("{:?}", e));

        let body = request.to_json()?;
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let req = Request::new_with_str_and_init(endpoint, &opts).map_err(network)?;
        req.headers()
            .set("Content-Type", "application/json")
            .map_err(network)?;

        let window = web_sys::window().ok_or_else(|| RewardError::Network("no window".into()))?;
        let resp = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(network)?;
        let resp: Response = resp.dyn_into().map_err(network)?;
        if resp.ok() {
            Ok(())
        } else {
            Err(RewardError::Status(resp.status()))
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl RewardSink for FetchRewards {
    fn send(&self, request: RewardRequest) {
        let endpoint = self.endpoint.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match Self::post(&endpoint, &request).await {
                Ok(()) => log::info!("Reward sent for level {}", request.level),
                Err(e) => log::error!("{}", e),
            }
        });
    }
}
