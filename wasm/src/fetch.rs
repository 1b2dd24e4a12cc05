//! `fetch`-backed transport for the prediction endpoint

use shared::{HttpReply, PredictionTransport, TransportError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Window};

/// Posts JSON through the browser's `fetch`; no timeout or cancellation
pub struct FetchTransport {
    window: Window,
}

impl FetchTransport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    async fn send(&self, path: &str, body: String) -> Result<HttpReply, JsValue> {
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(path, &init)?;
        request.headers().set("Content-Type", "application/json")?;

        let response: Response = JsFuture::from(self.window.fetch_with_request(&request))
            .await?
            .dyn_into()?;

        let content_type = response.headers().get("content-type")?;
        let body = JsFuture::from(response.text()?)
            .await?
            .as_string()
            .unwrap_or_default();

        Ok(HttpReply {
            status: response.status(),
            content_type,
            body,
        })
    }
}

impl PredictionTransport for FetchTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply, TransportError> {
        self.send(path, body).await.map_err(|err| {
            let message = err
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
                .or_else(|| err.as_string())
                .unwrap_or_else(|| "fetch failed".to_string());
            TransportError(message)
        })
    }
}
