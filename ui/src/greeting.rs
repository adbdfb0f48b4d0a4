//! Best-effort greeting shown above the hero headline.
//!
//! One GET to `{BACKEND_URL}/api/hello` per mount. Every failure collapses
//! into an empty greeting so the page stays usable with no backend at all.

use leptos::prelude::{Get, Signal};
use leptos::server::LocalResource;
use serde::Deserialize;

pub const HELLO_PATH: &str = "/api/hello";

/// Backend base baked in at build time. Empty means same-origin.
pub fn backend_base() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")
}

pub fn hello_url(base: &str) -> String {
    format!("{}{}", base.strip_suffix('/').unwrap_or(base), HELLO_PATH)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GreetingState {
    Pending,
    Ready(String),
    Unavailable,
}

impl GreetingState {
    /// What the view shows. Pending and Unavailable are indistinguishable here.
    pub fn display(&self) -> &str {
        match self {
            GreetingState::Ready(msg) => msg,
            GreetingState::Pending | GreetingState::Unavailable => "",
        }
    }
}

/// Status and body of a finished response, before any interpretation.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub ok: bool,
    pub body: String,
}

#[derive(Deserialize)]
struct HelloBody {
    #[serde(default)]
    message: Option<String>,
}

/// Where the greeting comes from. The browser uses [`GlooSource`].
#[allow(async_fn_in_trait)]
pub trait GreetingSource {
    async fn get(&self, url: &str) -> anyhow::Result<RawResponse>;
}

pub struct GlooSource;

impl GreetingSource for GlooSource {
    async fn get(&self, url: &str) -> anyhow::Result<RawResponse> {
        let resp = gloo_net::http::Request::get(url).send().await?;
        let ok = resp.ok();
        let body = resp.text().await?;
        Ok(RawResponse { ok, body })
    }
}

pub fn interpret(raw: &RawResponse) -> anyhow::Result<GreetingState> {
    if !raw.ok {
        anyhow::bail!("greeting endpoint returned a non-success status");
    }
    let body: HelloBody = serde_json::from_str(&raw.body)?;
    Ok(GreetingState::Ready(body.message.unwrap_or_default()))
}

pub async fn load_greeting<S: GreetingSource>(source: &S, url: &str) -> GreetingState {
    let outcome = match source.get(url).await {
        Ok(raw) => interpret(&raw),
        Err(e) => Err(e),
    };

    // the cause is dropped on purpose: the greeting is cosmetic
    outcome.unwrap_or(GreetingState::Unavailable)
}

/// Fetches once for the lifetime of the calling component.
///
/// The resource belongs to the caller's reactive owner, so a response that
/// lands after unmount is dropped instead of written.
pub fn use_greeting() -> Signal<String> {
    let url = hello_url(backend_base());
    let greeting = LocalResource::new(move || {
        let url = url.clone();
        async move { load_greeting(&GlooSource, &url).await }
    });

    Signal::derive(move || {
        greeting
            .get()
            .unwrap_or(GreetingState::Pending)
            .display()
            .to_owned()
    })
}
