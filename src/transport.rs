//! Fire-and-forget delivery of commands to the host.
//! Failures are logged and dropped; nothing is retried and nothing flows back
//! into gesture state.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestInit, Response};

use crate::model::{Command, Settings, WireStyle};
use crate::util::cerr;

pub trait CommandSender {
    /// Hands the command off. Must not block or report back.
    fn submit(&self, command: Command);
}

#[derive(Debug, Error)]
pub enum SendError {
    #[error("no browser window")]
    NoWindow,
    #[error("could not build request: {0}")]
    Request(String),
    #[error("fetch rejected: {0}")]
    Fetch(String),
    #[error("host answered {status} for {url}")]
    Status { status: u16, url: String },
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn for_command(command: &Command, style: WireStyle, base_url: &str) -> Result<Self, SendError> {
        match style {
            WireStyle::Json => Ok(Self {
                method: "POST",
                url: format!("{}/{}", base_url, command.name()),
                body: Some(serde_json::to_string(command)?),
            }),
            WireStyle::Path => {
                let args = match command {
                    Command::Move { x, y } => format!("{x}/{y}"),
                    Command::Scroll { y } => y.to_string(),
                    Command::Click { kind } => kind.as_str().to_string(),
                    Command::Type { key } => urlencoding::encode(&key.wire_name()).into_owned(),
                };
                Ok(Self {
                    method: "GET",
                    url: format!("{}/{}/{}", base_url, command.name(), args),
                    body: None,
                })
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpSender {
    base_url: String,
    style: WireStyle,
}

impl HttpSender {
    pub fn new(settings: &Settings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            style: settings.wire_style,
        }
    }

    pub async fn send(request: &HttpRequest) -> Result<(), SendError> {
        let window = web_sys::window().ok_or(SendError::NoWindow)?;
        let init = RequestInit::new();
        init.set_method(request.method);
        if let Some(body) = &request.body {
            let headers = Headers::new().map_err(|e| SendError::Request(js_message(&e)))?;
            headers
                .set("Content-Type", "application/json")
                .map_err(|e| SendError::Request(js_message(&e)))?;
            init.set_headers(&headers);
            init.set_body(&JsValue::from_str(body));
        }
        let promise = window.fetch_with_str_and_init(&request.url, &init);
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| SendError::Fetch(js_message(&e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|v| SendError::Fetch(format!("not a response: {}", js_message(&v))))?;
        if !response.ok() {
            return Err(SendError::Status {
                status: response.status(),
                url: request.url.clone(),
            });
        }
        Ok(())
    }
}

impl CommandSender for HttpSender {
    fn submit(&self, command: Command) {
        let request = match HttpRequest::for_command(&command, self.style, &self.base_url) {
            Ok(r) => r,
            Err(err) => {
                cerr(&format!("{} error: {err}", command.name()));
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = HttpSender::send(&request).await {
                cerr(&format!("{} error: {err}", command.name()));
            }
        });
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::{ClickKind, Key};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::RefCell;

    /// Records submissions instead of sending them.
    #[derive(Default)]
    pub(crate) struct RecordingSender(RefCell<Vec<Command>>);

    impl RecordingSender {
        pub(crate) fn take(&self) -> Vec<Command> {
            std::mem::take(&mut *self.0.borrow_mut())
        }
    }

    impl CommandSender for RecordingSender {
        fn submit(&self, command: Command) {
            self.0.borrow_mut().push(command);
        }
    }

    #[test]
    fn json_style_posts_payload() {
        let req = HttpRequest::for_command(&Command::Move { x: 4, y: -8 }, WireStyle::Json, "").unwrap();
        assert_eq!(
            req,
            HttpRequest {
                method: "POST",
                url: "/move".into(),
                body: Some(r#"{"x":4,"y":-8}"#.into()),
            }
        );
    }

    #[test]
    fn json_style_respects_base_url() {
        let req = HttpRequest::for_command(
            &Command::Click { kind: ClickKind::Right },
            WireStyle::Json,
            "http://desk.local:5000",
        )
        .unwrap();
        assert_eq!(req.url, "http://desk.local:5000/click");
        assert_eq!(req.body.as_deref(), Some(r#"{"type":"right"}"#));
    }

    #[rstest]
    #[case(Command::Move { x: -3, y: 12 }, "/move/-3/12")]
    #[case(Command::Scroll { y: -2 }, "/scroll/-2")]
    #[case(Command::Click { kind: ClickKind::Left }, "/click/left")]
    #[case(Command::Type { key: Key::Backspace }, "/type/backspace")]
    #[case(Command::Type { key: Key::Char('/') }, "/type/%2F")]
    #[case(Command::Type { key: Key::Char('?') }, "/type/%3F")]
    fn path_style_encodes_arguments(#[case] command: Command, #[case] url: &str) {
        let req = HttpRequest::for_command(&command, WireStyle::Path, "").unwrap();
        assert_eq!(req.method, "GET");
        assert_eq!(req.url, url);
        assert_eq!(req.body, None);
    }

    #[test]
    fn send_error_messages() {
        let err = SendError::Status { status: 500, url: "/click".into() };
        assert_eq!(err.to_string(), "host answered 500 for /click");
        assert_eq!(SendError::NoWindow.to_string(), "no browser window");
    }
}
