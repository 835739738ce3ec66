use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message header shared by directives and events. Fields other than
/// `namespace` and `name` (messageId, payloadVersion, correlationToken, ...)
/// are carried along untouched.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Header {
    pub namespace: String,
    pub name: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Header {
    /// A copy of this header renamed for the matching response event.
    pub fn response(&self, name: &str) -> Header {
        Header {
            name: name.to_string(),
            ..self.clone()
        }
    }
}

/// `{"type": "BearerToken", "token": "..."}`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Scope {
    pub token: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DirectivePayload {
    pub scope: Option<Scope>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Directive {
    pub header: Header,
    #[serde(default)]
    pub payload: DirectivePayload,
}

impl Directive {
    pub fn access_token(&self) -> Option<&str> {
        self.payload
            .scope
            .as_ref()
            .and_then(|scope| scope.token.as_deref())
            .filter(|token| !token.is_empty())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DirectiveEnvelope {
    pub directive: Directive,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Event<P> {
    pub header: Header,
    pub payload: P,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EventEnvelope<P> {
    pub event: Event<P>,
}
