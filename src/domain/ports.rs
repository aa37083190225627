use serde_json::Value;

/// The four logical endpoints. Both transports dispatch through this enum so
/// routing knowledge lives in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    Projects,
    Skills,
    Contact,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Health,
        Endpoint::Projects,
        Endpoint::Skills,
        Endpoint::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Health => "/api/health",
            Endpoint::Projects => "/api/projects",
            Endpoint::Skills => "/api/skills",
            Endpoint::Contact => "/api/contact",
        }
    }

    /// The verb the endpoint answers, as advertised in CORS preflight.
    pub fn allowed_methods(&self) -> &'static str {
        match self {
            Endpoint::Contact => "POST, OPTIONS",
            _ => "GET, OPTIONS",
        }
    }

    /// CORS header set carried by every response from this endpoint,
    /// preflight included. Both transports must attach these verbatim.
    pub fn cors_headers(&self) -> [(&'static str, &'static str); 3] {
        [
            ("Access-Control-Allow-Origin", "*"),
            ("Access-Control-Allow-Headers", "Content-Type"),
            ("Access-Control-Allow-Methods", self.allowed_methods()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Options,
    Other,
}

impl HttpMethod {
    /// Exact uppercase token match; anything else falls through to `Other`
    /// and is answered with 405 by the handlers.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "OPTIONS" => HttpMethod::Options,
            _ => HttpMethod::Other,
        }
    }
}

/// Transport-agnostic response: a status code and an optional JSON body.
/// `None` means the empty preflight body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    pub fn preflight() -> Self {
        Self {
            status: 200,
            body: None,
        }
    }

    /// Serialized body, or the empty string for preflight.
    pub fn body_string(&self) -> String {
        match &self.body {
            Some(value) => value.to_string(),
            None => String::new(),
        }
    }
}
