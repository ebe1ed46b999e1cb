use std::fmt;

/// Opaque session credential passed through to authenticated endpoints.
/// The token value never appears in Debug output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Which service a request is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiBase {
    /// The panel backend (`servers/...`, `subdomains/...`)
    Panel,
    /// The modpack catalog (`version/...`, `project/...`)
    Catalog,
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(serde_json::Value),
    Text(String),
}

/// A single request as handed to a [`Transport`](crate::Transport)
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub base: ApiBase,
    pub path: String,
    pub auth: Option<SessionToken>,
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    pub fn get<P: Into<String>>(base: ApiBase, path: P) -> Self {
        Self::new(Method::Get, base, path)
    }

    pub fn post<P: Into<String>>(base: ApiBase, path: P) -> Self {
        Self::new(Method::Post, base, path)
    }

    pub fn put<P: Into<String>>(base: ApiBase, path: P) -> Self {
        Self::new(Method::Put, base, path)
    }

    pub fn delete<P: Into<String>>(base: ApiBase, path: P) -> Self {
        Self::new(Method::Delete, base, path)
    }

    fn new<P: Into<String>>(method: Method, base: ApiBase, path: P) -> Self {
        Self {
            method,
            base,
            path: path.into(),
            auth: None,
            body: None,
        }
    }

    pub fn authed(mut self, auth: &SessionToken) -> Self {
        self.auth = Some(auth.clone());
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    pub fn text<S: Into<String>>(mut self, body: S) -> Self {
        self.body = Some(RequestBody::Text(body.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_debug_is_redacted() {
        let token = SessionToken::new("secret-value");
        assert_eq!(format!("{:?}", token), "SessionToken(..)");
        assert_eq!(token.as_str(), "secret-value");
    }
}
