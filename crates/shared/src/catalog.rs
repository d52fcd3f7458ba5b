use std::{fmt, str::FromStr};

use serde_json::{json, Value};
use thiserror::Error;

/// The two route layouts the target servers have shipped with. `Classic`
/// spells every operation as a POST-style action path, `Rest` folds them
/// onto resource paths with the method carrying the verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteConvention {
    Classic,
    Rest,
}

impl RouteConvention {
    pub const ALL: [RouteConvention; 2] = [RouteConvention::Classic, RouteConvention::Rest];
}

#[derive(Debug, Error)]
#[error("unknown route convention '{0}', expected 'classic' or 'rest'")]
pub struct UnknownConvention(String);

impl FromStr for RouteConvention {
    type Err = UnknownConvention;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(RouteConvention::Classic),
            "rest" => Ok(RouteConvention::Rest),
            other => Err(UnknownConvention(other.to_string())),
        }
    }
}

impl fmt::Display for RouteConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteConvention::Classic => write!(f, "classic"),
            RouteConvention::Rest => write!(f, "rest"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCall {
    ClearDatabase,
    Register,
    Login,
    Logout,
    ListGames,
    CreateGame,
    JoinGame,
}

impl ApiCall {
    pub const ALL: [ApiCall; 7] = [
        ApiCall::ClearDatabase,
        ApiCall::Register,
        ApiCall::Login,
        ApiCall::Logout,
        ApiCall::ListGames,
        ApiCall::CreateGame,
        ApiCall::JoinGame,
    ];

    pub fn from_word(word: &str) -> Option<ApiCall> {
        match word {
            "clear" => Some(ApiCall::ClearDatabase),
            "register" => Some(ApiCall::Register),
            "login" => Some(ApiCall::Login),
            "logout" => Some(ApiCall::Logout),
            "list" => Some(ApiCall::ListGames),
            "create" => Some(ApiCall::CreateGame),
            "join" => Some(ApiCall::JoinGame),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestTemplate {
    pub method: &'static str,
    pub path: &'static str,
    pub body: Option<Value>,
}

/// Builds the method, path, and placeholder body for one API call under
/// the given convention. Placeholder values name the field they stand in
/// for so the rendered form documents the wire contract.
pub fn template(convention: RouteConvention, call: ApiCall) -> RequestTemplate {
    use ApiCall::*;
    use RouteConvention::*;

    let (method, path) = match (convention, call) {
        (Classic, ClearDatabase) => ("POST", "/clear"),
        (Classic, Register) => ("POST", "/user/register"),
        (Classic, Login) => ("POST", "/user/login"),
        (Classic, Logout) => ("POST", "/user/logout"),
        (Classic, ListGames) => ("GET", "/games/list"),
        (Classic, CreateGame) => ("POST", "/games/create"),
        (Classic, JoinGame) => ("POST", "/games/join"),
        (Rest, ClearDatabase) => ("DELETE", "/db"),
        (Rest, Register) => ("POST", "/user"),
        (Rest, Login) => ("POST", "/session"),
        (Rest, Logout) => ("DELETE", "/session"),
        (Rest, ListGames) => ("GET", "/game"),
        (Rest, CreateGame) => ("POST", "/game"),
        (Rest, JoinGame) => ("PUT", "/game"),
    };

    RequestTemplate {
        method,
        path,
        body: placeholder_body(convention, call),
    }
}

fn placeholder_body(convention: RouteConvention, call: ApiCall) -> Option<Value> {
    match call {
        ApiCall::Register => Some(json!({
            "username": "username",
            "password": "password",
            "email": "email",
        })),
        ApiCall::Login => Some(json!({
            "username": "username",
            "password": "password",
        })),
        ApiCall::CreateGame => Some(json!({ "gameName": "gameName" })),
        ApiCall::JoinGame => {
            let color_hint = match convention {
                RouteConvention::Classic => "WHITE/BLACK",
                RouteConvention::Rest => "WHITE/BLACK/empty",
            };
            Some(json!({ "playerColor": color_hint, "gameID": 0 }))
        }
        ApiCall::ClearDatabase | ApiCall::Logout | ApiCall::ListGames => None,
    }
}
