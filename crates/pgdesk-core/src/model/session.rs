use serde::Serialize;

/// Session container state.
///
/// The token itself lives in the shared `TokenHolder`; this state only
/// carries what presentation code reads. `authenticated` is derived --
/// true iff a token is held -- and says nothing about token validity,
/// since the client never parses or verifies it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    pub authenticated: bool,
    /// Display name of the signed-in operator, when the auth service
    /// provided one.
    pub current_user: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Operator input for `register`.
#[derive(Debug, Clone)]
pub struct RegisterProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Operator input for `login`.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
