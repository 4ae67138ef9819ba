use serde::{Deserialize, Serialize};

/// Identity of a signed-in user, supplied by the embedding application.
///
/// Services take `Option<&AuthenticatedUser>`; `None` means the current
/// visitor is not signed in and may not start the draft workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub email: String,
    pub name: String,
}
