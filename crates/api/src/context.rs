use shopfront_core::UserId;

/// Authenticated user context for a request.
///
/// Immutable; inserted by the auth middleware and required by admin routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    user_id: UserId,
    email: String,
    name: String,
}

impl UserContext {
    pub fn new(user_id: UserId, email: String, name: String) -> Self {
        Self {
            user_id,
            email,
            name,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
