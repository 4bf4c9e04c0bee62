/// Session-storage key the login page writes the signed-in username under.
pub const USERNAME_KEY: &str = "username";

/// Who is signed in, as far as the views are concerned. Provided through
/// Leptos context by the app shell; views read it, they never write it.
///
/// The shell reads session storage once, when the app starts. That holds as
/// long as logging in and out does a full page load; a client-side login
/// would need to refresh this context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub username: Option<String>,
}

impl AuthContext {
    pub fn signed_in(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    /// Reads `sessionStorage.username`. Storage that cannot be reached (SSR,
    /// privacy mode, native tests) means signed out.
    pub fn from_session_storage() -> Self {
        Self {
            username: stored_username(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn stored_username() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.session_storage().ok().flatten())
        .and_then(|storage| storage.get_item(USERNAME_KEY).ok().flatten())
}

#[cfg(not(target_arch = "wasm32"))]
fn stored_username() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_iff_username_present() {
        assert!(AuthContext::signed_in("jo").is_authenticated());
        assert!(!AuthContext::anonymous().is_authenticated());
        // An empty string is still a stored value.
        assert!(AuthContext::signed_in("").is_authenticated());
    }

    #[test]
    fn test_no_storage_off_browser() {
        assert_eq!(AuthContext::from_session_storage(), AuthContext::anonymous());
    }
}
