use web_sys::window;

const TOKEN_KEY: &str = "token";
const ADMIN_USERNAME_KEY: &str = "admin_username";
const ADMIN_FULLNAME_KEY: &str = "admin_fullname";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save session token and admin identity to localStorage
pub fn save_session(token: &str, username: &str, full_name: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(ADMIN_USERNAME_KEY, username);
        let _ = storage.set_item(ADMIN_FULLNAME_KEY, full_name);
    }
}

/// Get session token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// Display name of the logged in admin, empty if unknown
pub fn get_admin_fullname() -> String {
    get_local_storage()
        .and_then(|s| s.get_item(ADMIN_FULLNAME_KEY).ok().flatten())
        .unwrap_or_default()
}

/// Clear token and admin identity
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(ADMIN_USERNAME_KEY);
        let _ = storage.remove_item(ADMIN_FULLNAME_KEY);
    }
}
