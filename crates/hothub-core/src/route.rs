/// A resolved navigation destination.
///
/// The pattern set is fixed: exact root, parameterized video detail, exact
/// admin root, exact admin login, and a wildcard fallback. Parsing never
/// fails — malformed paths land on `NotFound`, never a blank screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Video(String),
    Admin,
    AdminLogin,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["video", id] => Route::Video((*id).to_string()),
            ["admin"] => Route::Admin,
            ["admin", "login"] => Route::AdminLogin,
            _ => Route::NotFound(normalize(trimmed)),
        }
    }

    /// Whether this destination is under the admin path prefix.
    ///
    /// The offer layer keys off the prefix, not the resolved page: an unknown
    /// path like `/admin/stats` renders NotFound but still suppresses the
    /// popup surfaces, matching an address-bar prefix test.
    pub fn under_admin(&self) -> bool {
        match self {
            Route::Admin | Route::AdminLogin => true,
            Route::NotFound(path) => path == "/admin" || path.starts_with("/admin/"),
            Route::Home | Route::Video(_) => false,
        }
    }

    /// Canonical path for display in the address line.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Video(id) => format!("/video/{id}"),
            Route::Admin => "/admin".to_string(),
            Route::AdminLogin => "/admin/login".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

fn normalize(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_patterns_resolve() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/video/42"), Route::Video("42".to_string()));
        assert_eq!(Route::parse("/admin"), Route::Admin);
        assert_eq!(Route::parse("/admin/login"), Route::AdminLogin);
    }

    #[test]
    fn trailing_slashes_are_tolerated() {
        assert_eq!(Route::parse("/video/42/"), Route::Video("42".to_string()));
        assert_eq!(Route::parse("/admin/login/"), Route::AdminLogin);
    }

    #[test]
    fn unknown_shapes_fall_through_to_not_found() {
        assert_eq!(
            Route::parse("/video"),
            Route::NotFound("/video".to_string())
        );
        assert_eq!(
            Route::parse("/video/42/comments"),
            Route::NotFound("/video/42/comments".to_string())
        );
        assert_eq!(
            Route::parse("/bogus"),
            Route::NotFound("/bogus".to_string())
        );
    }

    #[test]
    fn admin_prefix_covers_unknown_admin_paths() {
        assert!(Route::Admin.under_admin());
        assert!(Route::AdminLogin.under_admin());
        assert!(Route::parse("/admin/stats").under_admin());
        assert!(!Route::Home.under_admin());
        assert!(!Route::parse("/administrate").under_admin());
    }

    #[test]
    fn paths_round_trip_for_known_routes() {
        for path in ["/", "/video/abc", "/admin", "/admin/login"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }
}
