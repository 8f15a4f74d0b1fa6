pub const LOGIN_PATH: &str = "/";
pub const MAIN_PATH: &str = "/main";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Main,
    NotFound,
}

impl Route {
    /// Maps a location path to a route. Query strings, fragments and a
    /// trailing slash are ignored.
    pub fn recognize(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("").trim();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Login,
            MAIN_PATH => Route::Main,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login | Route::NotFound => LOGIN_PATH,
            Route::Main => MAIN_PATH,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::Main => "Gallery",
            Route::NotFound => "Not found",
        }
    }
}
