//! Top-level navigation targets.

/// Which page is showing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Route {
    #[default]
    Home,
    /// Details page for a catalog movie.
    Movie(u64),
    Login,
    Signup,
    Profile,
}

impl Route {
    /// Window title for this page.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "MovieScout",
            Self::Movie(_) => "MovieScout - Movie",
            Self::Login => "MovieScout - Log in",
            Self::Signup => "MovieScout - Sign up",
            Self::Profile => "MovieScout - Profile",
        }
    }

    /// Path-style name, used in logs.
    pub fn path(self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Movie(id) => format!("/movies/{id}"),
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Profile => "/profile".to_string(),
        }
    }
}
