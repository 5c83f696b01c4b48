use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Tracker,
    #[at("/stats")]
    Stats,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Tracker => "Board",
            Self::Stats => "Stats",
            Self::NotFound => "Not found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_from_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Tracker));
        assert_eq!(Route::recognize("/stats"), Some(Route::Stats));
        assert_eq!(Route::Stats.to_path(), "/stats");
    }
}
