/// Path-style addresses of the application's screens
use crate::state::filter::Criteria;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    /// Browse screen, optionally seeded with filter values
    Adopt(Criteria),
    PetDetails(String),
    ListPet,
    HowItWorks,
    About,
    Resources,
    Contact,
    Favorites,
    SignIn,
    /// Any unrecognised path, kept for display
    NotFound(String),
}

impl Route {
    /// Parse a path such as `/adopt?type=dog` or `/pet/3`
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, query),
            None => (input, ""),
        };
        let path = path.trim_end_matches('/');

        match path {
            "" => Route::Home,
            "/adopt" => Route::Adopt(Criteria::from_query(query)),
            "/list-pet" => Route::ListPet,
            "/how-it-works" => Route::HowItWorks,
            "/about" => Route::About,
            "/resources" => Route::Resources,
            "/contact" => Route::Contact,
            "/favorites" => Route::Favorites,
            "/login" => Route::SignIn,
            _ => match path.strip_prefix("/pet/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::PetDetails(id.to_string())
                }
                _ => Route::NotFound(input.to_string()),
            },
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Adopt(criteria) => {
                let query = criteria.to_query();
                if query.is_empty() {
                    "/adopt".into()
                } else {
                    format!("/adopt?{query}")
                }
            }
            Route::PetDetails(id) => format!("/pet/{id}"),
            Route::ListPet => "/list-pet".into(),
            Route::HowItWorks => "/how-it-works".into(),
            Route::About => "/about".into(),
            Route::Resources => "/resources".into(),
            Route::Contact => "/contact".into(),
            Route::Favorites => "/favorites".into(),
            Route::SignIn => "/login".into(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Window title suffix for the screen
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Adopt(_) => "Adopt",
            Route::PetDetails(_) => "Pet Profile",
            Route::ListPet => "List a Pet",
            Route::HowItWorks => "How It Works",
            Route::About => "About",
            Route::Resources => "Resources",
            Route::Contact => "Contact",
            Route::Favorites => "Favorites",
            Route::SignIn => "Sign In",
            Route::NotFound(_) => "Not Found",
        }
    }
}
