//! Static route tables for the admin console and the public site

/// Page a route renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    AdminHome,
    AdminEvents,
    AdminUsers,
    AdminAttendance,
    AdminMailingList,
    AdminFaq,
    AdminSponsors,
    AdminImages,
    Home,
    Events,
    Contact,
    Apply,
    About,
    Faq,
    Sponsors,
    Team,
    Legal,
    UserDashboard,
    UserProfile,
    LoginCallback,
    /// Send the visitor elsewhere
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
    pub title: &'static str,
    /// Heading shown instead of the title
    pub display: Option<&'static str>,
    /// Match only the path itself, not paths below it
    pub exact: bool,
}

impl Route {
    const fn new(path: &'static str, page: Page, title: &'static str) -> Self {
        Self {
            path,
            page,
            title,
            display: None,
            exact: false,
        }
    }

    const fn exact(mut self) -> Self {
        self.exact = true;
        self
    }

    const fn display(mut self, display: &'static str) -> Self {
        self.display = Some(display);
        self
    }

    pub fn heading(&self) -> &'static str {
        self.display.unwrap_or(self.title)
    }

    pub fn redirect_target(&self) -> Option<&'static str> {
        match self.page {
            Page::Redirect(to) => Some(to),
            _ => None,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        if self.exact {
            return path == self.path;
        }
        if self.path == "/" {
            return path.starts_with('/');
        }
        match path.strip_prefix(self.path) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

pub static ADMIN_ROUTES: &[Route] = &[
    Route::new("/admin/home", Page::AdminHome, "Dashboard"),
    Route::new("/admin/events", Page::AdminEvents, "Events"),
    Route::new("/admin/users", Page::AdminUsers, "Users"),
    Route::new("/admin/attendance", Page::AdminAttendance, "Attendance + Management"),
    Route::new("/admin/mailing-list", Page::AdminMailingList, "Mailing List"),
    Route::new("/admin/faq", Page::AdminFaq, "FAQs"),
    Route::new("/admin/sponsors", Page::AdminSponsors, "Sponsors"),
    Route::new("/admin/images", Page::AdminImages, "Images"),
];

pub static PUBLIC_ROUTES: &[Route] = &[
    // top level
    Route::new("/", Page::Home, "Home").exact().display("Welcome!"),
    Route::new("/events", Page::Events, "Events"),
    Route::new("/contact", Page::Contact, "Contact"),
    Route::new("/apply", Page::Apply, "Apply"),
    // about
    Route::new("/about", Page::About, "About").exact(),
    Route::new("/about/faq", Page::Faq, "FAQ").display("Frequently Asked Questions"),
    Route::new("/about/sponsors", Page::Sponsors, "Sponsors"),
    Route::new("/about/team", Page::Team, "Team").display("Meet the Team"),
    Route::new("/about/legal", Page::Legal, "Legal"),
    // user
    Route::new("/user", Page::Redirect("/user/dashboard"), "Dashboard").exact(),
    Route::new("/user/dashboard", Page::UserDashboard, "Dashboard"),
    Route::new("/user/profile", Page::UserProfile, "Profile"),
    // utility
    Route::new("/callback", Page::LoginCallback, "Logging in..."),
];

/// Ordered route list; the first match wins
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [Route],
}

impl RouteTable {
    pub fn admin() -> Self {
        Self { routes: ADMIN_ROUTES }
    }

    pub fn public() -> Self {
        Self { routes: PUBLIC_ROUTES }
    }

    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    pub fn resolve(&self, path: &str) -> Option<&'static Route> {
        let path = match path.split(&['?', '#'][..]).next() {
            Some(p) if p.len() > 1 => p.trim_end_matches('/'),
            Some(p) if !p.is_empty() => p,
            _ => "/",
        };
        self.routes.iter().find(|route| route.matches(path))
    }
}
