//! The screen selector and the tab sub-state.

use std::fmt;
use std::str::FromStr;

use mkulima_core::Locale;

use crate::error::ViewError;
use crate::profile::Role;

/// Top-level screens.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Landing,
    Auth,
    App,
}

impl Screen {
    pub const fn as_str(self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Auth => "auth",
            Screen::App => "app",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tabs of the authenticated shell, in navigation order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Dashboard,
    MyFarm,
    Weather,
    Pest,
    Market,
    Chat,
    Community,
    Admin,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 9] = [
        Tab::Dashboard,
        Tab::MyFarm,
        Tab::Weather,
        Tab::Pest,
        Tab::Market,
        Tab::Chat,
        Tab::Community,
        Tab::Admin,
        Tab::Settings,
    ];

    /// Stable identifier used on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::MyFarm => "myfarm",
            Tab::Weather => "weather",
            Tab::Pest => "pest",
            Tab::Market => "market",
            Tab::Chat => "chat",
            Tab::Community => "community",
            Tab::Admin => "admin",
            Tab::Settings => "settings",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(value))
    }

    pub const fn admin_only(self) -> bool {
        matches!(self, Tab::Admin)
    }

    pub fn is_visible_to(self, role: Role) -> bool {
        !self.admin_only() || role.is_admin()
    }

    /// Navigation label in the given locale.
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Tab::Dashboard, Locale::Sw) => "Dashibodi",
            (Tab::Dashboard, Locale::En) => "Dashboard",
            (Tab::MyFarm, Locale::Sw) => "Shamba Langu",
            (Tab::MyFarm, Locale::En) => "My Farm",
            (Tab::Weather, Locale::Sw) => "Hali ya Hewa",
            (Tab::Weather, Locale::En) => "Weather",
            (Tab::Pest, Locale::Sw) => "Skana Wadudu",
            (Tab::Pest, Locale::En) => "Pest Scanner",
            (Tab::Market, Locale::Sw) => "Bei za Soko",
            (Tab::Market, Locale::En) => "Market Prices",
            (Tab::Chat, Locale::Sw) => "Mshauri AI",
            (Tab::Chat, Locale::En) => "AI Advisor",
            (Tab::Community, Locale::Sw) => "Jamii",
            (Tab::Community, Locale::En) => "Community",
            (Tab::Admin, Locale::Sw) => "Usimamizi",
            (Tab::Admin, Locale::En) => "Admin",
            (Tab::Settings, Locale::Sw) => "Mipangilio",
            (Tab::Settings, Locale::En) => "Settings",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::parse(s).ok_or_else(|| format!("unknown tab: {}", s))
    }
}

/// Tabs shown in navigation for a role.
pub fn visible_tabs(role: Role) -> Vec<Tab> {
    Tab::ALL
        .into_iter()
        .filter(|tab| tab.is_visible_to(role))
        .collect()
}

/// `landing -> auth -> app` with a tab inside `app`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    screen: Screen,
    tab: Tab,
}

impl ViewState {
    /// Fresh, unauthenticated state.
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a restored session: straight into the shell.
    pub fn restored() -> Self {
        Self {
            screen: Screen::App,
            tab: Tab::Dashboard,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Active tab, only meaningful inside `app`.
    pub fn tab(&self) -> Option<Tab> {
        (self.screen == Screen::App).then_some(self.tab)
    }

    /// `landing -> auth`.
    pub fn start(&mut self) -> Result<(), ViewError> {
        self.transition(Screen::Landing, Screen::Auth, "start")
    }

    /// `auth -> landing`.
    pub fn back(&mut self) -> Result<(), ViewError> {
        self.transition(Screen::Auth, Screen::Landing, "go back")
    }

    /// `auth -> app`, landing on the dashboard.
    pub fn login_succeeded(&mut self) -> Result<(), ViewError> {
        self.transition(Screen::Auth, Screen::App, "sign in")?;
        self.tab = Tab::Dashboard;
        Ok(())
    }

    /// `app -> landing`.
    pub fn logout(&mut self) -> Result<(), ViewError> {
        self.transition(Screen::App, Screen::Landing, "sign out")?;
        self.tab = Tab::Dashboard;
        Ok(())
    }

    /// Switch tab. Returns the tab that was active before.
    pub fn select_tab(&mut self, tab: Tab, role: Role) -> Result<Tab, ViewError> {
        if self.screen != Screen::App {
            return Err(ViewError::NotInApp);
        }
        if !tab.is_visible_to(role) {
            return Err(ViewError::NotPermitted(tab));
        }
        Ok(std::mem::replace(&mut self.tab, tab))
    }

    fn transition(
        &mut self,
        from: Screen,
        to: Screen,
        action: &'static str,
    ) -> Result<(), ViewError> {
        if self.screen != from {
            return Err(ViewError::InvalidTransition {
                from: self.screen,
                action,
            });
        }
        self.screen = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut view = ViewState::new();
        assert_eq!(view.screen(), Screen::Landing);
        assert_eq!(view.tab(), None);

        view.start().unwrap();
        assert_eq!(view.screen(), Screen::Auth);

        view.login_succeeded().unwrap();
        assert_eq!(view.screen(), Screen::App);
        assert_eq!(view.tab(), Some(Tab::Dashboard));

        view.logout().unwrap();
        assert_eq!(view.screen(), Screen::Landing);
    }

    #[test]
    fn test_back_from_auth() {
        let mut view = ViewState::new();
        view.start().unwrap();
        view.back().unwrap();
        assert_eq!(view.screen(), Screen::Landing);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut view = ViewState::new();
        assert!(matches!(
            view.login_succeeded(),
            Err(ViewError::InvalidTransition { from: Screen::Landing, .. })
        ));
        assert!(view.back().is_err());
        assert!(view.logout().is_err());

        let mut view = ViewState::restored();
        assert!(view.start().is_err());
    }

    #[test]
    fn test_select_tab_outside_app() {
        let mut view = ViewState::new();
        assert_eq!(
            view.select_tab(Tab::Chat, Role::User),
            Err(ViewError::NotInApp)
        );
    }

    #[test]
    fn test_admin_tab_requires_role() {
        let mut view = ViewState::restored();
        assert_eq!(
            view.select_tab(Tab::Admin, Role::User),
            Err(ViewError::NotPermitted(Tab::Admin))
        );
        assert_eq!(view.tab(), Some(Tab::Dashboard));

        assert_eq!(view.select_tab(Tab::Admin, Role::Admin), Ok(Tab::Dashboard));
        assert_eq!(view.tab(), Some(Tab::Admin));
    }

    #[test]
    fn test_login_resets_tab() {
        let mut view = ViewState::restored();
        view.select_tab(Tab::Market, Role::User).unwrap();
        view.logout().unwrap();
        view.start().unwrap();
        view.login_succeeded().unwrap();
        assert_eq!(view.tab(), Some(Tab::Dashboard));
    }

    #[test]
    fn test_visible_tabs() {
        let user = visible_tabs(Role::User);
        assert_eq!(user.len(), 8);
        assert!(!user.contains(&Tab::Admin));

        let admin = visible_tabs(Role::Admin);
        assert_eq!(admin.len(), 9);
        assert_eq!(admin.last(), Some(&Tab::Settings));
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!(Tab::parse("myfarm"), Some(Tab::MyFarm));
        assert_eq!(Tab::parse(" Chat "), Some(Tab::Chat));
        assert_eq!(Tab::parse("shamba"), None);
        assert_eq!("pest".parse::<Tab>(), Ok(Tab::Pest));
        for tab in Tab::ALL {
            assert_eq!(Tab::parse(tab.as_str()), Some(tab));
        }
    }

    #[test]
    fn test_labels_differ_by_locale() {
        for tab in Tab::ALL {
            assert!(!tab.label(Locale::Sw).is_empty());
            assert!(!tab.label(Locale::En).is_empty());
        }
        assert_eq!(Tab::Chat.label(Locale::En), "AI Advisor");
    }
}
