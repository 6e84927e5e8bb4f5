//! The application-state object.
//!
//! All mutation of the running application goes through [`AppState`]: the
//! presentation layer reads from it and calls its methods, and nothing else
//! holds mutable state.

use mkulima_core::Locale;
use tracing::{info, warn};

use crate::auth::{AuthMode, Authenticator, Credentials};
use crate::community::CommunityHub;
use crate::error::{AppError, ViewError};
use crate::profile::{Role, UserProfile};
use crate::screens::{ChatScreen, FarmScreen, PestScreen};
use crate::session::SessionStore;
use crate::view::{visible_tabs, Screen, Tab, ViewState};

/// Colour scheme. Not persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

pub struct AppState {
    locale: Locale,
    theme: Theme,
    view: ViewState,
    profile: Option<UserProfile>,
    auth_mode: AuthMode,
    session: Box<dyn SessionStore>,
    chat: ChatScreen,
    pest: PestScreen,
    farm: FarmScreen,
    community: CommunityHub,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("locale", &self.locale)
            .field("theme", &self.theme)
            .field("view", &self.view)
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Start the application, restoring a stored session if there is one.
    ///
    /// Unreadable or malformed session data is logged and treated as no
    /// session.
    pub fn boot(session: Box<dyn SessionStore>, locale: Locale) -> Self {
        let profile = match session.load() {
            Ok(profile) => profile,
            Err(err) => {
                warn!(error = %err, "Ignoring stored session");
                None
            }
        };

        let view = if profile.is_some() {
            ViewState::restored()
        } else {
            ViewState::new()
        };
        info!(screen = %view.screen(), locale = %locale, "Application booted");

        Self {
            locale,
            theme: Theme::default(),
            view,
            profile,
            auth_mode: AuthMode::default(),
            session,
            chat: ChatScreen::new(),
            pest: PestScreen::new(),
            farm: FarmScreen::new(),
            community: CommunityHub::new(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.toggled();
        self.locale
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn screen(&self) -> Screen {
        self.view.screen()
    }

    pub fn tab(&self) -> Option<Tab> {
        self.view.tab()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    fn role(&self) -> Role {
        self.profile.as_ref().map(|p| p.role).unwrap_or_default()
    }

    /// Navigation entries for the current profile.
    pub fn visible_tabs(&self) -> Vec<Tab> {
        visible_tabs(self.role())
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    pub fn toggle_auth_mode(&mut self) -> AuthMode {
        self.auth_mode = self.auth_mode.toggled();
        self.auth_mode
    }

    /// `landing -> auth`.
    pub fn start(&mut self) -> Result<(), ViewError> {
        self.view.start()
    }

    /// `auth -> landing`.
    pub fn back(&mut self) -> Result<(), ViewError> {
        self.view.back()?;
        self.auth_mode = AuthMode::default();
        Ok(())
    }

    /// Submit the auth form. On success the profile is stored and the
    /// shell opens on the dashboard.
    ///
    /// A failure to persist the session is logged; the sign-in itself
    /// still succeeds for this run.
    pub fn submit_auth(
        &mut self,
        authenticator: &dyn Authenticator,
        credentials: &Credentials,
    ) -> Result<&UserProfile, AppError> {
        if self.view.screen() != Screen::Auth {
            return Err(ViewError::InvalidTransition {
                from: self.view.screen(),
                action: "sign in",
            }
            .into());
        }

        let profile = authenticator.authenticate(credentials, self.auth_mode)?;
        if let Err(err) = self.session.save(&profile) {
            warn!(error = %err, "Failed to persist session");
        }
        self.view.login_succeeded()?;
        self.auth_mode = AuthMode::default();

        info!(role = %profile.role, "Signed in");
        Ok(&*self.profile.insert(profile))
    }

    /// `app -> landing`: clear the stored session and unmount every screen.
    pub fn logout(&mut self) -> Result<(), ViewError> {
        self.view.logout()?;
        if let Err(err) = self.session.clear() {
            warn!(error = %err, "Failed to clear stored session");
        }
        self.profile = None;
        for tab in Tab::ALL {
            self.unmount(tab);
        }
        info!("Signed out");
        Ok(())
    }

    /// Switch tab. The screen being left is unmounted.
    pub fn select_tab(&mut self, tab: Tab) -> Result<(), ViewError> {
        let previous = self.view.select_tab(tab, self.role())?;
        if previous != tab {
            self.unmount(previous);
        }
        Ok(())
    }

    fn unmount(&mut self, tab: Tab) {
        match tab {
            Tab::Chat => self.chat.reset(),
            Tab::Pest => self.pest.reset(),
            Tab::MyFarm => self.farm.reset(),
            Tab::Community => self.community.reset(),
            Tab::Dashboard | Tab::Weather | Tab::Market | Tab::Admin | Tab::Settings => {}
        }
    }

    pub fn chat(&self) -> &ChatScreen {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatScreen {
        &mut self.chat
    }

    pub fn pest(&self) -> &PestScreen {
        &self.pest
    }

    pub fn pest_mut(&mut self) -> &mut PestScreen {
        &mut self.pest
    }

    pub fn farm(&self) -> &FarmScreen {
        &self.farm
    }

    pub fn farm_mut(&mut self) -> &mut FarmScreen {
        &mut self.farm
    }

    pub fn community(&self) -> &CommunityHub {
        &self.community
    }

    pub fn community_mut(&mut self) -> &mut CommunityHub {
        &mut self.community
    }
}
