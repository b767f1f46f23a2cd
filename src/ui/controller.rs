use super::*;
use crate::auth::AuthError;
use crate::auth::AuthProvider;
use crate::auth::User;
use crate::render::*;
use chrono::DateTime;
use chrono::TimeZone;
use std::cell::Cell;
use std::cell::RefCell;

/// Drives the page from the session state machine.
///
/// Everything runs on the UI thread; state lives in cells so handlers
/// can share the controller behind an `Rc`. No borrow is held across
/// an `.await`.
pub struct Controller<A, P> {
    auth: A,
    page: P,
    state: RefCell<SessionState>,
    pending: Cell<bool>,
    countdown: Countdown,
}

impl<A, P> Controller<A, P>
where
    A: AuthProvider,
    P: Page,
{
    /// Restores any persisted session and anchors the countdown at `now`.
    pub fn new<Tz: TimeZone>(auth: A, page: P, now: &DateTime<Tz>) -> Self {
        let state = SessionState::from(auth.current());
        Self {
            auth,
            page,
            state: RefCell::new(state),
            pending: Cell::new(false),
            countdown: Countdown::following(now),
        }
    }
    pub fn auth(&self) -> &A {
        &self.auth
    }
    pub fn page(&self) -> &P {
        &self.page
    }
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }
    pub fn pending(&self) -> bool {
        self.pending.get()
    }

    /// Initial render. A failing section is logged and the rest still run.
    pub fn boot<Tz: TimeZone>(&self, now: &DateTime<Tz>) {
        self.isolate("ranks", || self.render_ranks(Term::default()));
        self.isolate("staff", || self.page.fill(Slot::AdminGrid, &Roster.to_string()));
        self.isolate("leaderboard", || self.render_leaderboard(Window::default()));
        self.isolate("profile", || self.show_profile());
        self.isolate("countdown", || self.tick(now));
    }
    pub fn tick<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<(), PageError> {
        self.page.write(Slot::Timer, &self.countdown.at(now).to_string())
    }

    pub async fn dispatch(&self, action: Action) {
        let result = match action {
            Action::OpenAuth => self.page.modal(true),
            Action::CloseAuth => self.page.modal(false),
            Action::Submit(intent) => {
                self.submit(intent).await;
                Ok(())
            }
            Action::Forgot => {
                self.page.notify(
                    "Forgot password flow is not configured. Use Firebase to enable reset.",
                );
                Ok(())
            }
            Action::CopyAddress => {
                self.copy_address().await;
                Ok(())
            }
            Action::Term(term) => self.select_term(term),
            Action::Window(window) => self.select_window(window),
            Action::Logout => {
                let _ = self.logout().await;
                Ok(())
            }
            Action::Buy => {
                self.buy();
                Ok(())
            }
            Action::AddToCart => {
                self.page.notify("Added to cart (demo)");
                Ok(())
            }
        };
        if let Err(e) = result {
            log::error!("{:?} failed: {}", action, e);
        }
    }

    /// Runs one auth attempt. Returns `None` without doing anything while
    /// another attempt is still outstanding.
    pub async fn submit(&self, intent: Intent) -> Option<Result<User, AuthError>> {
        let Some(_pending) = Pending::claim(&self.pending, &self.page) else {
            log::debug!("ignoring {:?} while another attempt is pending", intent);
            return None;
        };
        let result = match intent {
            Intent::Login => {
                let (login, password) = self.fields();
                self.auth.login(&login, &password).await
            }
            Intent::Register => {
                let (login, password) = self.fields();
                self.auth.register(&login, &password).await
            }
            Intent::Federated(federation) => self.auth.federated(federation).await,
        };
        match result {
            Ok(ref user) => {
                self.enter(Some(user.clone()));
                self.page.notify(&format!("Welcome, {}", user.name()));
            }
            Err(ref e) => self.page.notify(&e.to_string()),
        }
        Some(result)
    }

    /// Ends the session. Returns `None` while an auth attempt is pending,
    /// since that attempt could still sign someone in.
    pub async fn logout(&self) -> Option<Result<(), AuthError>> {
        let Some(_pending) = Pending::claim(&self.pending, &self.page) else {
            log::debug!("ignoring logout while an attempt is pending");
            return None;
        };
        match self.auth.logout().await {
            Ok(()) => {
                self.enter(None);
                self.page.notify("Logged out");
                Some(Ok(()))
            }
            Err(e) => {
                self.page.notify(&e.to_string());
                Some(Err(e))
            }
        }
    }

    /// Apply a session change reported by the identity provider.
    pub fn observe(&self, user: Option<User>) {
        if self.state.borrow().user() != user.as_ref() {
            self.enter(user);
        }
    }

    pub fn select_term(&self, term: Term) -> Result<(), PageError> {
        self.page.activate(Toggle::Term, term.key())?;
        self.render_ranks(term)
    }
    pub fn select_window(&self, window: Window) -> Result<(), PageError> {
        self.page.activate(Toggle::Window, window.key())?;
        self.render_leaderboard(window)
    }

    fn render_ranks(&self, term: Term) -> Result<(), PageError> {
        self.page.fill(Slot::RankGrid, &RankGrid(term).to_string())
    }
    fn render_leaderboard(&self, window: Window) -> Result<(), PageError> {
        self.page.fill(Slot::Leaderboard, &Leaderboard(window).to_string())
    }
    fn show_profile(&self) -> Result<(), PageError> {
        let view = self.state.borrow().user().map(ProfileView::from);
        self.page.profile(view.as_ref())
    }
    fn fields(&self) -> (String, String) {
        (
            self.page.read(Slot::Username).unwrap_or_default(),
            self.page.read(Slot::Password).unwrap_or_default(),
        )
    }
    /// Transition the state machine and bring the page in line with it.
    fn enter(&self, user: Option<User>) {
        if user.is_some() {
            self.isolate("close modal", || self.page.modal(false));
        }
        self.state.replace(SessionState::from(user));
        self.isolate("profile", || self.show_profile());
    }
    fn buy(&self) {
        match self.state.borrow().user() {
            None => self.page.notify("You must login to buy."),
            Some(user) => self.page.notify(&format!(
                "Buy flow not implemented. Demo: you have {} credits.",
                user.credits()
            )),
        }
    }
    async fn copy_address(&self) {
        let Some(address) = self.page.read(Slot::Address) else {
            return;
        };
        let address = address.trim();
        match self.page.copy(address).await {
            Ok(()) => self.page.notify(&format!("IP Copied: {}", address)),
            Err(e) => {
                log::warn!("clipboard write failed: {}", e);
                self.page.notify("Copy failed");
            }
        }
    }
    fn isolate<F>(&self, step: &str, f: F)
    where
        F: FnOnce() -> Result<(), PageError>,
    {
        if let Err(e) = f() {
            log::error!("{} failed: {}", step, e);
        }
    }
}

/// Marks an auth attempt as outstanding and keeps the modal's submit
/// controls disabled until dropped.
struct Pending<'a, P>
where
    P: Page,
{
    flag: &'a Cell<bool>,
    page: &'a P,
}

impl<'a, P> Pending<'a, P>
where
    P: Page,
{
    fn claim(flag: &'a Cell<bool>, page: &'a P) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        page.lock(true);
        Some(Self { flag, page })
    }
}

impl<P> Drop for Pending<'_, P>
where
    P: Page,
{
    fn drop(&mut self) {
        self.flag.set(false);
        self.page.lock(false);
    }
}
