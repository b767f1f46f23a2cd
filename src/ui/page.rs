use crate::auth::User;

/// Named elements the controller reads from or writes into.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Slot {
    RankGrid,
    AdminGrid,
    Leaderboard,
    Timer,
    Address,
    Username,
    Password,
}

impl Slot {
    pub const fn id(&self) -> &'static str {
        match self {
            Self::RankGrid => "rank-grid",
            Self::AdminGrid => "admin-grid",
            Self::Leaderboard => "leaderboard-wrap",
            Self::Timer => "event-timer",
            Self::Address => "ip-box",
            Self::Username => "auth-username",
            Self::Password => "auth-password",
        }
    }
}

/// Button groups where exactly one button is marked active.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Toggle {
    Term,
    Window,
}

impl Toggle {
    /// Class of the element grouping the buttons.
    pub const fn group(&self) -> &'static str {
        match self {
            Self::Term => "rank-toggle",
            Self::Window => "ranking-header",
        }
    }
    /// Data attribute carrying each button's selector.
    pub const fn attribute(&self) -> &'static str {
        match self {
            Self::Term => "data-duration",
            Self::Window => "data-mode",
        }
    }
}

/// What the profile panel shows for a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub credits: String,
    pub avatar: String,
}

impl From<&User> for ProfileView {
    fn from(user: &User) -> Self {
        Self {
            name: user.name().to_string(),
            credits: format!("Credits: {}", user.credits()),
            avatar: user.avatar().to_string(),
        }
    }
}

/// DOM or script failure while updating the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageError(pub String);

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PageError {}

/// The page surface the controller drives.
///
/// Implementations treat a missing element as a no-op, never an error.
#[allow(async_fn_in_trait)]
pub trait Page {
    /// Replace the markup inside a container.
    fn fill(&self, slot: Slot, html: &str) -> Result<(), PageError>;
    /// Replace the text of an element.
    fn write(&self, slot: Slot, text: &str) -> Result<(), PageError>;
    /// Value of an input, or the text of any other element.
    fn read(&self, slot: Slot) -> Option<String>;
    fn modal(&self, open: bool) -> Result<(), PageError>;
    /// Show the profile panel for a user, or hide it.
    fn profile(&self, view: Option<&ProfileView>) -> Result<(), PageError>;
    /// Disable or re-enable the auth modal's submit controls.
    fn lock(&self, locked: bool);
    /// Mark the button whose selector equals `key` as the active one.
    fn activate(&self, toggle: Toggle, key: &str) -> Result<(), PageError>;
    /// User-visible message.
    fn notify(&self, message: &str);
    async fn copy(&self, text: &str) -> Result<(), PageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_view() {
        let user = User::new("local_1".into(), "steve".into(), None, 50, None);
        assert_eq!(
            ProfileView::from(&user),
            ProfileView {
                name: "steve".into(),
                credits: "Credits: 50".into(),
                avatar: "assets/myskin.png".into(),
            }
        );
    }
}
