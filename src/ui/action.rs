use super::*;
use crate::auth::Federation;
use crate::render::Term;
use crate::render::Window;

/// Which auth-modal submission was made.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Intent {
    Login,
    Register,
    Federated(Federation),
}

/// Everything a click on the page can ask the controller to do.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Action {
    OpenAuth,
    CloseAuth,
    Submit(Intent),
    Forgot,
    CopyAddress,
    Term(Term),
    Window(Window),
    Logout,
    Buy,
    AddToCart,
}

/// The clicked element, as seen by the delegated listener.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    pub id: String,
    pub classes: Vec<String>,
    /// Toggle group the element sits in, with its selector attribute value.
    pub toggle: Option<(Toggle, Option<String>)>,
}

impl Target {
    pub fn id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }
    pub fn class(class: &str) -> Self {
        Self {
            classes: vec![class.to_string()],
            ..Self::default()
        }
    }
    pub fn toggle(toggle: Toggle, key: Option<&str>) -> Self {
        Self {
            toggle: Some((toggle, key.map(str::to_string))),
            ..Self::default()
        }
    }
    fn has(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl Action {
    /// `None` for clicks the page does not handle.
    pub fn resolve(target: &Target) -> Option<Self> {
        match target.id.as_str() {
            "open-auth" => return Some(Self::OpenAuth),
            "auth-close" | "auth-modal" => return Some(Self::CloseAuth),
            "btn-login" => return Some(Self::Submit(Intent::Login)),
            "btn-register" => return Some(Self::Submit(Intent::Register)),
            "btn-google" => return Some(Self::Submit(Intent::Federated(Federation::Google))),
            "btn-forgot" => return Some(Self::Forgot),
            "copy-ip" => return Some(Self::CopyAddress),
            "profile-logout" => return Some(Self::Logout),
            _ => {}
        }
        if target.has("buy-now") {
            return Some(Self::Buy);
        }
        if target.has("add-cart") {
            return Some(Self::AddToCart);
        }
        match &target.toggle {
            Some((Toggle::Term, key)) => {
                Some(Self::Term(Term::from(key.as_deref().unwrap_or_default())))
            }
            Some((Toggle::Window, key)) => {
                Some(Self::Window(Window::from(key.as_deref().unwrap_or_default())))
            }
            None => None,
        }
    }
}
