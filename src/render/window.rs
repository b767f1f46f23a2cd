use crate::catalog::*;

/// Leaderboard scoring window.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Window {
    #[default]
    Overall,
    Weekly,
    Monthly,
}

impl Window {
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
    pub const fn standings(&self) -> &'static [Standing] {
        match self {
            Self::Overall => &OVERALL,
            Self::Weekly => &WEEKLY,
            Self::Monthly => &MONTHLY,
        }
    }
}

/// Unknown selectors fall back to the first option.
impl From<&str> for Window {
    fn from(s: &str) -> Self {
        match s {
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            _ => Self::Overall,
        }
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
