/// Rank duration selector.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Term {
    #[default]
    ThreeMonth,
    Permanent,
}

impl Term {
    pub const fn key(&self) -> &'static str {
        match self {
            Self::ThreeMonth => "3month",
            Self::Permanent => "permanent",
        }
    }
}

/// Unknown selectors fall back to the first option.
impl From<&str> for Term {
    fn from(s: &str) -> Self {
        match s {
            "permanent" => Self::Permanent,
            _ => Self::ThreeMonth,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
