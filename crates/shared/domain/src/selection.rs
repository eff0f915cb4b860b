use std::fmt;

/// What the content area currently shows.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    Home,
    Site(String),
    Group(String),
}

impl Selection {
    #[must_use]
    pub const fn is_home(&self) -> bool {
        matches!(self, Self::Home)
    }

    #[must_use]
    pub fn site_id(&self) -> Option<&str> {
        match self {
            Self::Site(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn group_id(&self) -> Option<&str> {
        match self {
            Self::Group(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("home"),
            Self::Site(id) => write!(f, "site:{id}"),
            Self::Group(id) => write!(f, "group:{id}"),
        }
    }
}
