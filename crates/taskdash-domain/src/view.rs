use serde::{Deserialize, Serialize};

/// Rendering of the task list. Switching layouts never refetches or refilters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskLayout {
    List,
    Cards,
    #[default]
    Board,
}

impl TaskLayout {
    pub fn next(self) -> Self {
        match self {
            Self::List => Self::Cards,
            Self::Cards => Self::Board,
            Self::Board => Self::List,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Cards => "Cards",
            Self::Board => "Board",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectLayout {
    #[default]
    Cards,
    List,
}

impl ProjectLayout {
    pub fn toggle(self) -> Self {
        match self {
            Self::Cards => Self::List,
            Self::List => Self::Cards,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cards => "Cards",
            Self::List => "List",
        }
    }
}
