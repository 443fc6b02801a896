use serde::{Deserialize, Serialize};

/// A declared parameter of a command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arg {
    /// The argument name.
    pub name: String,
    /// Whether the argument is mandatory.
    #[serde(default)]
    pub mand: bool,
    /// Separator rendered after this argument, a single space if unset.
    #[serde(default)]
    pub delim: Option<String>,
}

impl Arg {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mand: false,
            delim: None,
        }
    }

    pub fn mand(mut self) -> Self {
        self.mand = true;
        self
    }

    pub fn delim(mut self, delim: impl Into<String>) -> Self {
        self.delim = Some(delim.into());
        self
    }
}

impl std::fmt::Display for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mand {
            true => write!(f, "<{}>", self.name),
            false => write!(f, "({})", self.name),
        }
    }
}
