use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype used as the stable identifier of an application. There is at
/// most one open window per `AppName` at any time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String")]
#[serde(into = "String")]
pub struct AppName(String);

impl From<String> for AppName {
    fn from(other: String) -> Self {
        Self(other)
    }
}

impl From<AppName> for String {
    fn from(other: AppName) -> Self {
        other.0
    }
}

impl From<&str> for AppName {
    fn from(other: &str) -> Self {
        Self(other.to_string())
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the launch table: the display metadata a new window for
/// this application is created with. The application's rendering unit is
/// owned by the host and keyed by `name`; the core never inspects it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppDescriptor {
    pub name: AppName,
    pub title: String,
    pub icon: String,
}

impl AppDescriptor {
    #[must_use]
    pub fn new(name: &str, title: &str, icon: &str) -> Self {
        Self {
            name: name.into(),
            title: title.to_string(),
            icon: icon.to_string(),
        }
    }
}
