//! Person candidate

use serde::{Deserialize, Serialize};

/// The candidate judged by the bundled rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Given name
    #[serde(default)]
    pub name: String,
    /// Age in years
    #[serde(default)]
    pub age: u32,
    /// Whether the person can die
    #[serde(default)]
    pub mortal: bool,
    /// Everything the person eats
    #[serde(default)]
    pub diet: Vec<String>,
    /// Year of birth
    #[serde(default)]
    pub birth_year: i32,
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = if self.name.is_empty() { "unnamed" } else { self.name.as_str() };
        write!(f, "{name} (age {}, {})", self.age, if self.mortal { "mortal" } else { "immortal" })
    }
}
