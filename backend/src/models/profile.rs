//! Account holder profile

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Free text, e.g. "January 2022"
    pub member_since: String,
}

impl UserProfile {
    /// Used in the "Welcome, ..." greeting
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// Avatar fallback letter
    pub fn initial(&self) -> Option<char> {
        self.name.trim_start().chars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> UserProfile {
        UserProfile {
            name: name.to_string(),
            email: String::new(),
            phone: String::new(),
            member_since: String::new(),
        }
    }

    #[test]
    fn test_first_name_and_initial() {
        let p = profile("Ananya Sharma");
        assert_eq!(p.first_name(), "Ananya");
        assert_eq!(p.initial(), Some('A'));
    }

    #[test]
    fn test_empty_name() {
        let p = profile("   ");
        assert_eq!(p.first_name(), "");
        assert_eq!(p.initial(), None);
    }
}
