/// The passenger on whose behalf a ride is booked.
///
/// Created by the caller before a booking is attempted; the pipeline only
/// ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    authenticated: bool,
}

impl User {
    pub fn new(name: impl Into<String>, authenticated: bool) -> Self {
        Self {
            name: name.into(),
            authenticated,
        }
    }

    /// A user that has passed login.
    pub fn authenticated(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// A user that never logged in.
    pub fn anonymous(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_constructors() {
        let alice = User::authenticated("Alice Johnson");
        assert_eq!(alice.name(), "Alice Johnson");
        assert!(alice.is_authenticated());

        let bob = User::anonymous("Bob Smith");
        assert!(!bob.is_authenticated());
    }
}
