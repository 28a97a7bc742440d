//! Session state: the authenticated account and the sort toggle.

/// Tracks who is logged in and how movements are displayed.
///
/// "Nobody logged in" is the explicit `None` state. The sort toggle is
/// independent of the login state and survives both logins and closures.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<String>,
    sorted: bool,
}

impl Session {
    /// A logged-out, unsorted session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `username` as the authenticated account.
    pub fn log_in(&mut self, username: String) {
        self.current = Some(username);
    }

    /// Drops the authenticated account, keeping the sort toggle.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Username of the authenticated account, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether an account is logged in.
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Whether movements display in ascending order.
    pub fn sorted(&self) -> bool {
        self.sorted
    }

    /// Flips the display ordering and returns the new setting.
    pub fn toggle_sort(&mut self) -> bool {
        self.sorted = !self.sorted;
        self.sorted
    }
}
