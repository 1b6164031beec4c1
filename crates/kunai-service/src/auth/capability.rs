//! Capabilities and permission sets.

use std::fmt;

/// A single capability a caller may hold against a principal's resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Implies every other capability.
    All,
    Read,
    Write,
    /// Create members in a collection.
    Bind,
    /// Remove members from a collection.
    Unbind,
    WriteContent,
    WriteProperties,
    /// Free/busy queries only.
    Freebusy,
}

impl Capability {
    /// All capabilities in bit order.
    pub const ALL: [Self; 8] = [
        Self::All,
        Self::Read,
        Self::Write,
        Self::Bind,
        Self::Unbind,
        Self::WriteContent,
        Self::WriteProperties,
        Self::Freebusy,
    ];

    const fn bit(self) -> u8 {
        match self {
            Self::All => 1,
            Self::Read => 1 << 1,
            Self::Write => 1 << 2,
            Self::Bind => 1 << 3,
            Self::Unbind => 1 << 4,
            Self::WriteContent => 1 << 5,
            Self::WriteProperties => 1 << 6,
            Self::Freebusy => 1 << 7,
        }
    }

    /// Returns the `DAV:` privilege name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Read => "read",
            Self::Write => "write",
            Self::Bind => "bind",
            Self::Unbind => "unbind",
            Self::WriteContent => "write-content",
            Self::WriteProperties => "write-properties",
            Self::Freebusy => "freebusy",
        }
    }

    /// Parse a capability name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of capabilities held by the caller for one request.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PermissionSet(u8);

impl PermissionSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// A set holding exactly `capability`.
    #[must_use]
    pub const fn only(capability: Capability) -> Self {
        Self(capability.bit())
    }

    /// Adds `capability` to the set.
    pub const fn insert(&mut self, capability: Capability) {
        self.0 |= capability.bit();
    }

    /// Tests membership of `capability` itself. `All` is not expanded here.
    #[must_use]
    pub const fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_all(self) -> bool {
        self.contains(Capability::All)
    }

    /// Iterates the capabilities in the set, in bit order.
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// ## Summary
    /// Decodes the relationship letters returned by the store.
    ///
    /// `A` grants `all` and nothing else. Otherwise `F`, `R` and `W` map to
    /// freebusy, read and write. `C`, `D` and `M` map to bind, unbind and
    /// write-content, but only when `W` is absent since write covers them.
    /// Unknown letters are ignored.
    #[must_use]
    pub fn from_relationship(letters: &str) -> Self {
        if letters.contains('A') {
            return Self::only(Capability::All);
        }

        let mut set = Self::empty();
        let has_write = letters.contains('W');
        for letter in letters.chars() {
            match letter {
                'F' => set.insert(Capability::Freebusy),
                'R' => set.insert(Capability::Read),
                'W' => set.insert(Capability::Write),
                'C' if !has_write => set.insert(Capability::Bind),
                'D' if !has_write => set.insert(Capability::Unbind),
                'M' if !has_write => set.insert(Capability::WriteContent),
                _ => {}
            }
        }
        set
    }
}

impl fmt::Debug for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Capability::as_str)).finish()
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Capability::as_str).collect();
        f.write_str(&names.join(", "))
    }
}

impl FromIterator<Capability> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut set = Self::empty();
        for capability in iter {
            set.insert(capability);
        }
        set
    }
}
