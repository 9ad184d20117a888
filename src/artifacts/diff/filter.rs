use super::edit_script::{Change, ChangeTag};
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChangeFilter: u8 {
        const ADDED = 0b001;
        const REMOVED = 0b010;
        const UNCHANGED = 0b100;
    }
}

impl ChangeFilter {
    /// Parses a filter such as `AR` (added and removed runs only).
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c.to_ascii_uppercase() {
                'A' => filter |= Self::ADDED,
                'R' | 'D' => filter |= Self::REMOVED,
                'U' => filter |= Self::UNCHANGED,
                _ => return None,
            }
        }

        Some(filter)
    }

    pub fn matches(&self, change: &Change) -> bool {
        match change.tag {
            ChangeTag::Added => self.contains(Self::ADDED),
            ChangeTag::Removed => self.contains(Self::REMOVED),
            ChangeTag::Unchanged => self.contains(Self::UNCHANGED),
        }
    }
}

impl Default for ChangeFilter {
    fn default() -> Self {
        Self::all()
    }
}
