use super::myers::Operation;
use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeTag {
    Unchanged,
    Added,
    Removed,
}

impl ChangeTag {
    pub fn prefix(&self) -> char {
        match self {
            ChangeTag::Unchanged => ' ',
            ChangeTag::Added => '+',
            ChangeTag::Removed => '-',
        }
    }

    pub fn inverse(&self) -> Self {
        match self {
            ChangeTag::Unchanged => ChangeTag::Unchanged,
            ChangeTag::Added => ChangeTag::Removed,
            ChangeTag::Removed => ChangeTag::Added,
        }
    }
}

/// A maximal run of consecutive tokens sharing one tag.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Change {
    pub tag: ChangeTag,
    pub value: String,
    pub count: usize,
}

impl Change {
    pub fn is_added(&self) -> bool {
        self.tag == ChangeTag::Added
    }

    pub fn is_removed(&self) -> bool {
        self.tag == ChangeTag::Removed
    }

    pub fn is_unchanged(&self) -> bool {
        self.tag == ChangeTag::Unchanged
    }
}

impl Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.tag.prefix(), self.value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript(Vec<Change>);

impl EditScript {
    pub fn changes(&self) -> &[Change] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.0.iter()
    }

    /// True when no token was added or removed.
    pub fn is_identical(&self) -> bool {
        self.0.iter().all(Change::is_unchanged)
    }

    /// Text of the unchanged and removed runs, in order.
    pub fn old_text(&self) -> String {
        self.0
            .iter()
            .filter(|change| !change.is_added())
            .map(|change| change.value.as_str())
            .collect()
    }

    /// Text of the unchanged and added runs, in order.
    pub fn new_text(&self) -> String {
        self.0
            .iter()
            .filter(|change| !change.is_removed())
            .map(|change| change.value.as_str())
            .collect()
    }

    /// Number of added and removed tokens.
    pub fn stats(&self) -> (usize, usize) {
        self.0.iter().fold((0, 0), |(added, removed), change| match change.tag {
            ChangeTag::Added => (added + change.count, removed),
            ChangeTag::Removed => (added, removed + change.count),
            ChangeTag::Unchanged => (added, removed),
        })
    }

    pub fn into_inner(self) -> Vec<Change> {
        self.0
    }
}

impl AsRef<[Change]> for EditScript {
    fn as_ref(&self) -> &[Change] {
        &self.0
    }
}

impl IntoIterator for EditScript {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'s> IntoIterator for &'s EditScript {
    type Item = &'s Change;
    type IntoIter = std::slice::Iter<'s, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// run being accumulated by the emitter
#[derive(Default)]
struct PendingRun {
    value: String,
    count: usize,
}

impl PendingRun {
    fn extend(&mut self, tokens: &[&str]) {
        tokens.iter().for_each(|token| self.value.push_str(token));
        self.count += tokens.len();
    }

    fn flush(&mut self, tag: ChangeTag, changes: &mut Vec<Change>) {
        if self.count == 0 {
            return;
        }

        let run = std::mem::take(self);
        match changes.last_mut() {
            Some(last) if last.tag == tag => {
                last.value.push_str(&run.value);
                last.count += run.count;
            }
            _ => changes.push(Change::new(tag, run.value, run.count)),
        }
    }
}

/// Groups a forward edit path into maximal runs.
///
/// Between two unchanged runs all removed tokens are emitted first, then all
/// added ones. Unchanged runs carry the text of the new sequence.
pub fn emit(old: &[&str], new: &[&str], path: &[(Operation, usize)]) -> EditScript {
    let mut changes = Vec::new();
    let mut removed = PendingRun::default();
    let mut added = PendingRun::default();
    let mut unchanged = PendingRun::default();
    let (mut x, mut y) = (0, 0);

    for &(operation, count) in path {
        match operation {
            Operation::Equal => {
                removed.flush(ChangeTag::Removed, &mut changes);
                added.flush(ChangeTag::Added, &mut changes);
                unchanged.extend(&new[y..y + count]);
                x += count;
                y += count;
            }
            Operation::Delete => {
                unchanged.flush(ChangeTag::Unchanged, &mut changes);
                removed.extend(&old[x..x + count]);
                x += count;
            }
            Operation::Insert => {
                unchanged.flush(ChangeTag::Unchanged, &mut changes);
                added.extend(&new[y..y + count]);
                y += count;
            }
        }
    }

    unchanged.flush(ChangeTag::Unchanged, &mut changes);
    removed.flush(ChangeTag::Removed, &mut changes);
    added.flush(ChangeTag::Added, &mut changes);

    EditScript(changes)
}
