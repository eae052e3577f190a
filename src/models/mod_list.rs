use std::fmt;

/// Characters that are stripped from mod folder names during normalization.
pub const DISALLOWED_CHARS: [char; 2] = [' ', '_'];

/// One immediate subdirectory of the base directory.
///
/// The entry is identified by its current folder name on disk. There is no
/// other identity: after a rename the entry keeps its position in the
/// [`ModList`] but carries the new name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModEntry {
    name: String,
}

impl ModEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Current folder name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if the name contains a space or an underscore
    pub fn needs_normalization(&self) -> bool {
        needs_normalization(&self.name)
    }

    /// The name with every space and underscore deleted
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl fmt::Display for ModEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Check whether a folder name contains any disallowed character.
pub fn needs_normalization(name: &str) -> bool {
    name.contains(DISALLOWED_CHARS)
}

/// Delete every space and underscore from `name`.
///
/// Nothing is replaced, collapsed or trimmed; all other characters keep
/// their relative order.
///
/// # Examples
///
/// ```
/// use mod_order_tool::models::normalize_name;
///
/// assert_eq!(normalize_name("Mod One_Two"), "ModOneTwo");
/// assert_eq!(normalize_name("Clean"), "Clean");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.chars().filter(|c| !DISALLOWED_CHARS.contains(c)).collect()
}

/// Ordered sequence of mod folders.
///
/// Order is the order in which directory enumeration yielded the folders.
/// A list is rebuilt wholesale on every scan; renames only change the name
/// at an existing position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModList {
    entries: Vec<ModEntry>,
}

impl ModList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: ModEntry) {
        self.entries.push(entry);
    }

    pub fn get(&self, index: usize) -> Option<&ModEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModEntry> {
        self.entries.iter()
    }

    /// Current names in list order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(ModEntry::name).collect()
    }

    /// Indices of entries whose names still contain disallowed characters
    pub fn pending_normalization(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.needs_normalization())
            .map(|(index, _)| index)
            .collect()
    }

    /// Replace the name at `index`, keeping its position.
    ///
    /// Returns the previous name, or `None` if the index is out of range.
    pub(crate) fn rename_at(&mut self, index: usize, new_name: String) -> Option<String> {
        let entry = self.entries.get_mut(index)?;
        let old = entry.name.clone();
        entry.set_name(new_name);
        Some(old)
    }
}

impl<S: Into<String>> FromIterator<S> for ModList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(ModEntry::new).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ModList {
    type Item = &'a ModEntry;
    type IntoIter = std::slice::Iter<'a, ModEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_removes_spaces_and_underscores() {
        assert_eq!(normalize_name("Mod One_Two"), "ModOneTwo");
        assert_eq!(normalize_name("__a b__"), "ab");
    }

    #[test]
    fn test_normalize_keeps_other_whitespace() {
        assert_eq!(normalize_name("Tab\tMod-1.2"), "Tab\tMod-1.2");
    }

    #[test]
    fn test_needs_normalization() {
        assert!(needs_normalization("Mod A"));
        assert!(needs_normalization("Mod_A"));
        assert!(!needs_normalization("ModA"));
        assert!(!needs_normalization("Mod-A"));
    }

    #[test]
    fn test_pending_normalization_indices() {
        let list: ModList = ["ModA", "Mod_B", "ModC", "Mod D"].into_iter().collect();
        assert_eq!(list.pending_normalization(), vec![1, 3]);
    }

    #[test]
    fn test_rename_at_keeps_position() {
        let mut list: ModList = ["first", "Mod_B", "last"].into_iter().collect();
        let old = list.rename_at(1, "ModB".to_string());

        assert_eq!(old.as_deref(), Some("Mod_B"));
        assert_eq!(list.names(), vec!["first", "ModB", "last"]);
        assert!(list.rename_at(5, "x".to_string()).is_none());
    }
}
