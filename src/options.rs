//! Option descriptors and the collector that flattens section-grouped trees
//!
//! A dropdown is built from generic option descriptors, optionally grouped
//! into sections. The collector erases section boundaries and exposes one
//! ordered, indexable sequence. It is pure and queried on demand; the child
//! tree may change between renders, so nothing here is cached.

/// The data describing one selectable option
///
/// Identity is `value`; two descriptors with the same value are the same
/// option. The `selected` flag is advisory and only seeds a control's
/// initial selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub id: String,
    pub label: String,
    pub value: String,
    pub selected: bool,
}

impl OptionDescriptor {
    /// Create a descriptor, not marked selected
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        OptionDescriptor {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            selected: false,
        }
    }

    /// Mark this descriptor as the initially selected option
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

/// A non-selectable grouping wrapper around a sequence of descriptors
///
/// Sections have no identity of their own; they only group options and are
/// erased during flattening.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    pub options: Vec<OptionDescriptor>,
}

impl Section {
    pub fn new(options: Vec<OptionDescriptor>) -> Self {
        Section { options }
    }
}

/// The child tree a dropdown is constructed from
///
/// The shape is decided once by the host: either a flat ordered sequence of
/// options, or an ordered sequence of sections. Mixing the two forms is
/// unrepresentable by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Children {
    Flat(Vec<OptionDescriptor>),
    Sectioned(Vec<Section>),
}

impl Children {
    /// Empty flat tree
    pub fn empty() -> Self {
        Children::Flat(Vec::new())
    }

    /// Ordered iteration over all options, section boundaries erased
    ///
    /// Order is depth-first left-to-right, preserving the relative order of
    /// options across sections.
    pub fn options(&self) -> impl Iterator<Item = &OptionDescriptor> {
        let (flat, sectioned) = match self {
            Children::Flat(options) => (Some(options.iter()), None),
            Children::Sectioned(sections) => {
                (None, Some(sections.iter().flat_map(|s| s.options.iter())))
            }
        };
        flat.into_iter().flatten().chain(sectioned.into_iter().flatten())
    }

    /// Number of options in the flattened list
    pub fn len(&self) -> usize {
        match self {
            Children::Flat(options) => options.len(),
            Children::Sectioned(sections) => sections.iter().map(|s| s.options.len()).sum(),
        }
    }

    /// Check if the flattened list is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Option at a flattened-list index
    pub fn get(&self, index: usize) -> Option<&OptionDescriptor> {
        self.options().nth(index)
    }

    /// First descriptor flagged `selected` in traversal order, if any
    ///
    /// If the host flags several, the first encountered wins.
    pub fn find_selected(&self) -> Option<&OptionDescriptor> {
        self.options().find(|opt| opt.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(value: &str) -> OptionDescriptor {
        OptionDescriptor::new(format!("id-{value}"), value.to_uppercase(), value)
    }

    #[test]
    fn test_flat_order() {
        let children = Children::Flat(vec![opt("a"), opt("b"), opt("c")]);
        let values: Vec<&str> = children.options().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["a", "b", "c"]);
        assert_eq!(children.len(), 3);
    }

    #[test]
    fn test_sections_flatten_in_order() {
        let children = Children::Sectioned(vec![
            Section::new(vec![opt("x")]),
            Section::new(vec![opt("y"), opt("z")]),
        ]);
        let values: Vec<&str> = children.options().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["x", "y", "z"]);
        assert_eq!(children.len(), 3);
        assert_eq!(children.get(1).unwrap().value, "y");
    }

    #[test]
    fn test_find_selected_first_wins() {
        let children = Children::Sectioned(vec![
            Section::new(vec![opt("a")]),
            Section::new(vec![opt("b").selected(), opt("c").selected()]),
        ]);
        assert_eq!(children.find_selected().unwrap().value, "b");
    }

    #[test]
    fn test_find_selected_none() {
        let children = Children::Flat(vec![opt("a"), opt("b")]);
        assert!(children.find_selected().is_none());
    }

    #[test]
    fn test_empty() {
        let children = Children::empty();
        assert!(children.is_empty());
        assert_eq!(children.get(0), None);
        assert!(children.find_selected().is_none());
    }

    #[test]
    fn test_get_out_of_range() {
        let children = Children::Flat(vec![opt("a")]);
        assert!(children.get(1).is_none());
    }
}
