//! Structured intermediate between schema mapping and XML emission.
//!
//! The mapper produces these records; only the renderer turns them into
//! text. Keeping serialization out of the mapper is what makes attribute
//! escaping possible.

/// One interactive element (or stub) inside a field group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    /// Free-text entry. `numeric` constrains input to digits.
    EditText { id: String, numeric: bool },

    /// Checkable item with its own visible label.
    CheckBox { id: String, label: String },

    /// Dropdown selector backed by the string-array resource named `entries`.
    Spinner { id: String, entries: String },

    /// Scrollable list for array-typed fields without enumerated items.
    ListView { id: String },

    /// Comment stub for object-typed fields; nested rendering is unimplemented.
    Placeholder { field: String },
}

/// One schema property's widget group: a label plus zero or more widgets.
///
/// Every property produces exactly one group. An unrecognized type leaves
/// `widgets` empty, which renders as a labeled but inert container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    pub label: String,
    pub widgets: Vec<Widget>,
}

/// A named `<string-array>` resource referenced by a spinner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringArrayResource {
    pub name: String,
    pub items: Vec<String>,
}

/// Complete mapper output. Groups render in schema property order;
/// resources render after all groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutModel {
    pub groups: Vec<FieldGroup>,
    pub resources: Vec<StringArrayResource>,
}
