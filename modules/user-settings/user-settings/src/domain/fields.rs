pub struct SettingsFields;

impl SettingsFields {
    pub const PREFERRED_CATEGORIES: &'static str = "preferred_categories";
    pub const THEME: &'static str = "theme";
    pub const LANGUAGE: &'static str = "language";
}
