/// The content collections rendered on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Collection {
    Projects,
    ExtraCurricular,
    CoCurricular,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Projects,
        Collection::ExtraCurricular,
        Collection::CoCurricular,
    ];

    /// Directory name of the collection under the content root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::ExtraCurricular => "extra-curricular",
            Collection::CoCurricular => "co-curricular",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}
