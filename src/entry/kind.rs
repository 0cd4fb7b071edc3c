use std::fmt;

use serde::{Deserialize, Serialize};
use unicase::UniCase;

/// The standard BibTeX entry types.
///
/// Only [`Article`](EntryKind::Article), [`Book`](EntryKind::Book) and
/// [`InProceedings`](EntryKind::InProceedings) have a record representation; the remaining kinds
/// are recognized so that they can be reported as unsupported rather than unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Article,
    Book,
    Booklet,
    InBook,
    InCollection,
    InProceedings,
    Manual,
    MastersThesis,
    PhdThesis,
    Misc,
    Proceedings,
    TechReport,
    Unpublished,
}

impl EntryKind {
    pub const ALL: [EntryKind; 13] = [
        EntryKind::Article,
        EntryKind::Book,
        EntryKind::Booklet,
        EntryKind::InBook,
        EntryKind::InCollection,
        EntryKind::InProceedings,
        EntryKind::Manual,
        EntryKind::MastersThesis,
        EntryKind::PhdThesis,
        EntryKind::Misc,
        EntryKind::Proceedings,
        EntryKind::TechReport,
        EntryKind::Unpublished,
    ];

    /// The lowercase BibTeX name, such as `inproceedings`.
    pub const fn name(self) -> &'static str {
        match self {
            EntryKind::Article => "article",
            EntryKind::Book => "book",
            EntryKind::Booklet => "booklet",
            EntryKind::InBook => "inbook",
            EntryKind::InCollection => "incollection",
            EntryKind::InProceedings => "inproceedings",
            EntryKind::Manual => "manual",
            EntryKind::MastersThesis => "mastersthesis",
            EntryKind::PhdThesis => "phdthesis",
            EntryKind::Misc => "misc",
            EntryKind::Proceedings => "proceedings",
            EntryKind::TechReport => "techreport",
            EntryKind::Unpublished => "unpublished",
        }
    }

    /// Look up an entry type by name, case-insensitively.
    ///
    /// `conference` is accepted as the traditional alias of `inproceedings`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = UniCase::ascii(name);
        if name == UniCase::ascii("conference") {
            return Some(EntryKind::InProceedings);
        }
        Self::ALL
            .into_iter()
            .find(|kind| name == UniCase::ascii(kind.name()))
    }

    /// Whether entries of this kind can be constructed.
    pub const fn is_modelled(self) -> bool {
        matches!(
            self,
            EntryKind::Article | EntryKind::Book | EntryKind::InProceedings
        )
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
