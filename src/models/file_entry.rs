use serde::Serialize;

use crate::core::errors::Result;

/// Sentinel for names and strings that could not be resolved.
pub const UNKNOWN: &str = "?";

/// Raw status fields of one node, taken from its link-level status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatInfo {
    /// Mirrors `EntryMetadata::inaccessible`; hosts read it from `stat`.
    pub inaccessible: bool,
    pub mode: u32,
    #[serde(rename = "mode-str")]
    pub mode_str: String,
    pub uid: u32,
    pub owner: String,
    pub gid: u32,
    pub group: String,
    pub size: u64,
    pub atime: f64,
    pub mtime: f64,
    pub ctime: f64,
}

impl StatInfo {
    /// Zeroed record used when the node could not be stat'ed at all.
    pub fn placeholder() -> Self {
        Self {
            inaccessible: true,
            mode: 0,
            mode_str: UNKNOWN.to_string(),
            uid: 0,
            owner: UNKNOWN.to_string(),
            gid: 0,
            group: UNKNOWN.to_string(),
            size: 0,
            atime: 0.0,
            mtime: 0.0,
            ctime: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryMetadata {
    pub filename: String,
    pub isdir: bool,
    #[serde(rename = "link-target")]
    pub link_target: String,
    pub inaccessible: bool,
    pub stat: StatInfo,
}

impl EntryMetadata {
    pub fn inaccessible(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            isdir: false,
            link_target: String::new(),
            inaccessible: true,
            stat: StatInfo::placeholder(),
        }
    }

    fn brief(&self) -> BriefEntry<'_> {
        BriefEntry {
            filename: &self.filename,
            isdir: self.isdir,
        }
    }
}

#[derive(Debug, Serialize)]
struct BriefEntry<'a> {
    filename: &'a str,
    isdir: bool,
}

/// The queried directory plus its direct children, in read order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryListing {
    #[serde(rename = ".")]
    pub root: EntryMetadata,
    pub children: Vec<EntryMetadata>,
}

#[derive(Debug, Serialize)]
struct BriefListing<'a> {
    #[serde(rename = ".")]
    root: BriefEntry<'a>,
    children: Vec<BriefEntry<'a>>,
}

/// How much of each record ends up in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Detail {
    #[default]
    Full,
    /// Only `filename` and `isdir`.
    Brief,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub detail: Detail,
    /// Indent with four spaces instead of emitting compact JSON.
    pub pretty: bool,
}

impl DirectoryListing {
    pub fn to_json(&self, options: ListOptions) -> Result<String> {
        match options.detail {
            Detail::Full => render(self, options.pretty),
            Detail::Brief => {
                let brief = BriefListing {
                    root: self.root.brief(),
                    children: self.children.iter().map(EntryMetadata::brief).collect(),
                };
                render(&brief, options.pretty)
            }
        }
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(serde_json::to_string(value)?);
    }
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(out)?)
}
