use std::fs;
use std::path::{Path, PathBuf};

use folio_model::{Collection, PostMetadata, PostRecord};
use serde::Deserialize;

use super::error::ContentError;

/// File extensions recognised as record files.
pub const RECORD_EXTENSIONS: &[&str] = &["toml", "json"];

#[derive(Debug, Deserialize)]
struct RecordFile {
    #[serde(default)]
    body: String,
    #[serde(flatten)]
    metadata: PostMetadata,
}

/// Reads record collections from a content root.
#[derive(Debug, Clone)]
pub struct ContentLoader {
    root: PathBuf,
}

impl ContentLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.dir_name())
    }

    /// Load every record of `collection`, ordered by file name.
    pub fn load(
        &self,
        collection: Collection,
    ) -> Result<Vec<PostRecord>, ContentError> {
        let dir = self.collection_dir(collection);
        if !dir.is_dir() {
            return Err(ContentError::MissingCollection {
                collection,
                path: dir,
            });
        }

        let entries = fs::read_dir(&dir).map_err(|source| ContentError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ContentError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() && is_record_file(&path) {
                files.push(path);
            }
        }
        files.sort();

        let records = files
            .iter()
            .map(|path| read_record(path))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "loaded {} {} record(s) from {}",
            records.len(),
            collection,
            dir.display()
        );
        Ok(records)
    }

    /// Load all three home page collections.
    pub fn load_library(&self) -> Result<ContentLibrary, ContentError> {
        Ok(ContentLibrary {
            projects: self.load(Collection::Projects)?,
            extra_curricular: self.load(Collection::ExtraCurricular)?,
            co_curricular: self.load(Collection::CoCurricular)?,
        })
    }
}

/// The record collections shown on the home page.
#[derive(Debug, Clone, Default)]
pub struct ContentLibrary {
    pub projects: Vec<PostRecord>,
    pub extra_curricular: Vec<PostRecord>,
    pub co_curricular: Vec<PostRecord>,
}

impl ContentLibrary {
    /// Photo sources of the co-curricular records, skipping records
    /// without one.
    pub fn co_curricular_images(&self) -> Vec<String> {
        self.co_curricular
            .iter()
            .map(|record| record.metadata.img.trim())
            .filter(|img| !img.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn is_record_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            RECORD_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

fn read_record(path: &Path) -> Result<PostRecord, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let file: RecordFile = if is_json {
        serde_json::from_str(&raw).map_err(|err| ContentError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?
    } else {
        toml::from_str(&raw).map_err(|err| ContentError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?
    };

    let slug = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    PostRecord::new(slug, file.metadata, file.body).map_err(|source| {
        ContentError::Record {
            path: path.to_path_buf(),
            source,
        }
    })
}
