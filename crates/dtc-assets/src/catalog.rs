//! Asset-catalog directory materialization.
//!
//! Two related recursive procedures produce the catalog layout:
//! name-driven materialization splits slash-delimited slice names into nested
//! image-set paths, and directory-driven materialization mirrors an already
//! nested export tree. Both share the metadata rules: one intermediate
//! descriptor per namespace directory, one leaf descriptor per image set,
//! written with overwrite semantics so repeated runs stay idempotent.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::debug;

use crate::error::{AssetError, Result};
use crate::templates::{MetadataTemplates, TemplateEngine};

/// Suffix marking a terminal image-set directory.
pub const IMAGESET_SUFFIX: &str = ".imageset";

/// Descriptor filename written at every catalog level.
const CONTENTS_FILE: &str = "Contents.json";

/// Registration name of the leaf descriptor template.
const LEAF_TEMPLATE: &str = "leaf";

/// Metadata recursion threshold for name-driven paths.
///
/// Segments are addressed relative to the catalog root, so the terminal level
/// is reached when a single segment remains.
const STARTING_DEPTH: usize = 1;

/// One materialized asset catalog rooted at a destination directory.
pub struct AssetCatalog {
    root: PathBuf,
    templates: MetadataTemplates,
    engine: TemplateEngine<'static>,
    /// Extension of the exported slice files, including the dot.
    target_extension: String,
}

impl AssetCatalog {
    /// Create the catalog root and its namespace descriptor.
    ///
    /// The leaf template is compiled here, so a malformed template fails the
    /// whole run before any asset is touched. Creation is idempotent; an
    /// existing root is reused and its descriptor overwritten.
    pub fn create(
        root: impl Into<PathBuf>,
        templates: MetadataTemplates,
        target_extension: &str,
    ) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template(LEAF_TEMPLATE, &templates.leaf)?;
        let root = root.into();
        fs::create_dir_all(&root)?;
        fs::write(root.join(CONTENTS_FILE), &templates.intermediate)?;
        let target_extension = if target_extension.starts_with('.') {
            target_extension.to_owned()
        } else {
            format!(".{target_extension}")
        };
        Ok(Self {
            root,
            templates,
            engine,
            target_extension,
        })
    }

    /// Destination root of this catalog.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Materialize one slash-delimited slice name.
    ///
    /// The whole slash path is the image set's identity: `"a/b/c"` becomes the
    /// nested directory `a/b/c.imageset` holding the copied file `c<ext>` and
    /// its leaf descriptor, with one intermediate descriptor per namespace
    /// level above it. Segments are trimmed for the destination path but
    /// preserved verbatim when locating the exported source file. Returns the
    /// image-set directory.
    pub fn materialize_slice(&self, name: &str, source_dir: &Path) -> Result<PathBuf> {
        let dest_segments: Vec<String> =
            name.split('/').map(|segment| segment.trim().to_owned()).collect();

        // Source lookup keeps the original segments, trailing whitespace included.
        let source_path = source_dir.join(format!("{name}{}", self.target_extension));
        if !source_path.is_file() {
            return Err(AssetError::MissingSource { path: source_path });
        }

        let dest_dir = self
            .root
            .join(format!("{}{IMAGESET_SUFFIX}", dest_segments.join("/")));
        fs::create_dir_all(&dest_dir)?;

        let base = dest_segments.last().cloned().unwrap_or_default();
        fs::copy(
            &source_path,
            dest_dir.join(format!("{base}{}", self.target_extension)),
        )?;
        debug!(name, dest = %dest_dir.display(), "materialized slice");

        let mut segments = dest_segments;
        if let Some(last) = segments.last_mut() {
            last.push_str(IMAGESET_SUFFIX);
        }
        self.write_metadata(&segments, STARTING_DEPTH)?;
        Ok(dest_dir)
    }

    /// Materialize a sequence of slice names, aborting on the first failure.
    pub fn materialize_slices<'n>(
        &self,
        names: impl IntoIterator<Item = &'n str>,
        source_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        names
            .into_iter()
            .map(|name| self.materialize_slice(name, source_dir))
            .collect()
    }

    /// Write the metadata descriptors along one image-set path.
    ///
    /// `segments` is the destination path relative to the catalog root, its
    /// last segment carrying the image-set suffix. The depth counter is passed
    /// by value at each step: while more than `depth` segments remain, the
    /// ancestor at `len - depth` offset gets the intermediate descriptor
    /// (overwritten if present, so sibling assets under one namespace never
    /// duplicate it), then the recursion continues one level deeper. At the
    /// threshold the image-set directory gets its leaf descriptor, rendered
    /// with the asset's filename.
    pub fn write_metadata(&self, segments: &[String], depth: usize) -> Result<()> {
        if segments.len() <= depth {
            let last = segments.last().map(String::as_str).unwrap_or_default();
            let stem = last.split('.').next().unwrap_or_default();
            let filename = format!("{stem}{}", self.target_extension);
            let rendered = self
                .engine
                .render(LEAF_TEMPLATE, &json!({ "filename": filename }))?;
            let dir = self.root.join(segments.join("/"));
            fs::create_dir_all(&dir)?;
            fs::write(dir.join(CONTENTS_FILE), rendered)?;
            return Ok(());
        }

        let dir_depth = segments.len() - depth;
        let namespace = &segments[..segments.len() - dir_depth];
        let dir = self.root.join(namespace.join("/"));
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(CONTENTS_FILE), &self.templates.intermediate)?;

        self.write_metadata(segments, depth + 1)
    }

    /// Mirror a pre-nested directory of exported files into the catalog.
    ///
    /// Each subdirectory becomes a namespace directory with an intermediate
    /// descriptor; each file becomes an image-set directory holding the file
    /// and a leaf descriptor referencing it by basename. The input encodes
    /// nesting as real directories, so no depth arithmetic is needed.
    pub fn materialize_tree(&self, origin: &Path) -> Result<()> {
        self.mirror(origin, &self.root)
    }

    fn mirror(&self, origin: &Path, dest: &Path) -> Result<()> {
        if origin.is_dir() {
            let Some(name) = origin.file_name() else {
                return Ok(());
            };
            let dir = dest.join(name);
            fs::create_dir_all(&dir)?;
            fs::write(dir.join(CONTENTS_FILE), &self.templates.intermediate)?;
            for entry in fs::read_dir(origin)? {
                let entry = entry?;
                self.mirror(&entry.path(), &dir)?;
            }
            return Ok(());
        }

        let Some(base) = origin.file_name().and_then(OsStr::to_str) else {
            return Ok(());
        };
        let stem = origin
            .file_stem()
            .and_then(OsStr::to_str)
            .unwrap_or_default();
        let imageset = dest.join(format!("{stem}{IMAGESET_SUFFIX}"));
        fs::create_dir_all(&imageset)?;
        let rendered = self
            .engine
            .render(LEAF_TEMPLATE, &json!({ "filename": base }))?;
        fs::write(imageset.join(CONTENTS_FILE), rendered)?;
        fs::copy(origin, imageset.join(base))?;
        debug!(origin = %origin.display(), "mirrored exported image");
        Ok(())
    }
}
