//! Logical-path to file resolution with root confinement.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use docshelf_protocol::DOC_EXTENSION;

use crate::error::{DoctreeError, Result};

/// File served when a logical path names a directory.
pub const INDEX_FILE: &str = "index.md";

/// A resolved document: raw bytes plus the on-disk path they came from.
/// The path is used to pick a content type and for logging only; it is
/// never echoed to clients.
#[derive(Debug)]
pub struct ResolvedDoc {
    pub bytes: Vec<u8>,
    pub source: PathBuf,
}

impl ResolvedDoc {
    pub fn is_markdown(&self) -> bool {
        self.source
            .extension()
            .is_some_and(|ext| ext == DOC_EXTENSION)
    }
}

/// Map a logical document path onto a file under `root` and read it.
///
/// A leading slash is stripped; a path that names a directory falls back to
/// the directory's `index.md`. Traversal is rejected twice: `..` and
/// absolute components before any filesystem access, and the canonicalized
/// result must stay under the canonicalized root (which also catches
/// symlinks pointing outside it).
pub fn resolve(root: &Path, logical: &str) -> Result<ResolvedDoc> {
    let logical = logical.trim_start_matches('/');
    screen_components(logical)?;

    let root = root.canonicalize()?;
    let candidate = root.join(logical);
    let canonical = match candidate.canonicalize() {
        Ok(path) => path,
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(DoctreeError::NotFound),
        Err(err) => return Err(DoctreeError::Io(err)),
    };
    if !canonical.starts_with(&root) {
        return Err(DoctreeError::PathOutsideRoot(logical.to_string()));
    }

    let meta = fs::metadata(&canonical)?;
    if meta.is_file() {
        return read_doc(canonical);
    }
    if meta.is_dir() {
        let index = canonical.join(INDEX_FILE);
        if index.is_file() {
            return read_doc(index);
        }
    }
    Err(DoctreeError::NotFound)
}

/// Reject `..`, absolute paths and platform prefixes before touching the
/// filesystem at all.
fn screen_components(logical: &str) -> Result<()> {
    for component in Path::new(logical).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => return Err(DoctreeError::PathOutsideRoot(logical.to_string())),
        }
    }
    Ok(())
}

fn read_doc(source: PathBuf) -> Result<ResolvedDoc> {
    let bytes = fs::read(&source)?;
    Ok(ResolvedDoc { bytes, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn docs_fixture() -> tempfile::TempDir {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("intro.md"), b"# intro").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub").join("index.md"), b"# sub index").unwrap();
        fs::write(temp.path().join("sub").join("page.md"), b"# page").unwrap();
        temp
    }

    #[test]
    fn resolves_a_plain_file() {
        let temp = docs_fixture();
        let doc = resolve(temp.path(), "intro.md").unwrap();
        assert_eq!(doc.bytes, b"# intro");
        assert!(doc.is_markdown());
    }

    #[test]
    fn leading_slash_is_stripped() {
        let temp = docs_fixture();
        let doc = resolve(temp.path(), "/sub/page.md").unwrap();
        assert_eq!(doc.bytes, b"# page");
    }

    #[test]
    fn directory_falls_back_to_its_index() {
        let temp = docs_fixture();
        let doc = resolve(temp.path(), "sub").unwrap();
        assert_eq!(doc.bytes, b"# sub index");
        assert!(doc.source.ends_with("index.md"));
    }

    #[test]
    fn directory_without_index_is_not_found() {
        let temp = docs_fixture();
        fs::create_dir(temp.path().join("bare")).unwrap();
        let err = resolve(temp.path(), "bare").unwrap_err();
        assert!(matches!(err, DoctreeError::NotFound));
    }

    #[test]
    fn missing_document_is_not_found() {
        let temp = docs_fixture();
        let err = resolve(temp.path(), "nope.md").unwrap_err();
        assert!(matches!(err, DoctreeError::NotFound));
    }

    #[test]
    fn parent_traversal_is_rejected_before_filesystem_access() {
        let temp = docs_fixture();
        for attempt in [
            "../../etc/passwd",
            "sub/../../etc/passwd",
            "..",
            "./../intro.md",
        ] {
            let err = resolve(temp.path(), attempt).unwrap_err();
            assert!(
                matches!(err, DoctreeError::PathOutsideRoot(_)),
                "expected rejection for {attempt:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn absolute_injection_resolves_relative_to_root() {
        let temp = docs_fixture();
        // "/etc/passwd" loses its leading slash and becomes root/etc/passwd.
        let err = resolve(temp.path(), "/etc/passwd").unwrap_err();
        assert!(matches!(err, DoctreeError::NotFound));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_escaping_the_root_is_rejected() {
        let outer = tempdir().unwrap();
        let root = outer.path().join("docs");
        fs::create_dir(&root).unwrap();
        fs::write(outer.path().join("secret.md"), b"top secret").unwrap();
        std::os::unix::fs::symlink(outer.path().join("secret.md"), root.join("leak.md")).unwrap();

        let err = resolve(&root, "leak.md").unwrap_err();
        assert!(matches!(err, DoctreeError::PathOutsideRoot(_)));
    }

    #[test]
    fn empty_path_serves_the_root_index_when_present() {
        let temp = docs_fixture();
        fs::write(temp.path().join(INDEX_FILE), b"# home").unwrap();
        let doc = resolve(temp.path(), "").unwrap();
        assert_eq!(doc.bytes, b"# home");
    }
}
