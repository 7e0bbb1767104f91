use std::fs;
use std::path::Path;

use super::error::BuildError;

/// Raw text of one shader stage, tagged with its origin for diagnostics.
///
/// Created by the loader for the duration of one compile call and dropped
/// when it returns; nothing holds the text after compilation.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    /// Origin identifier used to tag every diagnostic line.
    pub name: String,
    /// Full file content. Files are read whole; there is no size cap.
    pub text: String,
}

impl ShaderSource {
    /// Reads a shader file, tagging the source with its path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BuildError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| BuildError::Read {
            name: name.clone(),
            source,
        })?;
        Ok(Self { name, text })
    }

    /// Wraps in-memory text, for callers that already own the source.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(file_name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mandel-{}-{}", std::process::id(), file_name))
    }

    #[test]
    fn load_reads_the_whole_file() {
        let path = scratch_path("roundtrip.wgsl");
        let text = "@vertex\nfn vs_main() {}\n";
        fs::write(&path, text).unwrap();

        let source = ShaderSource::load(&path).unwrap();
        assert_eq!(source.text, text);
        assert_eq!(source.name, path.display().to_string());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn from_text_keeps_name_and_content() {
        let source = ShaderSource::from_text("inline", "fn fs_main() {}");
        assert_eq!(source.name, "inline");
        assert_eq!(source.text, "fn fs_main() {}");
    }

    #[test]
    fn missing_file_is_a_read_error_naming_the_resource() {
        let path = scratch_path("does-not-exist.wgsl");
        let err = ShaderSource::load(&path).unwrap_err();
        match err {
            BuildError::Read { name, .. } => {
                assert_eq!(name, path.display().to_string());
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }
}
