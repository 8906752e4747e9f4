use std::fs;
use std::path::Path;

use crate::render::shaders::ShaderError;

/// Both stages of a shader program, as plain GLSL text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex_source: String,
    pub fragment_source: String,
}

/// Which section of the shader file the current line belongs to. Stays `None`
/// until the first `#shader` marker is seen.
#[derive(Clone, Copy)]
enum Section {
    None,
    Vertex,
    Fragment,
}

impl ShaderSource {
    /// Reads a two-section shader file from disk and splits it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShaderError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ShaderError::SourceNotFound {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Splits shader text into its vertex and fragment sections.
    ///
    /// A line containing `#shader` selects the section named on it and never
    /// contributes to either block; a marker naming no known stage leaves the
    /// current section unchanged. The last marker wins, so repeated markers
    /// append to the same slot regardless of order. Line terminators are
    /// normalized to a single newline. Lines before the first marker belong to
    /// no section and are dropped with a warning.
    pub fn parse(text: &str) -> Self {
        let mut vertex_source = String::new();
        let mut fragment_source = String::new();
        let mut section = Section::None;

        for line in text.lines() {
            if line.contains("#shader") {
                if line.contains("vertex") {
                    section = Section::Vertex;
                } else if line.contains("fragment") {
                    section = Section::Fragment;
                }
                continue;
            }

            match section {
                Section::None => {
                    log::warn!("Discarding line outside any #shader section: {:?}", line);
                }
                Section::Vertex => {
                    vertex_source.push_str(line);
                    vertex_source.push('\n');
                }
                Section::Fragment => {
                    fragment_source.push_str(line);
                    fragment_source.push('\n');
                }
            }
        }

        Self {
            vertex_source,
            fragment_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_splits_vertex_then_fragment() {
        let source = ShaderSource::parse("#shader vertex\nA\n#shader fragment\nB\n");
        assert_eq!(source.vertex_source, "A\n");
        assert_eq!(source.fragment_source, "B\n");
    }

    #[test]
    fn test_marker_order_does_not_matter() {
        let source = ShaderSource::parse("#shader fragment\nB\n#shader vertex\nA\n");
        assert_eq!(source.vertex_source, "A\n");
        assert_eq!(source.fragment_source, "B\n");
    }

    #[test]
    fn test_no_markers_yields_two_empty_blocks() {
        let source = ShaderSource::parse("void main() {}\nreturn;\n");
        assert!(source.vertex_source.is_empty());
        assert!(source.fragment_source.is_empty());
    }

    #[test]
    fn test_crlf_terminators_are_normalized() {
        let source = ShaderSource::parse("#shader vertex\r\nA\r\nB\r\n");
        assert_eq!(source.vertex_source, "A\nB\n");
    }

    #[test]
    fn test_repeated_markers_reaccumulate_into_the_same_slot() {
        let text = "#shader vertex\nA\n#shader fragment\nB\n#shader vertex\nC\n";
        let source = ShaderSource::parse(text);
        assert_eq!(source.vertex_source, "A\nC\n");
        assert_eq!(source.fragment_source, "B\n");
    }

    #[test]
    fn test_unknown_marker_keeps_current_section() {
        let source = ShaderSource::parse("#shader vertex\nA\n#shader geometry\nB\n");
        assert_eq!(source.vertex_source, "A\nB\n");
        assert!(source.fragment_source.is_empty());
    }

    #[test]
    fn test_load_reads_a_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#shader vertex\nA\n#shader fragment\nB\n").unwrap();

        let source = ShaderSource::load(file.path()).unwrap();
        assert_eq!(source.vertex_source, "A\n");
        assert_eq!(source.fragment_source, "B\n");
    }

    #[test]
    fn test_load_reports_a_missing_file() {
        let err = ShaderSource::load("no/such/file.shader").unwrap_err();
        assert!(matches!(err, ShaderError::SourceNotFound { .. }));
    }
}
