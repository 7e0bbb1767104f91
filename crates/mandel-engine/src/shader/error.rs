use thiserror::Error;

use super::stage::StageKind;

/// Failure taxonomy of the shader build pipeline.
///
/// Every variant is terminal for the build: callers abort startup rather
/// than retry, since all of these are environment or asset problems.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The shader file was missing or unreadable.
    #[error("failed to read shader '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A stage failed to compile; `log` carries the driver diagnostics.
    #[error("shader '{name}' failed to compile:\n{log}")]
    Compile { name: String, log: String },

    /// The program failed to link; no pipeline is ever exposed.
    #[error("program '{name}' failed to link:\n{log}")]
    Link { name: String, log: String },

    /// The stage list did not contain a required stage.
    #[error("stage list is missing a {kind} stage")]
    MissingStage { kind: StageKind },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_resource() {
        let err = BuildError::Read {
            name: "shaders/mandelbrot.wgsl".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.contains("shaders/mandelbrot.wgsl"));
    }

    #[test]
    fn compile_error_carries_the_log() {
        let err = BuildError::Compile {
            name: "fullscreen.wgsl".to_string(),
            log: "error: unknown identifier 'foo'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("fullscreen.wgsl"));
        assert!(msg.contains("unknown identifier"));
    }

    #[test]
    fn missing_stage_names_the_kind() {
        let err = BuildError::MissingStage {
            kind: StageKind::Fragment,
        };
        assert_eq!(err.to_string(), "stage list is missing a fragment stage");
    }
}
