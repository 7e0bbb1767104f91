use std::fmt;

use super::error::BuildError;
use super::source::ShaderSource;

/// Pipeline stage a shader source is compiled for.
///
/// wgpu has no geometry stage; a fullscreen primitive generated in the
/// vertex stage covers what the GL geometry-shader variant did.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StageKind {
    Vertex,
    Fragment,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Vertex => write!(f, "vertex"),
            StageKind::Fragment => write!(f, "fragment"),
        }
    }
}

/// A successfully compiled stage.
///
/// The module handle keeps the driver object alive; dropping it releases
/// the object. A failed compile never produces one of these.
pub struct CompiledStage {
    pub kind: StageKind,
    pub module: wgpu::ShaderModule,
    /// Diagnostic log retained for later inspection; empty means clean.
    pub log: String,
}

/// Presents a diagnostic log the way the build pipeline reports it:
/// the literal `OK` for a clean result, the raw log otherwise.
pub fn diagnostic_or_ok(log: &str) -> &str {
    if log.trim().is_empty() { "OK" } else { log }
}

/// Compiles one stage, reporting the outcome tagged with the source name.
///
/// The compile runs inside a validation error scope so driver rejections
/// surface here instead of the global error handler. The outcome is logged
/// unconditionally (success logs `OK`); on failure the module handle is
/// dropped before returning and the caller must abort the build.
pub fn compile_stage(
    device: &wgpu::Device,
    source: &ShaderSource,
    kind: StageKind,
) -> Result<CompiledStage, BuildError> {
    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(source.name.as_str()),
        source: wgpu::ShaderSource::Wgsl(source.text.as_str().into()),
    });

    let scope_error = pollster::block_on(error_scope.pop());
    let info = pollster::block_on(module.get_compilation_info());

    let mut log = render_messages(&info);
    if let Some(err) = &scope_error {
        if !log.is_empty() {
            log.push('\n');
        }
        log.push_str(&err.to_string());
    }

    if scope_error.is_some() {
        log::error!("{}: {}", source.name, log);
        return Err(BuildError::Compile {
            name: source.name.clone(),
            log,
        });
    }

    log::info!("{} ({kind}): {}", source.name, diagnostic_or_ok(&log));
    Ok(CompiledStage { kind, module, log })
}

fn render_messages(info: &wgpu::CompilationInfo) -> String {
    let mut out = String::new();
    for message in &info.messages {
        if !out.is_empty() {
            out.push('\n');
        }
        let severity = match message.message_type {
            wgpu::CompilationMessageType::Error => "error",
            wgpu::CompilationMessageType::Warning => "warning",
            wgpu::CompilationMessageType::Info => "info",
        };
        match &message.location {
            Some(loc) => {
                out.push_str(&format!(
                    "{severity} at {}:{}: {}",
                    loc.line_number, loc.line_position, message.message
                ));
            }
            None => {
                out.push_str(&format!("{severity}: {}", message.message));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_log_reports_ok() {
        assert_eq!(diagnostic_or_ok(""), "OK");
        assert_eq!(diagnostic_or_ok("   \n"), "OK");
    }

    #[test]
    fn nonempty_log_passes_through_verbatim() {
        let log = "warning at 3:7: unused variable 'z'";
        assert_eq!(diagnostic_or_ok(log), log);
    }

    #[test]
    fn stage_kind_display_is_lowercase() {
        assert_eq!(StageKind::Vertex.to_string(), "vertex");
        assert_eq!(StageKind::Fragment.to_string(), "fragment");
    }
}
