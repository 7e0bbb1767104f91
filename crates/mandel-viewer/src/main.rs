use std::path::PathBuf;

use anyhow::Result;
use winit::dpi::LogicalSize;

use mandel_engine::device::GpuInit;
use mandel_engine::logging::{LoggingConfig, init_logging};
use mandel_engine::window::{Runtime, RuntimeConfig};

mod app;
mod render;
mod view;

use app::ViewerApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    print_usage();

    // Shader files resolve relative to the working directory unless a
    // directory is given on the command line.
    let shader_dir: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "shaders".to_string())
        .into();
    log::info!("loading shaders from {}", shader_dir.display());

    let view = view::ViewParameters::default();
    let config = RuntimeConfig {
        title: "Mandelbrot".to_string(),
        initial_size: LogicalSize::new(view.width as f64, view.height as f64),
    };

    Runtime::run(config, GpuInit::default(), ViewerApp::new(shader_dir))
}

fn print_usage() {
    println!("Usage:");
    println!("[1][2]   - zoom in / out (mouse wheel works too)");
    println!("[3][4]   - decrease / increase iteration count");
    println!("[arrows] - move up/down/left/right");
    println!("[home]   - reset the view");
    println!("[esc]    - quit");
}
