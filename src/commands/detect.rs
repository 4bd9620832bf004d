use std::path::PathBuf;
use std::process::ExitCode;

use figcomp_lib::project::{detect_project, is_typescript};
use figcomp_lib::{DetectOutput, FigcompError, FigcompOutput, FIGCOMP_OUTPUT_VERSION};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};

/// Run the detect command. An unknown project is reported, not treated as an error.
pub fn run_detect(project_dir: PathBuf, format: OutputFormat) -> ExitCode {
    let target = detect_project(&project_dir);
    let body = FigcompOutput::Detect(DetectOutput {
        version: FIGCOMP_OUTPUT_VERSION.to_string(),
        typescript: is_typescript(&project_dir),
        project_dir,
        framework: target.framework,
        extension: target.extension.map(str::to_string),
    });

    if let Err(err) = write_output(&body, format) {
        return render_error(FigcompError::Unknown(err.to_string()), format);
    }
    ExitCode::SUCCESS
}
