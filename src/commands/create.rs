use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use figcomp_lib::project::{detect_project, is_typescript};
use figcomp_lib::{
    emit, map_figma_error, parse_figma_link, Config, Converter, CreateOutput, DesignReference,
    FigcompError, FigcompOutput, FigmaAuth, FigmaClient, FsComponentStore, ProjectTarget,
    FIGCOMP_OUTPUT_VERSION,
};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::{
    format_effective_config, load_config, resolve_create_settings, CreateFlagSources,
};

/// Run the create command.
#[allow(clippy::too_many_arguments)]
pub async fn run_create(
    config_path: Option<PathBuf>,
    verbose: bool,
    figma_link: String,
    name: Option<String>,
    framework: Option<String>,
    flags: CreateFlagSources,
    project_dir: PathBuf,
    token: Option<String>,
    format: OutputFormat,
    dry_run: bool,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format),
    };

    let request = CreateRequest {
        config: &config,
        config_path: config_path.as_deref(),
        flags: &flags,
        verbose,
        figma_link: &figma_link,
        name,
        framework: framework.as_deref(),
        project_dir: &project_dir,
        token,
        dry_run,
    };

    let body = match create(request).await {
        Ok(body) => body,
        Err(err) => return render_error(err, format),
    };
    if let Err(err) = write_output(&body, format) {
        return render_error(FigcompError::Unknown(err.to_string()), format);
    }
    ExitCode::SUCCESS
}

struct CreateRequest<'a> {
    config: &'a Config,
    config_path: Option<&'a Path>,
    flags: &'a CreateFlagSources,
    verbose: bool,
    figma_link: &'a str,
    name: Option<String>,
    framework: Option<&'a str>,
    project_dir: &'a Path,
    token: Option<String>,
    dry_run: bool,
}

async fn create(req: CreateRequest<'_>) -> Result<FigcompOutput, FigcompError> {
    let info = parse_figma_link(req.figma_link)?;

    let detected = match req.framework {
        Some(_) => ProjectTarget::unknown(),
        None => detect_project(req.project_dir),
    };
    let settings = resolve_create_settings(
        req.framework,
        &detected,
        is_typescript(req.project_dir),
        req.config,
        req.flags,
    )?;
    if req.verbose {
        eprintln!(
            "{}",
            format_effective_config(req.config, &settings, req.config_path)
        );
    }

    let auth = req
        .token
        .filter(|t| !t.is_empty())
        .map(FigmaAuth::PersonalAccessToken)
        .or_else(FigmaAuth::from_env)
        .ok_or_else(|| {
            FigcompError::config(
                "FIGMA_TOKEN environment variable is required (or pass --token)",
            )
        })?;
    let client = FigmaClient::with_base_url(
        auth,
        req.config.api_base_url.as_str(),
        req.config.timeouts.request,
    )
    .map_err(map_figma_error)?
    .with_image_options(req.config.image_options());

    let backend = emit::select(settings.framework);
    let root = req.config.component_root(req.project_dir, settings.framework);
    debug!(root = %root.display(), "component root");
    let store = FsComponentStore::new(req.project_dir, root, backend.clone());

    let converter = Converter::new(
        Arc::new(client),
        Arc::new(store),
        backend,
        settings.extension,
    )
    .with_reuse(settings.reuse)
    .with_name(req.name);

    let created = if req.dry_run {
        converter
            .render_component(&info.file_key, &info.node_id)
            .await?
    } else {
        converter
            .create_component(&info.file_key, &info.node_id)
            .await?
    };

    Ok(FigcompOutput::Create(CreateOutput {
        version: FIGCOMP_OUTPUT_VERSION.to_string(),
        input: DesignReference {
            file_key: info.file_key,
            node_id: info.node_id,
        },
        framework: created.framework,
        extension: created.extension,
        component_name: created.file.name.clone(),
        output_path: created.path,
        imports: created.imports,
        scaffold: created.file.scaffold.as_ref().map(ToString::to_string),
        dry_run: req.dry_run,
        code: req.dry_run.then_some(created.file.contents),
    }))
}
