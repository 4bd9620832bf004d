use std::path::Path;
use std::str::FromStr;

use figcomp_lib::{Config, FigcompError, Framework, ProjectTarget};

/// Switches given on the command line; an absent switch defers to detection or config.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateFlagSources {
    pub typescript: bool,
    pub no_reuse: bool,
}

/// Resolved settings after merging CLI args, project detection and config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCreateSettings {
    pub framework: Framework,
    pub extension: &'static str,
    pub reuse: bool,
}

/// `--framework` wins over detection; `--typescript` forces `.tsx` for React.
/// Fails when neither names a framework.
pub fn resolve_create_settings(
    cli_framework: Option<&str>,
    detected: &ProjectTarget,
    detected_typescript: bool,
    config: &Config,
    flags: &CreateFlagSources,
) -> Result<ResolvedCreateSettings, FigcompError> {
    let typescript = flags.typescript || detected_typescript;

    let framework = match cli_framework {
        Some(id) => Framework::from_str(id)?,
        None => detected.framework.ok_or_else(|| {
            FigcompError::UnknownFramework(
                "no react, vue or @angular/core dependency found in package.json".to_string(),
            )
        })?,
    };

    Ok(ResolvedCreateSettings {
        framework,
        extension: framework.extension(typescript),
        reuse: if flags.no_reuse {
            false
        } else {
            config.reuse_components
        },
    })
}

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/figcomp/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, FigcompError> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "defaults".to_string());
        FigcompError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        FigcompError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Format effective config as a single-line string.
pub fn format_effective_config(
    config: &Config,
    settings: &ResolvedCreateSettings,
    config_source: Option<&Path>,
) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    format!(
        "Effective config [{source}]: framework={}, extension={}, reuse={}, components_dir={}, angular_app_dir={}, image={}@{}x, request_timeout={}s",
        settings.framework,
        settings.extension,
        settings.reuse,
        config.components_dir.display(),
        config.angular_app_dir.display(),
        config.image.format.as_str(),
        config.image.scale,
        config.timeouts.request.as_secs()
    )
}
