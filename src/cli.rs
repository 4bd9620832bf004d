use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "figcomp")]
#[command(
    version,
    about = "Generate Tailwind-styled components from Figma frames",
    long_about = "figcomp\n\nCommands:\n- create: convert a Figma frame into a React, Vue, Angular or HTML component inside a project.\n- detect: show which framework and file extension a project would get.\n\nAuthenticate with FIGMA_TOKEN (or FIGMA_OAUTH_TOKEN), or pass --token.\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) with component directories, image export and timeouts; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a component from a Figma frame
    Create {
        #[arg(
            long,
            help = "Figma link to the frame (https://www.figma.com/design/<FILE_KEY>/Name?node-id=12-34)"
        )]
        figma_link: String,

        #[arg(long, help = "Component name (defaults to the frame name)")]
        name: Option<String>,

        #[arg(
            long,
            value_name = "FRAMEWORK",
            help = "Target framework (react, vue, angular, html); detected from package.json if omitted"
        )]
        framework: Option<String>,

        #[arg(
            long,
            help = "Emit TypeScript (.tsx) for React; detected from tsconfig.json if omitted"
        )]
        typescript: bool,

        #[arg(
            long,
            default_value = ".",
            value_name = "DIR",
            help = "Project directory holding package.json"
        )]
        project_dir: PathBuf,

        #[arg(
            long,
            help = "Always expand instances inline instead of referencing existing components"
        )]
        no_reuse: bool,

        #[arg(long, help = "Figma access token (overrides FIGMA_TOKEN/FIGMA_OAUTH_TOKEN)")]
        token: Option<String>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(
            long,
            help = "Print the generated source instead of writing the component file"
        )]
        dry_run: bool,
    },

    /// Detect the project's framework and component file extension
    Detect {
        #[arg(
            long,
            default_value = ".",
            value_name = "DIR",
            help = "Project directory holding package.json"
        )]
        project_dir: PathBuf,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}
