mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_create, run_detect};
use figcomp_lib::logging::init_tracing;
use settings::CreateFlagSources;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

async fn run() -> ExitCode {
    let args = cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Create {
            figma_link,
            name,
            framework,
            typescript,
            project_dir,
            no_reuse,
            token,
            format,
            dry_run,
        } => {
            run_create(
                args.config,
                args.verbose,
                figma_link,
                name,
                framework,
                CreateFlagSources {
                    typescript,
                    no_reuse,
                },
                project_dir,
                token,
                format,
                dry_run,
            )
            .await
        }
        Commands::Detect {
            project_dir,
            format,
        } => run_detect(project_dir, format),
    }
}
