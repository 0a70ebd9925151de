use anyhow::{Context, Result};
use clap::Parser;
use compose_ghcr::{
    cli::{Cli, Commands, RewriteArgs},
    config::Config,
    constants::{compose::PUBLISHED_SERVICES, env},
    service::{RewriteConfig, RewriteService},
    target::ImageTarget,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None => {
            let target = resolve_target(&cli.rewrite)?;
            info!(
                "Publishing images under {}/{}",
                target.owner(),
                target.name()
            );
            let output = cli
                .rewrite
                .output
                .clone()
                .unwrap_or_else(|| cli.rewrite.file.clone());

            let result = RewriteService::run(RewriteConfig {
                input: cli.rewrite.file.clone(),
                output,
                target,
                dry_run: cli.rewrite.dry_run,
            })?;

            info!("Rewrote {} service(s)", result.services.len());

            match result.written {
                Some(path) => println!("Generated {} with GHCR images.", path.display()),
                None => print!("{}", result.document),
            }
        }
        Some(Commands::Images) => {
            let target = resolve_target(&cli.rewrite)?;
            for service in PUBLISHED_SERVICES {
                println!("{}", target.image_for(service));
            }
        }
        Some(Commands::Version) => {
            println!("compose-ghcr {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Build the image target from flags/environment, falling back to the config file
fn resolve_target(args: &RewriteArgs) -> Result<ImageTarget> {
    let config = Config::load().context("Failed to load config")?;

    let owner = args
        .owner
        .as_deref()
        .with_context(|| format!("{} must be set", env::REPOSITORY_OWNER))?;
    let repository = args
        .repository
        .as_deref()
        .with_context(|| format!("{} must be set", env::REPOSITORY))?;

    let target = ImageTarget::from_repository(owner, repository)?
        .with_registry(args.registry.clone().unwrap_or(config.registry))
        .with_tag(args.tag.clone().unwrap_or(config.tag));

    Ok(target)
}
