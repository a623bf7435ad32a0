//! Folio - build and preview a single-page portfolio.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

// The browser runtime is a library (`folio::web`); there is no binary there.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::{Result, bail};
    use clap::Parser;
    use folio::{
        build::build_site,
        cli::{Cli, Commands},
        config::{SiteConfig, cfg, init_config},
        init::new_site,
        log,
        serve::serve_site,
    };

    pub fn run() -> Result<()> {
        let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
        init_config(load_config(cli)?);

        match &cli.command {
            Commands::Init { name } => new_site(&cfg(), name.is_some()),
            Commands::Build { .. } => {
                let report = build_site(&cfg())?;
                log!("build"; "{report}");
                Ok(())
            }
            Commands::Serve { .. } => {
                build_site(&cfg())?;
                serve_site()
            }
        }
    }

    /// Load and validate configuration from CLI arguments
    fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
        let config = SiteConfig::load(cli)?;

        let config_exists = config.config_path.exists();
        match (cli.is_init(), config_exists) {
            (true, true) => {
                bail!("Config file already exists. Remove it manually or init in a different path.")
            }
            (false, false) => bail!(
                "Config file not found at `{}`. Run `folio init` first.",
                config.config_path.display()
            ),
            _ => {}
        }

        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }
}
