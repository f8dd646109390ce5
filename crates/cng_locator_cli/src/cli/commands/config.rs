use anyhow::Result;

use cng_locator_core::config::{Config, default_config_path};

use crate::ui::info;

pub fn run_show(cfg: &Config) -> Result<()> {
    print!("{}", cfg.to_toml()?);
    Ok(())
}

pub fn run_path() -> Result<()> {
    let path = default_config_path()?;
    if path.exists() {
        println!("{}", path.display());
    } else {
        info(format!("{} (not created yet)", path.display()));
    }
    Ok(())
}
