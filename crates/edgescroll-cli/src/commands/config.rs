use std::path::Path;

use anyhow::{bail, Result};

use edgescroll_core::AppConfig;

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists.\nUse --force to overwrite it with the defaults.",
            path.display()
        );
    }

    AppConfig::default().save_to(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

pub fn path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edgescroll").join("config.toml");

        init(&path, false).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.autoscroll.step, AppConfig::default().autoscroll.step);
        assert_eq!(loaded.autoscroll.edge, AppConfig::default().autoscroll.edge);

        assert!(init(&path, false).is_err());
        init(&path, true).unwrap();
    }

    #[test]
    fn test_init_force_replaces_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[autoscroll]\nstep = 0\n").unwrap();
        assert!(AppConfig::load_from(&path).is_err());

        init(&path, true).unwrap();
        assert!(AppConfig::load_from(&path).is_ok());
    }
}
