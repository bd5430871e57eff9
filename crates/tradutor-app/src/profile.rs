use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tradutor_config::Config;

/// User config folder, `TRADUTOR_CONFIG_DIR` overrides the platform default
fn tradutor_root() -> PathBuf {
    match std::env::var("TRADUTOR_CONFIG_DIR") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tradutor"),
    }
}

fn profiles_dir() -> PathBuf {
    tradutor_root().join("profiles")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Initialize user config folders and main profile if missing
pub fn init_user_config() -> anyhow::Result<()> {
    fs::create_dir_all(profiles_dir())?;

    let main_profile = profiles_dir().join("main.json");

    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            value: Config::default(),
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

/// Load a user profile by name, defaulting to main if name not found.
/// Environment overrides are not applied here.
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    let profile_file = profiles_dir().join(format!("{name}.json"));

    if profile_file.exists() {
        let data = fs::read_to_string(profile_file)?;
        let profile: Profile = serde_json::from_str(&data)?;
        Ok(profile.value)
    } else {
        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
        let main_file = profiles_dir().join("main.json");
        if main_file.exists() {
            let data = fs::read_to_string(main_file)?;
            let profile: Profile = serde_json::from_str(&data)?;
            Ok(profile.value)
        } else {
            Ok(Config::default())
        }
    }
}

/// Add a new profile cloned from main (or defaults if main missing)
pub fn add_profile_from_default(new_name: &str) -> anyhow::Result<PathBuf> {
    let default_config = load_user_profile("main")?;
    let profile = Profile {
        name: new_name.into(),
        value: default_config,
    };
    fs::create_dir_all(profiles_dir())?;
    let file = profiles_dir().join(format!("{new_name}.json"));
    fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created new profile: {new_name}");
    Ok(file)
}
