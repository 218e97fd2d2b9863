use anyhow::bail;
use anyhow::Result;
use log::info;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

/// Flat `key=value` settings file, loaded lazily and written back on every change.
pub struct SettingsStorage {
    path: PathBuf,
    cache: Option<FxHashMap<String, String>>,
}

impl SettingsStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf(), cache: None }
    }

    pub fn get<T>(&mut self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
    {
        Ok(self.load()?.get(key).and_then(|p| p.parse().ok()))
    }

    pub fn get_or<T>(&mut self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
    {
        Ok(self.get(key)?.unwrap_or(default))
    }

    pub fn set<T>(&mut self, key: &str, value: T, overwrite: bool) -> Result<Option<T>>
    where
        T: FromStr + ToString,
    {
        let path = self.path.clone();
        let cache = self.load()?;

        if !cache.contains_key(key) || overwrite {
            cache.insert(key.to_string(), value.to_string());

            let content = Self::serialize(cache);
            fs::write(path, content)?;

            Ok(Some(value))
        } else {
            Ok(cache.get(key).and_then(|p| p.parse().ok()))
        }
    }

    fn load(&mut self) -> Result<&mut FxHashMap<String, String>> {
        if self.cache.is_none() {
            let settings = if self.path.exists() {
                info!("Loading settings from {}", self.path.display());
                Self::deserialize(&fs::read_to_string(&self.path)?)?
            } else {
                FxHashMap::default()
            };

            self.cache = Some(settings);
        }

        Ok(self.cache.get_or_insert_with(FxHashMap::default))
    }

    fn serialize(settings: &FxHashMap<String, String>) -> String {
        let mut items = settings.iter().collect::<Vec<_>>();
        items.sort();

        let mut output = String::new();
        for (name, value) in items {
            output.push_str(&format!("{}={}\n", name, value));
        }

        output
    }

    fn deserialize(settings: &str) -> Result<FxHashMap<String, String>> {
        let mut output = FxHashMap::default();

        for (index, line) in settings.lines().map(|p| p.trim()).enumerate() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((name, value)) = line.split_once('=') else {
                bail!("Invalid settings line {}: {}", index + 1, line);
            };

            output.insert(name.trim().to_string(), value.trim().to_string());
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::process;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("primitive-batch-{}-{}.cfg", name, process::id()))
    }

    #[test]
    fn values_are_parsed_from_file() {
        let path = temp_path("parse");
        fs::write(&path, "# comment\nwidth = 320\nbackground=#102030\n\nscale=abc\n").unwrap();

        let mut settings = SettingsStorage::new(&path);
        assert_eq!(settings.get::<u32>("width").unwrap(), Some(320));
        assert_eq!(settings.get::<String>("background").unwrap(), Some("#102030".to_string()));
        assert_eq!(settings.get::<f32>("scale").unwrap(), None);
        assert_eq!(settings.get_or::<u32>("height", 240).unwrap(), 240);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn set_respects_overwrite_flag() {
        let path = temp_path("set");
        let _ = fs::remove_file(&path);

        let mut settings = SettingsStorage::new(&path);
        assert_eq!(settings.set("particles", 64u32, false).unwrap(), Some(64));
        assert_eq!(settings.set("particles", 10u32, false).unwrap(), Some(64));
        assert_eq!(settings.set("particles", 10u32, true).unwrap(), Some(10));

        let mut reloaded = SettingsStorage::new(&path);
        assert_eq!(reloaded.get::<u32>("particles").unwrap(), Some(10));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn malformed_line_is_an_error() {
        let path = temp_path("malformed");
        fs::write(&path, "width\n").unwrap();

        let mut settings = SettingsStorage::new(&path);
        assert!(settings.get::<u32>("width").is_err());

        fs::remove_file(&path).unwrap();
    }
}
