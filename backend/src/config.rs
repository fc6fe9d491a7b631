use std::{
	net::{IpAddr, Ipv4Addr, SocketAddr},
	path::PathBuf
};

use crate::decorations::BalloonConfig;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
	#[error("{key} is set to {value:?}, which isn't a valid {expected}")]
	Unparseable {
		key: &'static str,
		value: String,
		expected: &'static str
	},
	#[error("IMAGE_DIR ({0:?}) doesn't point to a readable directory")]
	NotADirectory(PathBuf)
}

#[derive(Debug, Clone)]
pub struct Config {
	pub addr: SocketAddr,
	/// Where `/images/*` gets served from. If it's not set, the celebrant pictures just won't load.
	pub image_dir: Option<PathBuf>,
	pub balloons: BalloonConfig
}

impl Config {
	/// Reads `.env` (if there is one) and then the environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		// empty vars count as unset, so `BACKEND_PORT=` in a .env doesn't blow up
		macro_rules! env_or{
			($key:expr, $default:expr, $type:ty) => {
				match lookup($key).filter(|v| !v.is_empty()) {
					None => $default,
					Some(value) => match value.parse::<$type>() {
						Ok(parsed) => parsed,
						Err(_) => return Err(ConfigError::Unparseable {
							key: $key,
							value,
							expected: stringify!($type)
						})
					}
				}
			}
		}

		let host = env_or!("BACKEND_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST), IpAddr);
		let port = env_or!("BACKEND_PORT", 8080, u16);
		let count = env_or!("BALLOON_COUNT", 20, usize);

		let image_dir = match lookup("IMAGE_DIR").filter(|d| !d.is_empty()) {
			None => None,
			Some(dir) => {
				let dir = PathBuf::from(dir);
				if !std::fs::metadata(&dir).is_ok_and(|m| m.is_dir()) {
					return Err(ConfigError::NotADirectory(dir));
				}
				Some(dir)
			}
		};

		Ok(Self {
			addr: SocketAddr::new(host, port),
			image_dir,
			balloons: BalloonConfig { count, ..BalloonConfig::default() }
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
		let vars = vars.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect::<HashMap<_, _>>();
		Config::from_lookup(|key| vars.get(key).cloned())
	}

	#[test]
	fn defaults_when_nothing_is_set() {
		let config = config_from(&[]).unwrap();
		assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
		assert_eq!(config.image_dir, None);
		assert_eq!(config.balloons, BalloonConfig::default());
	}

	#[test]
	fn reads_overrides() {
		let tmp = std::env::temp_dir();
		let config = config_from(&[
			("BACKEND_HOST", "0.0.0.0"),
			("BACKEND_PORT", "3000"),
			("BALLOON_COUNT", "4"),
			("IMAGE_DIR", tmp.to_str().unwrap()),
		]).unwrap();

		assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
		assert_eq!(config.image_dir, Some(tmp));
		assert_eq!(config.balloons.count, 4);
	}

	#[test]
	fn empty_values_are_unset() {
		let config = config_from(&[("BACKEND_PORT", ""), ("IMAGE_DIR", "")]).unwrap();
		assert_eq!(config.addr.port(), 8080);
		assert_eq!(config.image_dir, None);
	}

	#[test]
	fn bad_values_are_errors() {
		assert!(matches!(
			config_from(&[("BACKEND_PORT", "http")]),
			Err(ConfigError::Unparseable { key: "BACKEND_PORT", .. })
		));
		assert!(matches!(
			config_from(&[("BALLOON_COUNT", "-1")]),
			Err(ConfigError::Unparseable { key: "BALLOON_COUNT", .. })
		));
		assert!(matches!(
			config_from(&[("IMAGE_DIR", "/this/really/should/not/exist/anywhere")]),
			Err(ConfigError::NotADirectory(_))
		));
	}
}
