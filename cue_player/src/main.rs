use anyhow::{Context as _, Result};
use board::Board;
use cue_config::Config;
use log::info;
use std::{env::args_os, path::PathBuf};

mod board;
mod capturer;
mod pacer;
mod player;
mod trace;

const CONFIG_FILE: &str = "cue_player.toml";

fn main() -> Result<()> {
	trace::setup();

	let config = if let Some(path) = args_os().nth(1).map(PathBuf::from) {
		Config::read(&path).with_context(|| format!("loading {}", path.display()))?
	} else {
		let path = dirs::config_dir()
			.context("can't find the system's config dir")?
			.join(CONFIG_FILE);

		info!("using {}", path.display());

		Config::read_or_create(&path).with_context(|| format!("loading {}", path.display()))?
	};

	info!(
		"{} event groups at {}x speed",
		config.groups.len(),
		config.time_multiplier
	);

	let mut board = Board::new(config.target_names());
	let summary = player::play(&config, &mut board);

	summary.log();
	for (name, flags) in board.iter() {
		for (flag, value) in flags.iter() {
			info!("final {name}.{flag} = {value}");
		}
	}

	Ok(())
}
