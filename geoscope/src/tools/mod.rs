pub mod area;
pub mod boundary;
mod config_args;
pub mod outline;
pub mod population;

pub use config_args::ConfigArgs;

use anyhow::Result;
use geoscope_core::CancellationToken;
use serde_json::Value;

/// A token that is cancelled on Ctrl-C, so a hanging Overpass query can be abandoned.
fn cancel_on_ctrl_c() -> CancellationToken {
	let cancel = CancellationToken::new();
	let trigger = cancel.clone();
	tokio::spawn(async move {
		if tokio::signal::ctrl_c().await.is_ok() {
			log::warn!("interrupted, cancelling requests");
			trigger.cancel();
		}
	});
	cancel
}

fn print_json(value: &Value, compact: bool) -> Result<()> {
	let text = if compact {
		serde_json::to_string(value)?
	} else {
		serde_json::to_string_pretty(value)?
	};
	println!("{text}");
	Ok(())
}
