//! Minimal tour: guard a fallible call, wrap the failure with more context,
//! and log the whole stack as one JSON line.
//!
//! Run with: `cargo run --example quick_start`

use stacklog::prelude::*;

fn read_quota(path: &str) -> Captured<u64> {
    Guard::with_context(format!("reading quota from {path}")).run(|| {
        std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|raw| raw.trim().parse::<u64>().map_err(|e| e.to_string()))
    })
}

fn main() {
    let emitter = Emitter::from_env();
    let (err, quota) = read_quota("/etc/app/quota");

    match quota {
        Some(quota) => emitter.info(format!("quota is {quota}")),
        None => {
            let err = stack!["startup aborted", err.unwrap_or_default()];
            emitter.log(
                Record::new()
                    .level(Level::Error)
                    .message("could not load quota")
                    .op_id(fresh_op_id())
                    .errors(err),
            );
        }
    }
}
