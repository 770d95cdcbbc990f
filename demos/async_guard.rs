//! Async capture: the guard adds no suspension points of its own and the
//! capture semantics match the sync guard once the future settles.
//!
//! Run with: `cargo run --example async_guard --features async`

use std::time::Duration;

use stacklog::prelude_async::*;

async fn fetch_profile(user_id: u64) -> Result<String, String> {
    tokio::time::sleep(Duration::from_millis(10)).await;
    Err(format!("record {user_id} missing"))
}

#[tokio::main]
async fn main() {
    let emitter = Emitter::new();

    let (err, profile) = fetch_profile(7)
        .guarded_with("loading profile for request")
        .await;

    match profile {
        Some(profile) => emitter.info(profile),
        None => emitter.log(
            Record::new()
                .level(Level::Error)
                .message("profile lookup failed")
                .errors(err.unwrap_or_default()),
        ),
    }
}
