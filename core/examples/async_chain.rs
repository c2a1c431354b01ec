use futures_executor::block_on;
use log::{info, warn};
use outcome_core::{Outcome, ToOutcome, TypedOutcome};

async fn fetch_user(id: u32) -> TypedOutcome<String> {
    (id < 100)
        .to_outcome_or(format!("user {} does not exist", id))
        .map(|| TypedOutcome::success(format!("user-{}", id)))
}

async fn audit(user: String) {
    info!("audited {}", user);
}

async fn load(id: u32) -> TypedOutcome<usize> {
    Outcome::success()
        .then_async(|| fetch_user(id))
        .await
        .on_success_async(|user| audit(user.clone()))
        .await
        .map_async(|user| async move { user.len() })
        .await
        .tap_error_async(|d| {
            let d = d.to_string();
            async move { warn!("load failed: {}", d) }
        })
        .await
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    for id in [7, 512] {
        let summary = block_on(load(id)).match_with(
            |len| format!("user {} has a {} character name", id, len),
            |d| format!("user {}: {}", id, d),
        );
        info!("{}", summary);
    }

    block_on(load(7)).erase().into_result()
}
