//! Helpers for driving components in a headless `VirtualDom`.

use std::time::Duration;

use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

/// Poll tasks, run effects and re-render until the dom has been quiet for a
/// few rounds. Fixture fetches resolve immediately, so this covers a whole
/// load cycle.
pub(crate) async fn settle(dom: &mut VirtualDom) {
    for _ in 0..8 {
        if tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work())
            .await
            .is_ok()
        {
            dom.render_immediate(&mut NoOpMutations);
        }
    }
}
