//! Hooks wiring the search pipeline into the component tree.

use dioxus::prelude::*;
use scout_search::{PipelineConfig, SearchPipeline};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

use crate::services::CatalogService;
use crate::state::HeaderState;

/// Build the header state once and provide it to the component tree.
pub fn use_header_state(catalog: CatalogService, config: PipelineConfig) -> HeaderState {
    let (header, settled) = use_hook(|| {
        let (pipeline, settled) = SearchPipeline::new(catalog, config);
        (HeaderState::new(pipeline), Signal::new(Some(settled)))
    });

    use_context_provider(|| header.clone());
    use_settled_queries(header.clone(), settled);
    use_catalog_page(header.clone());

    header
}

/// Run every debounced query through the pipeline.
///
/// Each query gets its own task so a slow response never delays a newer
/// one; the pipeline's generation check decides which result is shown.
fn use_settled_queries(header: HeaderState, settled: Signal<Option<UnboundedReceiver<String>>>) {
    use_future(move || {
        let header = header.clone();
        let mut settled = settled;
        async move {
            let receiver = settled.write().take();
            let Some(mut receiver) = receiver else {
                return;
            };

            while let Some(query) = receiver.recv().await {
                let mut header = header.clone();
                spawn(async move {
                    header.search(&query).await;
                });
            }
        }
    });
}

/// Load the catalog page used when filtering without a query.
fn use_catalog_page(header: HeaderState) {
    use_future(move || {
        let header = header.clone();
        async move {
            match header.pipeline.load_catalog_page().await {
                Ok(count) => info!("Catalog page ready ({count} movies)"),
                Err(e) => warn!("Failed to load catalog page: {e}"),
            }
        }
    });
}
