mod app;
mod components;
mod screens;
mod shelf;
mod theme;
mod utils;

use std::sync::Arc;

use folio_bus::{host, HostBus, InMemoryEventBus};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    // Standalone dev host: this process plays the shell and owns the bus.
    let bus = InMemoryEventBus::new();
    if let Err(e) = host::install(Arc::new(bus.clone())) {
        tracing::error!("Failed to install event bus: {e}");
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([760.0, 520.0])
            .with_title("B-World // Book Detail"),
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            theme::setup(&cc.egui_ctx);

            let mut core = folio_app_core::build_application(Arc::new(HostBus))?;
            let ctx = cc.egui_ctx.clone();
            core.set_waker(move || ctx.request_repaint());
            if let Err(e) = core.mount() {
                tracing::error!("Failed to mount detail view: {e}");
            }

            Ok(Box::new(app::FolioUiApp::new(core, bus)))
        }),
    )
}
