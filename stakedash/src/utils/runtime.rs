/// Global Tokio runtime for async network operations.
///
/// egui drives rendering from the main thread and has no async executor of
/// its own. This static runtime provides one: `main` enters it before
/// handing control to eframe, after which `tokio::spawn` works from UI event
/// handlers, and spawned tasks run on the runtime's worker threads.
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async network operations")
});
