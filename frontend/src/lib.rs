use wasm_bindgen_futures::spawn_local;

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: resolves the runtime config, then mounts the shell.
pub fn start() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting HRMS frontend: initializing runtime config");

    spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        router::mount_app();
    });
}
