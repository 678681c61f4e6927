mod engine;

use crate::engine::core::app_setup::create_app;

fn main() {
    println!("Particle veil viewer starting...");
    let mut app = create_app();

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
