#[cfg(not(target_family = "wasm"))]
fn main() {
    solar_system_sim::start();
}

// The web build starts from the library's `wasm_bindgen(start)` entry point.
#[cfg(target_family = "wasm")]
fn main() {}
