//! Entry point for the WASM application

pub fn main() {
    servicehub_footer::mount();
}
