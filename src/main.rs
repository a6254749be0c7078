#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod carousel;
mod config;
mod contact;
mod content;
mod error;
mod logging;
mod pagination;
mod routes;
mod typewriter;
mod viewport;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
