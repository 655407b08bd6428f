//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `dragonrealm_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("dragonrealm_core ping={}", dragonrealm_core::ping());
    println!(
        "dragonrealm_core version={}",
        dragonrealm_core::core_version()
    );
}
