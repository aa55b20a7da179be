//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `staffdir_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use staffdir_core::InMemoryEmployeeRepository;

fn main() {
    let repo = InMemoryEmployeeRepository::new(Vec::new());
    println!("staffdir_core version={}", staffdir_core::core_version());
    println!("staffdir_core roster_len={}", repo.len());
}
