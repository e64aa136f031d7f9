//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::{Catalog, ImageRef};
use crate::core::state::App;

/// A three-item catalog for tests that don't need the full startup data.
pub fn tiny_catalog() -> Catalog {
    Catalog::new([
        ("Payung Lipat", "Ditemukan di halte depan kampus.", ImageRef::new("payung")),
        ("Kunci Motor", "Ada gantungan boneka kecil.", ImageRef::new("kunci")),
        ("Topi Hitam", "Tertinggal di ruang baca.", ImageRef::new("topi")),
    ])
}

/// Creates a test App over [`tiny_catalog`].
pub fn test_app() -> App {
    App::new(tiny_catalog())
}
