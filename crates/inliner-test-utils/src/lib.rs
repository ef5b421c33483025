//! Testing utilities for inliner workspace
//!
//! Shared test helpers, fixtures, and sample payloads.

#![allow(missing_docs)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Minimal WASM module: magic number plus version 1
pub const WASM_HEADER: &[u8] = b"\x00asm\x01\x00\x00\x00";

/// PNG file signature
pub const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Marker used by the embedder unless overridden
pub const MARKER: &str = "<!-- WASM_BASE64_PLACEHOLDER -->";

/// Single-marker HTML template
pub const TEMPLATE: &str = "<html><!-- WASM_BASE64_PLACEHOLDER --></html>";

/// Scratch directory removed on drop
#[derive(Debug)]
pub struct TempWorkspace {
    dir: TempDir,
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("write fixture");
        path
    }

    pub fn write_text(&self, name: &str, text: &str) -> PathBuf {
        self.write_bytes(name, text.as_bytes())
    }

    pub fn read_text(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("read fixture")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }
}
