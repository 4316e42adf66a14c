// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use std::io::Write;
use std::path::{Path, PathBuf};

mod imp;
pub use imp::{CORS_NOTE, PAGE_FILE_NAME};

/// Open the `index.html` next to the running executable in the default browser,
/// then print the CORS notes to stdout
#[inline(always)]
pub fn run() -> cu::Result<()> {
    let dir = imp::exe_dir()?;
    let stdout = std::io::stdout();
    imp::launch_internal(&dir, &mut stdout.lock(), imp::open_default)?;
    Ok(())
}

/// Run the launch sequence for the page in `dir`, writing to `out` and
/// requesting `open` exactly once. Returns the URL that was requested.
///
/// The page is not checked for existence.
#[inline(always)]
pub fn launch<F>(dir: impl AsRef<Path>, out: &mut impl Write, open: F) -> cu::Result<String>
where
    F: FnOnce(&str) -> cu::Result<()>,
{
    imp::launch_internal(dir.as_ref(), out, open)
}

#[inline(always)]
pub fn exe_dir() -> cu::Result<PathBuf> {
    imp::exe_dir()
}

#[inline(always)]
pub fn page_path(dir: impl AsRef<Path>) -> PathBuf {
    imp::page_path(dir.as_ref())
}

#[inline(always)]
pub fn file_url(path: impl AsRef<Path>) -> String {
    imp::file_url(path.as_ref())
}

/// Hand `url` to the system's default browser without waiting on it
#[inline(always)]
pub fn open_default(url: &str) -> cu::Result<()> {
    imp::open_default(url)
}
