// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use std::io::Write;
use std::path::{Path, PathBuf};

use cu::pre::*;

pub const PAGE_FILE_NAME: &str = "index.html";

/// Work-arounds for browsers refusing cross-origin loads from `file://` pages
pub const CORS_NOTE: &str = concat!(
    "\n",
    "Note: If you see CORS errors, you'll need to:\n",
    "1. Open Chrome with disabled security (for development only):\n",
    "   open -n -a 'Google Chrome' --args --disable-web-security --user-data-dir=/tmp/chrome_dev\n",
    "\n",
    "2. Or use Firefox which is more lenient with local files\n",
    "\n",
    "3. Or start Chrome with a local server flag:\n",
    "   open -a 'Google Chrome' index.html --args --allow-file-access-from-files\n",
);

#[cu::context("failed to find the directory of the executable")]
pub fn exe_dir() -> cu::Result<PathBuf> {
    let dir = cu::fs::current_exe()?.parent_abs()?;
    cu::trace!("executable directory: {}", dir.display());
    Ok(dir)
}

pub fn page_path(dir: &Path) -> PathBuf {
    dir.join(PAGE_FILE_NAME)
}

// no percent-encoding, the path goes in as displayed
pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

pub fn launch_internal<W, F>(dir: &Path, out: &mut W, open: F) -> cu::Result<String>
where
    W: Write,
    F: FnOnce(&str) -> cu::Result<()>,
{
    let url = file_url(&page_path(dir));
    cu::check!(
        writeln!(out, "Opening game at: {url}"),
        "failed to write to output"
    )?;
    cu::debug!("requesting default handler for {url}");
    // fire-and-forget: the host decides what a failure looks like
    if let Err(e) = open(&url) {
        cu::warn!("{e:?}");
    }
    cu::check!(
        out.write_all(CORS_NOTE.as_bytes()),
        "failed to write to output"
    )?;
    cu::check!(out.flush(), "failed to flush output")?;
    Ok(url)
}

pub fn open_default(url: &str) -> cu::Result<()> {
    cu::trace!("opening with default browser: {url}");
    cu::check!(
        webbrowser::open(url),
        "failed to open '{url}' with the default browser"
    )
}
