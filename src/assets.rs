//! Image metadata extraction for the flag and road-sign picture sets.
//!
//! These functions take page HTML that the caller already fetched and pull
//! out `{name, file_name, url}` entries. Nothing here touches the network or
//! the filesystem; [`metadata_json`] renders the `metadata.json` layout the
//! app loads at runtime.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::drill_engine::error::Result;

pub const ROAD_SIGN_ORIGIN: &str = "https://www.rhinocarhire.com";
pub const FLAG_ORIGIN: &str = "https://www.worldometers.info";

/// How far past a flag `<img>` to look for its caption.
const CAPTION_WINDOW: usize = 500;

static ROAD_SIGN_TILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<noscript><img class="image-tile"[^>]*alt="([^"]*)"[^>]*src="([^"]*)"[^>]*></noscript>"#)
        .expect("road sign pattern")
});

static ROAD_SIGN_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*-\s*Road Sign\s*$").expect("road sign suffix pattern")
});

static FLAG_IMG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img[^>]*class="[^"]*h-\[80px\] w-\[120px\] object-contain[^"]*"[^>]*src="([^"]*)"[^>]*>"#)
        .expect("flag image pattern")
});

static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<span[^>]*class="[^"]*font-bold[^"]*"[^>]*>([^<]+)</span>"#)
        .expect("caption pattern")
});

static UNSAFE_FILE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[<>:"/\\|?*]"#).expect("file name pattern")
});

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    pub name: String,
    pub file_name: String,
    pub url: String,
}

/// Replace characters that are illegal in file names with `_` and
/// whitespace runs with `-`.
pub fn sanitize_file_name(name: &str) -> String {
    let replaced = UNSAFE_FILE_CHARS.replace_all(name, "_");
    WHITESPACE_RUN.replace_all(&replaced, "-").into_owned()
}

fn absolutize(url: &str, origin: &str) -> String {
    if url.starts_with('/') {
        format!("{origin}{url}")
    } else {
        url.to_string()
    }
}

fn entry(name: String, url: String) -> Option<ImageEntry> {
    if name.is_empty() || url.is_empty() {
        return None;
    }
    Some(ImageEntry { file_name: sanitize_file_name(&name), name, url })
}

/// Road-sign tiles live in `<noscript>` fallbacks; the alt text is the caption.
pub fn extract_road_signs(html: &str) -> Vec<ImageEntry> {
    let items: Vec<ImageEntry> = ROAD_SIGN_TILE
        .captures_iter(html)
        .filter_map(|caps| {
            let alt = caps[1].trim();
            let name = ROAD_SIGN_SUFFIX.replace(alt, "").into_owned();
            entry(name, absolutize(&caps[2], ROAD_SIGN_ORIGIN))
        })
        .collect();
    debug!(count = items.len(), "extracted road signs");
    items
}

/// Largest char boundary at or below `index`.
fn floor_boundary(s: &str, index: usize) -> usize {
    let mut i = index.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Flags are `<img>` tiles followed shortly by a bold `<span>` with the name.
pub fn extract_country_flags(html: &str) -> Vec<ImageEntry> {
    let mut items = Vec::new();
    for caps in FLAG_IMG.captures_iter(html) {
        let Some(whole) = caps.get(0) else { continue };
        let window = &html[whole.start()..floor_boundary(html, whole.start() + CAPTION_WINDOW)];
        let Some(name_caps) = BOLD_SPAN.captures(window) else { continue };

        let src = &caps[1];
        let url = if src.starts_with('/') {
            format!("{FLAG_ORIGIN}{src}")
        } else if !src.starts_with("http") {
            format!("{FLAG_ORIGIN}/{src}")
        } else {
            src.to_string()
        };

        if let Some(e) = entry(name_caps[1].trim().to_string(), url) {
            items.push(e);
        }
    }
    debug!(count = items.len(), "extracted country flags");
    items
}

/// Pretty-printed JSON array, two-space indent.
pub fn metadata_json(entries: &[ImageEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
