use crate::error::{Error, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::buffer::ConvertBuffer;
use image::{RgbImage, RgbaImage};
use log::debug;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories searched for fonts that aren't found relative to the working directory.
pub fn font_search_dirs() -> Vec<PathBuf> {
    let home = env::var_os("HOME").map(PathBuf::from);
    let mut dirs = Vec::new();
    if cfg!(windows) {
        let windir = env::var_os("WINDIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("C:\\Windows"));
        dirs.push(windir.join("Fonts"));
    } else if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/Library/Fonts"));
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        if let Some(home) = &home {
            dirs.push(home.join("Library/Fonts"));
        }
    } else {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
        if let Some(home) = &home {
            dirs.push(home.join(".local/share/fonts"));
            dirs.push(home.join(".fonts"));
        }
    }
    dirs
}

/// Resolves a font name to a file: first as a path, then by searching the
/// system font directories.
pub fn find_font_file(name: &str) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Some(direct.to_path_buf());
    }
    if direct.is_absolute() {
        return None;
    }
    find_font_file_in(name, &font_search_dirs())
}

/// Walks each root recursively and returns the first file whose name
/// matches `name`, ignoring ASCII case.
pub fn find_font_file_in(name: &str, roots: &[PathBuf]) -> Option<PathBuf> {
    for root in roots {
        if !root.is_dir() {
            continue;
        }
        debug!("Searching {} for {}", root.display(), name);
        let found = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .find(|e| {
                e.file_type().is_file()
                    && e.file_name().to_string_lossy().eq_ignore_ascii_case(name)
            });
        if let Some(entry) = found {
            return Some(entry.into_path());
        }
    }
    None
}

/// Encodes the canvas as an ICO holding a single entry at the canvas size.
pub fn encode_ico(canvas: &RgbImage) -> Result<Vec<u8>> {
    let rgba: RgbaImage = canvas.convert();
    let (width, height) = rgba.dimensions();
    let icon_image = IconImage::from_rgba_data(width, height, rgba.into_raw());

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    icon_dir.add_entry(IconDirEntry::encode(&icon_image).map_err(Error::Encode)?);

    let mut bytes = Vec::new();
    icon_dir.write(&mut bytes).map_err(Error::Encode)?;
    Ok(bytes)
}

/// Writes the encoded icon, replacing any existing file.
/// The parent directory must already exist.
pub fn write_icon(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(Error::MissingOutputDir(parent.to_path_buf()));
        }
    }
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes).map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    Ok(())
}
