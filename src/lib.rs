//! Generates the UDD favicon: a solid blue square with a centered white
//! "UDD" label, saved as a single-entry ICO.

pub mod error;
pub mod font;
pub mod models;
pub mod render;
pub mod utils;

pub use error::{Error, Result};
pub use font::{select_font, Font};
pub use models::{IconSpec, TextBBox, UDD_FAVICON};
pub use render::render_icon;

use log::info;
use std::path::Path;

/// Renders `spec` and writes the ICO to `output`.
///
/// The image is fully encoded in memory before the file is created, so a
/// failed run never leaves a partial file behind.
pub fn generate(spec: &IconSpec, output: &Path) -> Result<()> {
    let font = select_font(spec);
    let canvas = render_icon(spec, &font);
    let bytes = utils::encode_ico(&canvas)?;
    utils::write_icon(output, &bytes)?;
    info!("Wrote {} ({} bytes)", output.display(), bytes.len());
    Ok(())
}
