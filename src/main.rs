use anyhow::Context;
use std::path::Path;
use udd_favicon::{generate, UDD_FAVICON};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let output = Path::new(UDD_FAVICON.output_path);
    generate(&UDD_FAVICON, output)
        .with_context(|| format!("Failed to create favicon at {}", output.display()))?;

    println!("✅ Favicon UDD creado en {}", output.display());
    Ok(())
}
