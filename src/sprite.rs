//! Terminal approximation of sprite images.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::client::PokeApiClient;
use crate::error::PokeApiError;
use crate::pokemon::Pokemon;

const RAMP: &[u8] = b" .:-=+*#%@";
const ALPHA_CUTOFF: u8 = 128;
/// Upper bound on rows, relative to the requested width.
const MAX_ROWS_PER_COLUMN: u32 = 2;

/// Output size and coloring of the ASCII art.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiOptions {
    /// Width in terminal columns.
    pub width: u32,
    /// Emit 24-bit ANSI foreground colors.
    pub colored: bool,
}

impl Default for AsciiOptions {
    fn default() -> Self {
        Self {
            width: 40,
            colored: true,
        }
    }
}

/// Which sprite of a Pokémon to render, and how.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpriteRequest {
    pub shiny: bool,
    pub back: bool,
    pub ascii: AsciiOptions,
}

/// Decode image bytes and render them as lines of ASCII art.
pub fn render_ascii(bytes: &[u8], options: &AsciiOptions) -> Result<String, PokeApiError> {
    let image = image::load_from_memory(bytes)?;
    Ok(render_image(&image, options))
}

fn render_image(image: &DynamicImage, options: &AsciiOptions) -> String {
    let (width, height) = image.dimensions();
    let columns = options.width.max(1);
    // Terminal cells are roughly twice as tall as they are wide
    let rows = (u64::from(height) * u64::from(columns)) / (u64::from(width.max(1)) * 2);
    let rows = u32::try_from(rows)
        .unwrap_or(u32::MAX)
        .clamp(1, columns.saturating_mul(MAX_ROWS_PER_COLUMN));

    let resized: RgbaImage = image
        .resize_exact(columns, rows, FilterType::Nearest)
        .to_rgba8();

    let mut out = String::new();
    for y in 0..resized.height() {
        for x in 0..resized.width() {
            let [r, g, b, a] = resized.get_pixel(x, y).0;
            if a < ALPHA_CUTOFF {
                out.push(' ');
                continue;
            }
            let luma = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
            let ch = RAMP[(luma as usize * (RAMP.len() - 1)) / 255] as char;
            if options.colored {
                out.push_str(&format!("\x1b[38;2;{};{};{}m{}", r, g, b, ch));
            } else {
                out.push(ch);
            }
        }
        if options.colored {
            out.push_str("\x1b[0m");
        }
        if y + 1 < resized.height() {
            out.push('\n');
        }
    }
    out
}

/// Download and render the requested sprite. `None` when the Pokémon has no
/// such sprite.
pub async fn fetch_ascii_sprite(
    client: &PokeApiClient,
    pokemon: &Pokemon,
    request: &SpriteRequest,
) -> Result<Option<String>, PokeApiError> {
    let Some(url) = pokemon.sprite_url(request.shiny, request.back) else {
        tracing::debug!("No sprite available for {:?}", pokemon.name);
        return Ok(None);
    };

    let bytes = client.fetch_bytes(url).await?;
    render_ascii(&bytes, &request.ascii).map(Some).map_err(|e| {
        tracing::error!("Failed to render sprite {}: {}", url, e);
        e
    })
}
