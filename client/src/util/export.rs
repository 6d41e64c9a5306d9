//! Image export: crop the drawn content and download it as a PNG.
//!
//! DESIGN
//! ======
//! The canvas is mostly background; exporting all 3000x3000 pixels would
//! produce a huge, mostly-empty image. The exporter reads the pixel buffer
//! back, finds the bounding box of non-background content, and downloads
//! only that region. An all-background canvas is reported as an error
//! instead of downloading a blank file.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

/// Why an export produced no file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportError {
    /// Every pixel is background; there is nothing to export.
    EmptyCanvas,
    /// A DOM or canvas call failed.
    Browser(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCanvas => write!(f, "no content to export"),
            Self::Browser(detail) => write!(f, "export failed: {detail}"),
        }
    }
}

/// Inclusive pixel bounding box of drawn content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl ContentBounds {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

/// Scan an RGBA pixel buffer for the bounding box of non-background content.
///
/// The background fill is opaque white, so any pixel whose RGB channels are
/// not all 255 counts as content. Returns `None` for an all-background
/// buffer. Erased regions are background-colored and correctly excluded.
#[must_use]
pub fn content_bounds(data: &[u8], width: u32, height: u32) -> Option<ContentBounds> {
    let mut bounds: Option<ContentBounds> = None;
    for y in 0..height {
        for x in 0..width {
            let i = ((y * width + x) * 4) as usize;
            let [r, g, b] = [data[i], data[i + 1], data[i + 2]];
            if r == 255 && g == 255 && b == 255 {
                continue;
            }
            bounds = Some(match bounds {
                None => ContentBounds { min_x: x, min_y: y, max_x: x, max_y: y },
                Some(current) => ContentBounds {
                    min_x: current.min_x.min(x),
                    min_y: current.min_y.min(y),
                    max_x: current.max_x.max(x),
                    max_y: current.max_y.max(y),
                },
            });
        }
    }
    bounds
}

/// Crop the canvas to its drawn content and trigger a PNG download.
#[cfg(feature = "hydrate")]
pub fn save_png(canvas: &web_sys::HtmlCanvasElement) -> Result<(), ExportError> {
    use canvas::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use wasm_bindgen::JsCast;

    let ctx = context_2d(canvas)?;
    let image = ctx
        .get_image_data(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT)
        .map_err(browser)?;
    let bounds = content_bounds(&image.data(), image.width(), image.height())
        .ok_or(ExportError::EmptyCanvas)?;

    let cropped = ctx
        .get_image_data(
            f64::from(bounds.min_x),
            f64::from(bounds.min_y),
            f64::from(bounds.width()),
            f64::from(bounds.height()),
        )
        .map_err(browser)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Browser("document unavailable".to_owned()))?;

    let target = document
        .create_element("canvas")
        .map_err(browser)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|el| browser(el.into()))?;
    target.set_width(bounds.width());
    target.set_height(bounds.height());
    context_2d(&target)?
        .put_image_data(&cropped, 0.0, 0.0)
        .map_err(browser)?;

    let url = target.to_data_url().map_err(browser)?;
    let anchor = document
        .create_element("a")
        .map_err(browser)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|el| browser(el.into()))?;
    anchor.set_href(&url);
    anchor.set_download("sketchboard.png");
    anchor.click();
    Ok(())
}

#[cfg(feature = "hydrate")]
fn context_2d(
    canvas: &web_sys::HtmlCanvasElement,
) -> Result<web_sys::CanvasRenderingContext2d, ExportError> {
    use wasm_bindgen::JsCast;

    canvas
        .get_context("2d")
        .map_err(browser)?
        .ok_or_else(|| ExportError::Browser("2d context unavailable".to_owned()))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|obj| browser(obj.into()))
}

#[cfg(feature = "hydrate")]
fn browser(err: wasm_bindgen::JsValue) -> ExportError {
    ExportError::Browser(format!("{err:?}"))
}
