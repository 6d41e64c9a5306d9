use super::*;

/// Build an all-background RGBA buffer of `width` x `height`.
fn background(width: u32, height: u32) -> Vec<u8> {
    vec![255; (width * height * 4) as usize]
}

fn idx(width: u32, x: u32, y: u32) -> usize {
    ((y * width + x) * 4) as usize
}

/// Paint one pixel black.
fn mark(data: &mut [u8], width: u32, x: u32, y: u32) {
    let i = idx(width, x, y);
    data[i] = 0;
    data[i + 1] = 0;
    data[i + 2] = 0;
}

// =============================================================
// content_bounds
// =============================================================

#[test]
fn all_background_has_no_bounds() {
    let data = background(8, 8);
    assert_eq!(content_bounds(&data, 8, 8), None);
}

#[test]
fn empty_buffer_has_no_bounds() {
    assert_eq!(content_bounds(&[], 0, 0), None);
}

#[test]
fn single_pixel_bounds_itself() {
    let mut data = background(8, 8);
    mark(&mut data, 8, 3, 5);
    let bounds = content_bounds(&data, 8, 8);
    assert_eq!(bounds, Some(ContentBounds { min_x: 3, min_y: 5, max_x: 3, max_y: 5 }));
}

#[test]
fn bounds_span_scattered_content() {
    let mut data = background(16, 16);
    mark(&mut data, 16, 2, 3);
    mark(&mut data, 16, 10, 1);
    mark(&mut data, 16, 7, 12);
    let bounds = content_bounds(&data, 16, 16);
    assert_eq!(bounds, Some(ContentBounds { min_x: 2, min_y: 1, max_x: 10, max_y: 12 }));
}

#[test]
fn corner_pixels_are_included() {
    let mut data = background(4, 4);
    mark(&mut data, 4, 0, 0);
    mark(&mut data, 4, 3, 3);
    let bounds = content_bounds(&data, 4, 4);
    assert_eq!(bounds, Some(ContentBounds { min_x: 0, min_y: 0, max_x: 3, max_y: 3 }));
}

#[test]
fn near_white_pixel_counts_as_content() {
    let mut data = background(4, 4);
    let i = idx(4, 2, 1);
    data[i + 2] = 254;
    let bounds = content_bounds(&data, 4, 4);
    assert_eq!(bounds, Some(ContentBounds { min_x: 2, min_y: 1, max_x: 2, max_y: 1 }));
}

#[test]
fn alpha_channel_is_ignored() {
    // The background fill is opaque; alpha never distinguishes content.
    let mut data = background(4, 4);
    let i = idx(4, 1, 2);
    data[i + 3] = 0;
    assert_eq!(content_bounds(&data, 4, 4), None);
}

// =============================================================
// ContentBounds dimensions
// =============================================================

#[test]
fn bounds_dimensions_are_inclusive() {
    let bounds = ContentBounds { min_x: 2, min_y: 1, max_x: 10, max_y: 12 };
    assert_eq!(bounds.width(), 9);
    assert_eq!(bounds.height(), 12);
}

#[test]
fn single_pixel_has_unit_dimensions() {
    let bounds = ContentBounds { min_x: 5, min_y: 5, max_x: 5, max_y: 5 };
    assert_eq!(bounds.width(), 1);
    assert_eq!(bounds.height(), 1);
}

// =============================================================
// ExportError display
// =============================================================

#[test]
fn empty_canvas_error_message() {
    assert_eq!(ExportError::EmptyCanvas.to_string(), "no content to export");
}

#[test]
fn browser_error_carries_detail() {
    let err = ExportError::Browser("boom".to_owned());
    assert_eq!(err.to_string(), "export failed: boom");
}
