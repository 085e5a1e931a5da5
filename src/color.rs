use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Dashboard palette
// ---------------------------------------------------------------------------

pub const ACCENT: Color32 = Color32::from_rgb(0x58, 0xa6, 0xff);
pub const CYAN: Color32 = Color32::from_rgb(0x00, 0xd4, 0xff);
pub const MUTED: Color32 = Color32::from_rgb(0x8b, 0x94, 0x9e);
pub const ERROR: Color32 = Color32::from_rgb(0xf8, 0x51, 0x49);

// ---------------------------------------------------------------------------
// Diverging red → white → blue scale
// ---------------------------------------------------------------------------

const RED_END: (u8, u8, u8) = (0xb2, 0x18, 0x2b);
const MID: (u8, u8, u8) = (0xf7, 0xf7, 0xf7);
const BLUE_END: (u8, u8, u8) = (0x21, 0x66, 0xac);

fn linear(rgb: (u8, u8, u8)) -> LinSrgb {
    Srgb::new(rgb.0, rgb.1, rgb.2).into_format::<f32>().into_linear()
}

fn to_color32(lin: LinSrgb) -> Color32 {
    let rgb: Srgb<u8> = Srgb::<f32>::from_linear(lin).into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

/// Colour `value` on a scale symmetric around zero: `-max_abs` is deep red,
/// zero is near-white, `+max_abs` is deep blue. Values outside the range are
/// clamped.
pub fn diverging_color(value: f64, max_abs: f64) -> Color32 {
    if !value.is_finite() || max_abs <= 0.0 || !max_abs.is_finite() {
        return to_color32(linear(MID));
    }
    let t = (value / max_abs).clamp(-1.0, 1.0) as f32;
    let mid = linear(MID);
    if t < 0.0 {
        to_color32(mid.mix(linear(RED_END), -t))
    } else {
        to_color32(mid.mix(linear(BLUE_END), t))
    }
}

/// Largest absolute value among `values`, for use as a symmetric domain.
pub fn symmetric_extent(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .map(f64::abs)
        .fold(0.0, f64::max)
}
