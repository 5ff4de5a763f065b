//! QR code image links for short URLs.
//!
//! Links point at the public `api.qrserver.com` renderer; nothing is fetched
//! or generated locally.

use std::fmt;

/// Base URL of the QR code renderer.
pub const QR_CODE_API_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Default edge length of the image, in pixels.
pub const DEFAULT_QR_CODE_SIZE: u32 = 300;

/// Image format of a generated QR code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QrFormat {
    /// PNG image (default).
    #[default]
    Png,
    /// SVG image.
    Svg,
    /// Encapsulated PostScript.
    Eps,
    /// PDF document.
    Pdf,
}

impl QrFormat {
    /// Returns the value used in the `format` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Eps => "eps",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for QrFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering options for [`generate_qr_code_url`].
///
/// Colors are hex strings with or without a leading `#` (e.g. `"#ff0000"`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QrCodeOptions {
    /// Edge length in pixels (default: 300).
    pub size: Option<u32>,
    /// Foreground color.
    pub color: Option<String>,
    /// Background color.
    pub background_color: Option<String>,
    /// Image format (default: PNG).
    pub format: Option<QrFormat>,
}

/// Builds a QR code image URL for `short_url`.
///
/// # Example
///
/// ```rust
/// use clnk_sdk::qr::{generate_qr_code_url, QrCodeOptions};
///
/// let link = generate_qr_code_url("https://clnk.to/abc", &QrCodeOptions::default());
/// assert_eq!(
///     link,
///     "https://api.qrserver.com/v1/create-qr-code/?size=300x300&data=https%3A%2F%2Fclnk.to%2Fabc&format=png"
/// );
/// ```
#[must_use]
pub fn generate_qr_code_url(short_url: &str, options: &QrCodeOptions) -> String {
    let size = options.size.unwrap_or(DEFAULT_QR_CODE_SIZE);

    let mut params = vec![
        format!("size={size}x{size}"),
        format!("data={}", urlencoding::encode(short_url)),
    ];

    if let Some(color) = &options.color {
        params.push(format!("color={}", encode_color(color)));
    }
    if let Some(background) = &options.background_color {
        params.push(format!("bgcolor={}", encode_color(background)));
    }
    params.push(format!("format={}", options.format.unwrap_or_default()));

    format!("{QR_CODE_API_URL}?{}", params.join("&"))
}

fn encode_color(color: &str) -> String {
    let hex = color.strip_prefix('#').unwrap_or(color);
    urlencoding::encode(hex).into_owned()
}
