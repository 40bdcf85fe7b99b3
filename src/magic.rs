//! Detect image formats from magic numbers

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

struct Signature {
    len: usize,
    patterns: &'static [&'static [u8]],
    format: ImageFormat,
}

// Checked in order, first match wins.
const SIGNATURES: &[Signature] = &[
    Signature {
        len: 8,
        patterns: &[b"\x89PNG\r\n\x1a\n"],
        format: ImageFormat::Png,
    },
    Signature {
        len: 2,
        patterns: &[b"\xff\xd8"],
        format: ImageFormat::Jpeg,
    },
    Signature {
        len: 6,
        patterns: &[b"GIF87a", b"GIF89a"],
        format: ImageFormat::Gif,
    },
];

const FALLBACK: ImageFormat = ImageFormat::Png;

impl ImageFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// Classify `data` by its leading bytes. Unrecognised content is reported
/// as PNG.
pub fn detect(data: &[u8]) -> ImageFormat {
    SIGNATURES
        .iter()
        .find(|sig| {
            data.get(..sig.len)
                .is_some_and(|prefix| sig.patterns.iter().any(|p| *p == prefix))
        })
        .map_or(FALLBACK, |sig| sig.format)
}
