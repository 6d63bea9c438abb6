//! Boundary to the QR matrix renderer.

/// Turns a payload string into a scannable image and back.
///
/// Implemented by the application on top of its QR library of choice.
pub trait CodeRenderer {
    type Image;
    type Error: std::fmt::Display;

    fn encode(&self, payload: &str) -> Result<Self::Image, Self::Error>;

    fn decode(&self, image: &Self::Image) -> Result<String, Self::Error>;
}

/// Which text form of the envelope goes into the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayloadEncoding {
    #[default]
    Json,
    Base64,
}
