//! Cover images
//!
//! Value objects describing the media shown on a session page. The files
//! themselves live in external storage; only their metadata is checked here.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Default upper bound on a cover image (1 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 1024 * 1024;

/// Default minimum cover width in pixels
pub const DEFAULT_MIN_IMAGE_WIDTH: u32 = 300;

/// Default minimum cover height in pixels
pub const DEFAULT_MIN_IMAGE_HEIGHT: u32 = 200;

/// Rules a cover image must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImagePolicy {
    pub max_bytes: u64,
    pub min_width: u32,
    pub min_height: u32,
    /// Required width:height ratio
    pub ratio: (u32, u32),
}

impl Default for CoverImagePolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_IMAGE_BYTES,
            min_width: DEFAULT_MIN_IMAGE_WIDTH,
            min_height: DEFAULT_MIN_IMAGE_HEIGHT,
            ratio: (3, 2),
        }
    }
}

/// Accepted cover image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    Gif,
    Jpg,
    Jpeg,
    Png,
    Svg,
}

impl ImageType {
    /// Resolve the format from a file name's extension
    pub fn from_file_name(file_name: &str) -> Result<Self, DomainError> {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .ok_or_else(|| DomainError::InvalidImage(format!("no extension: {}", file_name)))?;
        ext.parse()
            .map_err(|_| DomainError::InvalidImage(format!("unsupported type: {}", ext)))
    }
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageType::Gif => write!(f, "gif"),
            ImageType::Jpg => write!(f, "jpg"),
            ImageType::Jpeg => write!(f, "jpeg"),
            ImageType::Png => write!(f, "png"),
            ImageType::Svg => write!(f, "svg"),
        }
    }
}

impl std::str::FromStr for ImageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gif" => Ok(ImageType::Gif),
            "jpg" => Ok(ImageType::Jpg),
            "jpeg" => Ok(ImageType::Jpeg),
            "png" => Ok(ImageType::Png),
            "svg" => Ok(ImageType::Svg),
            _ => Err(format!("Unknown image type: {}", s)),
        }
    }
}

/// A single validated cover image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    file_name: String,
    image_type: ImageType,
    size_bytes: u64,
    width: u32,
    height: u32,
}

impl Image {
    pub fn new(
        file_name: impl Into<String>,
        size_bytes: u64,
        width: u32,
        height: u32,
        policy: &CoverImagePolicy,
    ) -> Result<Self, DomainError> {
        let file_name = file_name.into();
        let image_type = ImageType::from_file_name(&file_name)?;

        if size_bytes == 0 || size_bytes > policy.max_bytes {
            return Err(DomainError::InvalidImage(format!(
                "size must be between 1 and {} bytes, got {}",
                policy.max_bytes, size_bytes
            )));
        }
        if width < policy.min_width || height < policy.min_height {
            return Err(DomainError::InvalidImage(format!(
                "must be at least {}x{}, got {}x{}",
                policy.min_width, policy.min_height, width, height
            )));
        }
        let (rw, rh) = policy.ratio;
        // width / height == rw / rh, in integers
        if u64::from(width) * u64::from(rh) != u64::from(height) * u64::from(rw) {
            return Err(DomainError::InvalidImage(format!(
                "width:height must be {}:{}, got {}x{}",
                rw, rh, width, height
            )));
        }

        Ok(Self {
            file_name,
            image_type,
            size_bytes,
            width,
            height,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn image_type(&self) -> ImageType {
        self.image_type
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// The non-empty set of cover images attached to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Images(Vec<Image>);

impl Images {
    pub fn new(images: Vec<Image>) -> Result<Self, DomainError> {
        if images.is_empty() {
            return Err(DomainError::MissingField("images"));
        }
        Ok(Self(images))
    }

    /// The image shown first on the session page
    pub fn primary(&self) -> &Image {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Image> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> CoverImagePolicy {
        CoverImagePolicy::default()
    }

    #[test]
    fn accepts_valid_cover() {
        let image = Image::new("cover.png", 500_000, 300, 200, &policy()).unwrap();
        assert_eq!(image.image_type(), ImageType::Png);
        assert_eq!(image.dimensions(), (300, 200));
    }

    #[test]
    fn extension_is_case_insensitive() {
        let image = Image::new("COVER.JPEG", 1024, 600, 400, &policy()).unwrap();
        assert_eq!(image.image_type(), ImageType::Jpeg);
    }

    #[test]
    fn rejects_oversized_file() {
        let err = Image::new("cover.png", DEFAULT_MAX_IMAGE_BYTES + 1, 300, 200, &policy())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidImage(_)));
    }

    #[test]
    fn rejects_unsupported_extension() {
        assert!(Image::new("cover.bmp", 1024, 300, 200, &policy()).is_err());
        assert!(Image::new("cover", 1024, 300, 200, &policy()).is_err());
    }

    #[test]
    fn rejects_small_dimensions() {
        assert!(Image::new("cover.gif", 1024, 150, 100, &policy()).is_err());
    }

    #[test]
    fn rejects_wrong_ratio() {
        assert!(Image::new("cover.svg", 1024, 400, 400, &policy()).is_err());
    }

    #[test]
    fn custom_policy_is_honoured() {
        let relaxed = CoverImagePolicy {
            max_bytes: 10,
            min_width: 3,
            min_height: 2,
            ratio: (3, 2),
        };
        assert!(Image::new("tiny.png", 10, 3, 2, &relaxed).is_ok());
        assert!(Image::new("tiny.png", 11, 3, 2, &relaxed).is_err());
    }

    #[test]
    fn images_must_not_be_empty() {
        assert_eq!(
            Images::new(vec![]).unwrap_err(),
            DomainError::MissingField("images")
        );
    }

    #[test]
    fn primary_is_first_image() {
        let first = Image::new("a.png", 1024, 300, 200, &policy()).unwrap();
        let second = Image::new("b.png", 1024, 600, 400, &policy()).unwrap();
        let images = Images::new(vec![first.clone(), second]).unwrap();
        assert_eq!(images.primary(), &first);
        assert_eq!(images.iter().count(), 2);
    }
}
