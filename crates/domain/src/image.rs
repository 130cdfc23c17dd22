/// Suffixes accepted by [`is_valid_image`]. Matching is case-sensitive.
pub const VALID_IMAGE_SUFFIXES: [&str; 4] = [".png", ".jpg", ".jpeg", ".gif"];

/// Returns true when `path` ends in one of [`VALID_IMAGE_SUFFIXES`].
///
/// This is a plain suffix test on the raw string: `photo.PNG` is rejected
/// and no attempt is made to parse an extension out of the path.
pub fn is_valid_image(path: &str) -> bool {
    VALID_IMAGE_SUFFIXES
        .iter()
        .any(|suffix| path.ends_with(suffix))
}
