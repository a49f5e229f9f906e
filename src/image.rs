//! Card image URLs
//!
//! Images are served from a fixed CDN path keyed by set code and the
//! zero-padded card number. Only the string is built here; whether the
//! image exists is up to the CDN.

use std::fmt;

/// Host serving card scans
pub const IMAGE_HOST: &str = "limitlesstcg.nyc3.cdn.digitaloceanspaces.com";

/// Minimum width of the card number in image file names
const NUMBER_WIDTH: usize = 3;

/// Build the image URL for a card
///
/// `card_number` may be an integer or a string. It is left-padded with
/// zeros to three characters and never truncated:
/// ("SVI", 6) -> ".../tpci/SVI/SVI_006_R_EN.png",
/// ("SVI", 1500) -> ".../tpci/SVI/SVI_1500_R_EN.png".
pub fn card_image_url(set_code: &str, card_number: impl fmt::Display) -> String {
    let number = card_number.to_string();
    format!("https://{IMAGE_HOST}/tpci/{set_code}/{set_code}_{number:0>NUMBER_WIDTH$}_R_EN.png")
}
