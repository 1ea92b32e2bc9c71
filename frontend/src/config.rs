
#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    ""  // trunk serves assets from the dev server root
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "/static"  // Production CDN mount
}

pub fn asset_url(path: &str) -> String {
    format!("{}{}", get_asset_base(), path)
}

// Viewport widths (px) where the review carousel shows 2 and 3 cards.
pub const BREAKPOINT_MEDIUM: f64 = 640.0;
pub const BREAKPOINT_LARGE: f64 = 1024.0;

// 10 minute promo
pub const PROMO_SECONDS: u32 = 600;

pub const BOOKING_URL: &str = "https://calendly.com/puri-business7/15min";
pub const OFFER_CAPTURE_PREFIX: &str = "royal-services";

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/royal_touch.auto.detailing/";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/profile.php?id=61563899468930";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_urls_share_the_build_base() {
        let icon = asset_url("/assets/google-g.svg");
        assert!(icon.starts_with(get_asset_base()));
        assert!(icon.ends_with("/assets/google-g.svg"));
        assert_eq!(icon.len(), get_asset_base().len() + "/assets/google-g.svg".len());
    }
}
