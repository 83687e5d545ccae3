//! Built-in sample catalog

use sampleboard_core::AudioSampleDescriptor;

/// Bucket serving the stock samples
pub const SAMPLE_BUCKET_URL: &str = "https://bandlabaudio.s3.ap-southeast-1.amazonaws.com";

/// The two stock samples, in card order.
pub fn default_catalog() -> Vec<AudioSampleDescriptor> {
    vec![
        AudioSampleDescriptor::new(
            "new wave sample",
            format!("{}/new-wave-kit.ogg", SAMPLE_BUCKET_URL),
        ),
        AudioSampleDescriptor::new(
            "synth organ sample",
            format!("{}/synth-organ.ogg", SAMPLE_BUCKET_URL),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_catalog_is_ogg_over_https() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "new wave sample");
        assert_eq!(catalog[1].name, "synth organ sample");
        for descriptor in &catalog {
            assert!(descriptor.endpoint.starts_with("https://"));
            assert_eq!(descriptor.extension().as_deref(), Some("ogg"));
        }
    }
}
