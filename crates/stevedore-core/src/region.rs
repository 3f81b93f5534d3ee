//! Region allow-set and validation.
//!
//! The configured region list is checked once, before any network activity.
//! Validation fails on the first unknown region and produces no partial
//! result.

use crate::error::RegionError;

/// Artifact-registry locations accepted by the sync configuration.
///
/// Multi-region locations first, then regional locations grouped by
/// continent.
pub const ALLOWED_REGIONS: &[&str] = &[
    // Multi-regions
    "us",
    "europe",
    "asia",
    // Americas
    "us-central1",
    "us-east1",
    "us-east4",
    "us-east5",
    "us-south1",
    "us-west1",
    "us-west2",
    "us-west3",
    "us-west4",
    "northamerica-northeast1",
    "northamerica-northeast2",
    "southamerica-east1",
    "southamerica-west1",
    // Europe
    "europe-central2",
    "europe-north1",
    "europe-southwest1",
    "europe-west1",
    "europe-west2",
    "europe-west3",
    "europe-west4",
    "europe-west6",
    "europe-west8",
    "europe-west9",
    "europe-west10",
    "europe-west12",
    // Asia & Pacific
    "asia-east1",
    "asia-east2",
    "asia-northeast1",
    "asia-northeast2",
    "asia-northeast3",
    "asia-south1",
    "asia-south2",
    "asia-southeast1",
    "asia-southeast2",
    "australia-southeast1",
    "australia-southeast2",
    // Middle East & Africa
    "me-central1",
    "me-central2",
    "me-west1",
    "africa-south1",
];

/// Verifies every configured region is a member of the allow-set.
///
/// # Errors
///
/// Returns [`RegionError::UnknownRegion`] naming the first region that is not
/// a valid artifact-registry location.
pub fn validate_regions<'a, I>(regions: I) -> Result<(), RegionError>
where
    I: IntoIterator<Item = &'a str>,
{
    for region in regions {
        if !ALLOWED_REGIONS.contains(&region) {
            return Err(RegionError::UnknownRegion {
                region: region.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_allowed_regions_accepted() {
        assert!(validate_regions(ALLOWED_REGIONS.iter().copied()).is_ok());
    }

    #[test]
    fn test_unknown_region_rejected() {
        let result = validate_regions(["us-east1", "mars-north1"]);
        match result {
            Err(RegionError::UnknownRegion { region }) => assert_eq!(region, "mars-north1"),
            Ok(()) => panic!("expected validation to fail"),
        }
    }

    #[test]
    fn test_first_violation_reported() {
        let result = validate_regions(["nope-1", "nope-2"]);
        match result {
            Err(RegionError::UnknownRegion { region }) => assert_eq!(region, "nope-1"),
            Ok(()) => panic!("expected validation to fail"),
        }
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate_regions(std::iter::empty::<&str>()).is_ok());
    }
}
