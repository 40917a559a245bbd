//! Coastal waters forecast, reordered by region

use crate::{Result, WeatherReportError};

/// Separates zone forecasts in the raw NWS product
pub const SECTION_DELIMITER: &str = "$$";

/// One zone's forecast text, unmodified from the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarineSection {
    pub region: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarineReport {
    pub sections: Vec<MarineSection>,
}

/// Split the raw product into blocks, in feed order
#[must_use]
pub fn split_sections(raw: &str) -> Vec<&str> {
    raw.split(SECTION_DELIMITER).collect()
}

/// For each region, in the given order, take the first block that mentions it.
///
/// Fails if any region is missing from every block.
pub fn order_sections(blocks: &[&str], regions: &[&str]) -> Result<Vec<MarineSection>> {
    regions
        .iter()
        .map(|region| {
            blocks
                .iter()
                .find(|block| block.contains(*region))
                .map(|block| MarineSection {
                    region: (*region).to_string(),
                    text: (*block).to_string(),
                })
                .ok_or_else(|| {
                    WeatherReportError::not_found(format!(
                        "no marine forecast section mentions {region}"
                    ))
                })
        })
        .collect()
}

impl MarineReport {
    /// Build the report from the raw product text
    pub fn from_raw(raw: &str, regions: &[&str]) -> Result<Self> {
        let blocks = split_sections(raw);
        let sections = order_sections(&blocks, regions)?;
        Ok(Self { sections })
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.sections.iter().map(|s| s.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::MARINE_REGION_ORDER;

    const RAW: &str = "FZAK51 PAFC 011330\nCWFAER\n\
$$\nPKZ141-020015-\nKACHEMAK BAY-\nSW WIND 10 KT. SEAS 2 FT.\n\
$$\nPKZ140-020015-\nSHELIKOF STRAIT-\nW WIND 25 KT. SEAS 8 FT.\n\
$$\nPKZ139-020015-\nCOOK INLET KALGIN ISLAND TO POINT BEDE-\nVARIABLE WIND 10 KT.\n\
$$\n";

    #[test]
    fn test_split_sections() {
        let blocks = split_sections(RAW);
        assert_eq!(blocks.len(), 5);
        assert!(blocks[0].starts_with("FZAK51"));
        assert!(blocks[2].contains("SHELIKOF STRAIT"));
        assert_eq!(blocks[4], "\n");
    }

    #[test]
    fn test_order_follows_region_list() {
        let blocks = split_sections(RAW);
        let regions = [
            "SHELIKOF STRAIT",
            "KACHEMAK BAY",
            "COOK INLET KALGIN ISLAND TO POINT BEDE",
        ];
        let sections = order_sections(&blocks, &regions).unwrap();

        let order: Vec<_> = sections.iter().map(|s| s.region.as_str()).collect();
        assert_eq!(order, regions);
        assert_eq!(sections[0].text, blocks[2]);
        assert_eq!(sections[1].text, blocks[1]);
        assert_eq!(sections[2].text, blocks[3]);
    }

    #[test]
    fn test_first_matching_block_wins() {
        let blocks = ["A KACHEMAK BAY first", "B KACHEMAK BAY second"];
        let sections = order_sections(&blocks, &["KACHEMAK BAY"]).unwrap();
        assert_eq!(sections[0].text, "A KACHEMAK BAY first");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let blocks = ["kachemak bay-\nwind light."];
        let err = order_sections(&blocks, &["KACHEMAK BAY"]).unwrap_err();
        assert!(matches!(err, WeatherReportError::NotFound { .. }));
    }

    #[test]
    fn test_missing_region_fails_without_partial_output() {
        let err = MarineReport::from_raw(RAW, &MARINE_REGION_ORDER).unwrap_err();
        assert!(matches!(err, WeatherReportError::NotFound { .. }));
        assert!(err.to_string().contains("COOK INLET NORTH OF KALGIN ISLAND"));
    }

    #[test]
    fn test_render_concatenates_in_order() {
        let report = MarineReport::from_raw(RAW, &["SHELIKOF STRAIT", "KACHEMAK BAY"]).unwrap();
        let rendered = report.render();
        let shelikof = rendered.find("SHELIKOF STRAIT").unwrap();
        let kachemak = rendered.find("KACHEMAK BAY").unwrap();
        assert!(shelikof < kachemak);
        assert!(!rendered.contains(SECTION_DELIMITER));
    }
}
