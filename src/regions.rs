/// A state, union territory or the whole country, keyed by its two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEntry {
    pub code: &'static str,
    /// Must match the `state` field used by the statistics feed.
    pub name: &'static str,
    pub phone: &'static str,
}

const fn region(code: &'static str, name: &'static str, phone: &'static str) -> RegionEntry {
    RegionEntry { code, name, phone }
}

/// Code used for the nationwide totals.
pub const COUNTRY_CODE: &str = "IN";

static REGIONS: [RegionEntry; 38] = [
    region("IN", "India", "+91-11-23978046"),
    region("MH", "Maharashtra", "020-26127394"),
    region("KL", "Kerala", "0471-2552056"),
    region("TN", "Tamil Nadu", "044-29510500"),
    region("UP", "Uttar Pradesh", "18001805145"),
    region("KA", "Karnataka", "104"),
    region("DL", "Delhi", "011-22307145"),
    region("RJ", "Rajasthan", "0141-2225624"),
    region("TG", "Telangana", "104"),
    region("GJ", "Gujarat", "104"),
    region("MP", "Madhya Pradesh", "104"),
    region("JK", "Jammu and Kashmir", "0194-2440283"),
    region("HR", "Haryana", "8558893911"),
    region("PB", "Punjab", "104"),
    region("AP", "Andhra Pradesh", "0866-2410978"),
    region("WB", "West Bengal", "1800313444222"),
    region("BR", "Bihar", "104"),
    region("LK", "Ladakh", "01982256462"),
    region("CH", "Chandigarh", "9779558282"),
    region("AN", "Andaman and Nicobar Islands", "03192-232102"),
    region("CT", "Chhattisgarh", "104"),
    region("UT", "Uttarakhand", "104"),
    region("GA", "Goa", "104"),
    region("HP", "Himachal Pradesh", "104"),
    region("OR", "Odisha", "9439994859"),
    region("MN", "Manipur", "3852411668"),
    region("MZ", "Mizoram", "102"),
    region("PY", "Puducherry", "104"),
    region("AS", "Assam", "6913347770"),
    region("JH", "Jharkhand", "104"),
    region("AR", "Arunachal Pradesh", "9436055743"),
    region("DN", "Dadra and Nagar Haveli", "104"),
    region("DD", "Daman and Diu", "104"),
    region("LD", "Lakshadweep", "104"),
    region("ML", "Meghalaya", "108"),
    region("NL", "Nagaland", "7005539653"),
    region("SK", "Sikkim", "104"),
    region("TR", "Tripura", "0381-2315879"),
];

pub fn all() -> &'static [RegionEntry] {
    &REGIONS
}

pub fn lookup(code: &str) -> Option<&'static RegionEntry> {
    REGIONS.iter().find(|region| region.code == code)
}

/// One `CODE - Name` line per region, in directory order.
pub fn listing() -> String {
    all()
        .iter()
        .map(|region| format!("{} - {}", region.code, region.name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_region_has_name_and_phone() {
        for region in all() {
            assert_eq!(region.code.len(), 2, "bad code {:?}", region.code);
            assert!(!region.name.is_empty(), "{} has no name", region.code);
            assert!(!region.phone.is_empty(), "{} has no phone", region.code);
            assert_eq!(lookup(region.code), Some(region));
        }
    }

    #[test]
    fn codes_and_names_are_unique() {
        let codes: HashSet<_> = all().iter().map(|r| r.code).collect();
        let names: HashSet<_> = all().iter().map(|r| r.name).collect();
        assert_eq!(codes.len(), all().len());
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(lookup("KL").map(|r| r.name), Some("Kerala"));
        assert_eq!(lookup(COUNTRY_CODE).map(|r| r.name), Some("India"));
        assert!(lookup("kl").is_none());
        assert!(lookup("XX").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn listing_has_one_line_per_region() {
        let listing = listing();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), all().len());
        for (line, region) in lines.iter().zip(all()) {
            assert_eq!(*line, format!("{} - {}", region.code, region.name));
        }
        assert_eq!(lines[0], "IN - India");
    }
}
