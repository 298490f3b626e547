/// Canonical county names, in the enumeration order used for substring fallback.
pub const COUNTY_NAMES: [&str; 67] = [
    "Alachua", "Baker", "Bay", "Bradford", "Brevard", "Broward", "Calhoun", "Charlotte", "Citrus",
    "Clay", "Collier", "Columbia", "DeSoto", "Dixie", "Duval", "Escambia", "Flagler", "Franklin",
    "Gadsden", "Gilchrist", "Glades", "Gulf", "Hamilton", "Hardee", "Hendry", "Hernando",
    "Highlands", "Hillsborough", "Holmes", "Indian River", "Jackson", "Jefferson", "Lafayette",
    "Lake", "Lee", "Leon", "Levy", "Liberty", "Madison", "Manatee", "Marion", "Martin",
    "Miami-Dade", "Monroe", "Nassau", "Okaloosa", "Okeechobee", "Orange", "Osceola", "Palm Beach",
    "Pasco", "Pinellas", "Polk", "Putnam", "Santa Rosa", "Sarasota", "Seminole", "St. Johns",
    "St. Lucie", "Sumter", "Suwannee", "Taylor", "Union", "Volusia", "Wakulla", "Walton",
    "Washington",
];

/// City or alias to county. Keys are written the way they appear in
/// headlines and are normalised once when the lookup table is built.
pub const CITY_TO_COUNTY: &[(&str, &str)] = &[
    ("miami", "Miami-Dade"),
    ("miami-dade county", "Miami-Dade"),
    ("miami dade", "Miami-Dade"),
    ("miami beach", "Miami-Dade"),
    ("north miami", "Miami-Dade"),
    ("coral gables", "Miami-Dade"),
    ("hialeah", "Miami-Dade"),
    ("homestead", "Miami-Dade"),
    ("fort lauderdale", "Broward"),
    ("ft. lauderdale", "Broward"),
    ("pembroke pines", "Broward"),
    ("hollywood", "Broward"),
    ("pompano beach", "Broward"),
    ("weston", "Broward"),
    ("broward county", "Broward"),
    ("palm beach", "Palm Beach"),
    ("palm beach county", "Palm Beach"),
    ("west palm beach", "Palm Beach"),
    ("delray beach", "Palm Beach"),
    ("boynton beach", "Palm Beach"),
    ("jupiter", "Palm Beach"),
    ("lake worth", "Palm Beach"),
    ("boca raton", "Palm Beach"),
    ("tampa", "Hillsborough"),
    ("plant city", "Hillsborough"),
    ("hillsborough county", "Hillsborough"),
    ("st. petersburg", "Pinellas"),
    ("st pete", "Pinellas"),
    ("clearwater", "Pinellas"),
    ("pinellas county", "Pinellas"),
    ("orlando", "Orange"),
    ("winter park", "Orange"),
    ("orange county", "Orange"),
    ("kissimmee", "Osceola"),
    ("st. cloud", "Osceola"),
    ("osceola county", "Osceola"),
    ("fort myers", "Lee"),
    ("fort myers beach", "Lee"),
    ("cape coral", "Lee"),
    ("naples", "Collier"),
    ("marco island", "Collier"),
    ("key west", "Monroe"),
    ("key largo", "Monroe"),
    ("islamorada", "Monroe"),
    ("marathon", "Monroe"),
    ("florida keys", "Monroe"),
    ("daytona beach", "Volusia"),
    ("deltona", "Volusia"),
    ("palm coast", "Flagler"),
    ("jacksonville", "Duval"),
    ("pensacola", "Escambia"),
    ("panama city", "Bay"),
    ("tallahassee", "Leon"),
    ("lake city", "Columbia"),
    ("gainesville", "Alachua"),
    ("ocala", "Marion"),
    ("sarasota", "Sarasota"),
    ("bradenton", "Manatee"),
    ("manatee county", "Manatee"),
    ("the villages", "Sumter"),
    ("lakeland", "Polk"),
    ("winter haven", "Polk"),
    ("polk county", "Polk"),
    ("lake county", "Lake"),
    ("duval county", "Duval"),
    ("st. lucie", "St. Lucie"),
    ("st. lucie county", "St. Lucie"),
    ("port st. lucie", "St. Lucie"),
    ("st. johns", "St. Johns"),
    ("st. johns county", "St. Johns"),
];
