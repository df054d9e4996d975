use crate::Refrigerant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefrigerantCatalogEntry {
    pub refrigerant: Refrigerant,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
}

impl RefrigerantCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

const REFRIGERANT_CATALOG: [RefrigerantCatalogEntry; 15] = [
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R22,
        canonical_id: "R22",
        display_name: "R22",
        aliases: &["chlorodifluoromethane", "hcfc-22"],
    },
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R32,
        canonical_id: "R32",
        display_name: "R32",
        aliases: &["difluoromethane"],
    },
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R125,
        canonical_id: "R125",
        display_name: "R125",
        aliases: &["pentafluoroethane"],
    },
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R134a,
        canonical_id: "R134a",
        display_name: "R134a",
        aliases: &["tetrafluoroethane"],
    },
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R152a,
        canonical_id: "R152a",
        display_name: "R152a",
        aliases: &["difluoroethane"],
    },
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R245fa,
        canonical_id: "R245fa",
        display_name: "R245fa",
        aliases: &["pentafluoropropane"],
    },
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R290,
        canonical_id: "R290",
        display_name: "R290 (Propane)",
        aliases: &["propane", "c3h8"],
    },
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R404A,
        canonical_id: "R404A",
        display_name: "R404A",
        aliases: &[],
    },
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R407C,
        canonical_id: "R407C",
        display_name: "R407C",
        aliases: &[],
    },
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R410A,
        canonical_id: "R410A",
        display_name: "R410A",
        aliases: &[],
    },
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R507A,
        canonical_id: "R507A",
        display_name: "R507A",
        aliases: &[],
    },
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R600a,
        canonical_id: "R600a",
        display_name: "R600a (Isobutane)",
        aliases: &["isobutane", "i-butane"],
    },
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R717,
        canonical_id: "R717",
        display_name: "R717 (Ammonia)",
        aliases: &["ammonia", "nh3"],
    },
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R744,
        canonical_id: "R744",
        display_name: "R744 (CO2)",
        aliases: &["carbon dioxide", "co2"],
    },
    RefrigerantCatalogEntry {
        refrigerant: Refrigerant::R1234yf,
        canonical_id: "R1234yf",
        display_name: "R1234yf",
        aliases: &["tetrafluoropropene", "hfo-1234yf"],
    },
];

pub fn refrigerant_catalog() -> &'static [RefrigerantCatalogEntry] {
    &REFRIGERANT_CATALOG
}

pub fn filter_refrigerant_catalog(query: &str) -> Vec<RefrigerantCatalogEntry> {
    refrigerant_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in refrigerant_catalog() {
            assert!(
                seen.insert(entry.canonical_id),
                "duplicate canonical id: {}",
                entry.canonical_id
            );
        }
    }

    #[test]
    fn every_refrigerant_is_listed() {
        for refrigerant in Refrigerant::ALL {
            assert!(
                refrigerant_catalog()
                    .iter()
                    .any(|entry| entry.refrigerant == refrigerant),
                "{} missing from catalog",
                refrigerant.key()
            );
        }
    }

    #[test]
    fn search_finds_ammonia() {
        let results = filter_refrigerant_catalog("ammonia");
        assert!(
            results
                .iter()
                .any(|entry| entry.refrigerant == Refrigerant::R717)
        );
    }

    #[test]
    fn empty_query_returns_everything() {
        assert_eq!(
            filter_refrigerant_catalog("").len(),
            refrigerant_catalog().len()
        );
    }
}
