use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Site profile key used by the default extractor registry. Competitors that
/// omit `site` in the YAML fall back to this profile.
pub const DEFAULT_SITE: &str = "books";

/// One external site/URL pair to be checked for a given product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorTarget {
    pub name: String,
    pub url: String,
    /// Extractor registry key identifying which selector profile applies to
    /// this competitor's pages.
    #[serde(default = "default_site")]
    pub site: String,
}

fn default_site() -> String {
    DEFAULT_SITE.to_string()
}

/// A product and the competitor listings to check it against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductTarget {
    pub product_name: String,
    pub competitors: Vec<CompetitorTarget>,
}

/// CSS selectors for the three fields a listing page must expose.
///
/// Selector syntax is not validated here; the extractor registry compiles
/// these and reports bad selectors when the profile is registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSelectors {
    pub title: String,
    pub price: String,
    pub availability: String,
}

#[derive(Debug, Deserialize)]
pub struct TargetsFile {
    pub products: Vec<ProductTarget>,
    /// Additional site profiles beyond the built-ins, keyed by the `site`
    /// value competitors reference.
    #[serde(default)]
    pub sites: std::collections::HashMap<String, SiteSelectors>,
}

impl TargetsFile {
    /// Returns the total number of competitor fetches one run will attempt.
    #[must_use]
    pub fn competitor_count(&self) -> usize {
        self.products.iter().map(|p| p.competitors.len()).sum()
    }
}

/// Load and validate the monitoring targets from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_targets(path: &Path) -> Result<TargetsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TargetsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let targets: TargetsFile = serde_yaml::from_str(&content)?;

    validate_targets(&targets)?;

    Ok(targets)
}

fn validate_targets(targets: &TargetsFile) -> Result<(), ConfigError> {
    if targets.products.is_empty() {
        return Err(ConfigError::Validation(
            "targets file lists no products".to_string(),
        ));
    }

    for product in &targets.products {
        if product.product_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "product_name must be non-empty".to_string(),
            ));
        }

        if product.competitors.is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' lists no competitors",
                product.product_name
            )));
        }

        let mut seen_names = HashSet::new();
        for competitor in &product.competitors {
            if competitor.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "product '{}' has a competitor with an empty name",
                    product.product_name
                )));
            }

            if !competitor.url.starts_with("http://") && !competitor.url.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "competitor '{}' has invalid url '{}'; must start with http:// or https://",
                    competitor.name, competitor.url
                )));
            }

            if competitor.site.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "competitor '{}' has an empty site key",
                    competitor.name
                )));
            }

            if !seen_names.insert(competitor.name.clone()) {
                return Err(ConfigError::Validation(format!(
                    "product '{}' lists competitor '{}' more than once",
                    product.product_name, competitor.name
                )));
            }
        }
    }

    for (key, selectors) in &targets.sites {
        if key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site profile key must be non-empty".to_string(),
            ));
        }
        for (field, selector) in [
            ("title", &selectors.title),
            ("price", &selectors.price),
            ("availability", &selectors.availability),
        ] {
            if selector.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "site profile '{key}' has an empty {field} selector"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitor(name: &str, url: &str) -> CompetitorTarget {
        CompetitorTarget {
            name: name.to_string(),
            url: url.to_string(),
            site: DEFAULT_SITE.to_string(),
        }
    }

    fn one_product(competitors: Vec<CompetitorTarget>) -> TargetsFile {
        TargetsFile {
            products: vec![ProductTarget {
                product_name: "A Light in the Attic".to_string(),
                competitors,
            }],
            sites: std::collections::HashMap::new(),
        }
    }

    #[test]
    fn validate_accepts_well_formed_targets() {
        let targets = one_product(vec![
            competitor("Amazon", "http://books.toscrape.com/catalogue/x/index.html"),
            competitor("Flipkart", "https://example.com/listing"),
        ]);
        assert!(validate_targets(&targets).is_ok());
    }

    #[test]
    fn validate_rejects_empty_products() {
        let targets = TargetsFile {
            products: vec![],
            sites: std::collections::HashMap::new(),
        };
        let err = validate_targets(&targets).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(msg) if msg.contains("no products")));
    }

    #[test]
    fn validate_rejects_empty_product_name() {
        let mut targets = one_product(vec![competitor("Amazon", "http://example.com")]);
        targets.products[0].product_name = "  ".to_string();
        let err = validate_targets(&targets).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(msg) if msg.contains("product_name")));
    }

    #[test]
    fn validate_rejects_product_without_competitors() {
        let targets = one_product(vec![]);
        let err = validate_targets(&targets).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(msg) if msg.contains("no competitors")));
    }

    #[test]
    fn validate_rejects_non_http_url() {
        let targets = one_product(vec![competitor("Amazon", "ftp://example.com/listing")]);
        let err = validate_targets(&targets).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(msg) if msg.contains("invalid url")));
    }

    #[test]
    fn validate_rejects_duplicate_competitor() {
        let targets = one_product(vec![
            competitor("Amazon", "http://example.com/a"),
            competitor("Amazon", "http://example.com/b"),
        ]);
        let err = validate_targets(&targets).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(msg) if msg.contains("more than once")));
    }

    #[test]
    fn site_defaults_to_books_when_omitted() {
        let yaml = r"
products:
  - product_name: A Light in the Attic
    competitors:
      - name: Amazon
        url: http://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html
";
        let targets: TargetsFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(targets.products[0].competitors[0].site, DEFAULT_SITE);
    }

    #[test]
    fn competitor_count_sums_across_products() {
        let targets = TargetsFile {
            products: vec![
                ProductTarget {
                    product_name: "Book A".to_string(),
                    competitors: vec![
                        competitor("Amazon", "http://example.com/a"),
                        competitor("Flipkart", "http://example.com/b"),
                    ],
                },
                ProductTarget {
                    product_name: "Book B".to_string(),
                    competitors: vec![competitor("Amazon", "http://example.com/c")],
                },
            ],
            sites: std::collections::HashMap::new(),
        };
        assert_eq!(targets.competitor_count(), 3);
    }

    #[test]
    fn validate_rejects_empty_site_selector() {
        let mut targets = one_product(vec![competitor("Amazon", "http://example.com/a")]);
        targets.sites.insert(
            "shopfront".to_string(),
            SiteSelectors {
                title: "h1".to_string(),
                price: String::new(),
                availability: ".stock".to_string(),
            },
        );
        let err = validate_targets(&targets).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(msg) if msg.contains("price selector")));
    }

    #[test]
    fn custom_site_profiles_parse_from_yaml() {
        let yaml = r"
products:
  - product_name: A Light in the Attic
    competitors:
      - name: Shopfront
        url: http://example.com/listing
        site: shopfront
sites:
  shopfront:
    title: h1.product-title
    price: span.price
    availability: div.stock-status
";
        let targets: TargetsFile = serde_yaml::from_str(yaml).unwrap();
        assert!(validate_targets(&targets).is_ok());
        assert_eq!(targets.products[0].competitors[0].site, "shopfront");
        assert_eq!(targets.sites["shopfront"].price, "span.price");
    }

    #[test]
    fn load_targets_from_real_file() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("targets.yaml");
        assert!(
            path.exists(),
            "targets.yaml missing at {path:?} — required for this test"
        );
        let result = load_targets(&path);
        assert!(result.is_ok(), "failed to load targets.yaml: {result:?}");
        let targets = result.unwrap();
        assert!(!targets.products.is_empty());
    }
}
