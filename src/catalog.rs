//! Static catalog of Ethereum method selectors.
//!
//! The catalog is a fixed, ordered list of [`Category`] tables. Every table is
//! a compile-time constant; nothing here allocates or mutates at runtime
//! except the query helpers that collect matches.
//!
//! Selectors are *not* unique across the catalog. Several standard ABI
//! selectors are reused under different names in different categories, and
//! lookups therefore return every match rather than a single owner.

mod methods;

use crate::error::{CatalogError, CatalogResult};
use crate::flow::FlowType;
use itertools::Itertools;
use serde::Serialize;

pub use methods::*;

/// A single catalogued operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MethodEntry {
    /// Symbolic name, unique within its category.
    pub name: &'static str,
    /// 4-byte selector as `0x` + 8 hex digits. `None` for native transfers.
    pub signature: Option<&'static str>,
    pub description: &'static str,
    #[serde(rename = "flow_type")]
    pub flow: FlowType,
}

impl MethodEntry {
    /// Entry with a selector and an explicit flow type.
    pub const fn new(
        name: &'static str,
        signature: &'static str,
        description: &'static str,
        flow: FlowType,
    ) -> Self {
        Self {
            name,
            signature: Some(signature),
            description,
            flow,
        }
    }

    /// Entry with no discrete call selector (native value transfer).
    pub const fn unsigned(name: &'static str, description: &'static str, flow: FlowType) -> Self {
        Self {
            name,
            signature: None,
            description,
            flow,
        }
    }

    pub const fn outflow(
        name: &'static str,
        signature: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(name, signature, description, FlowType::Outflow)
    }

    pub const fn inflow(
        name: &'static str,
        signature: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(name, signature, description, FlowType::Inflow)
    }

    pub const fn bothflow(
        name: &'static str,
        signature: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(name, signature, description, FlowType::Bothflow)
    }

    /// Selector as rendered in reports.
    pub fn signature_or_na(&self) -> &'static str {
        self.signature.unwrap_or("N/A")
    }
}

/// A named group of operations belonging to one protocol or standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Lowercase identifier used on the command line and in config files.
    pub key: &'static str,
    /// Display title, e.g. `UNISWAP V2 METHODS`.
    pub title: &'static str,
    pub methods: &'static [MethodEntry],
}

impl Category {
    pub const fn new(
        key: &'static str,
        title: &'static str,
        methods: &'static [MethodEntry],
    ) -> Self {
        Self {
            key,
            title,
            methods,
        }
    }

    /// Look up an entry by its symbolic name within this category.
    pub fn method(&self, name: &str) -> Option<&'static MethodEntry> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn count_flow(&self, flow: FlowType) -> usize {
        self.methods.iter().filter(|m| m.flow == flow).count()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// All categories, in report order.
pub static CATALOG: [Category; 16] = [
    TRANSFER_TYPES,
    TOKEN_CREATION_METHODS,
    WRAPPED_TOKEN_METHODS,
    UNISWAP_V2_METHODS,
    UNISWAP_V3_METHODS,
    UNISWAP_V4_METHODS,
    ERC721_METHODS,
    ERC1155_METHODS,
    APPROVAL_METHODS,
    GOVERNANCE_METHODS,
    BRIDGE_METHODS,
    MAKER_METHODS,
    STAKING_METHODS,
    FLASH_LOAN_METHODS,
    CURVE_METHODS,
    COMPOUND_METHODS,
];

/// An entry together with the category that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogMatch {
    pub category: &'static Category,
    pub method: &'static MethodEntry,
}

pub fn categories() -> &'static [Category] {
    &CATALOG
}

/// Find a category by key (`uniswap_v2`) or title (`UNISWAP V2 METHODS`),
/// ignoring ASCII case.
pub fn category(id: &str) -> Option<&'static Category> {
    let id = id.trim();
    CATALOG
        .iter()
        .find(|c| c.key.eq_ignore_ascii_case(id) || c.title.eq_ignore_ascii_case(id))
}

/// Resolve a list of category identifiers, keeping the caller's order.
/// An empty list selects the whole catalog.
pub fn resolve_categories<S: AsRef<str>>(ids: &[S]) -> CatalogResult<Vec<&'static Category>> {
    if ids.is_empty() {
        return Ok(CATALOG.iter().collect());
    }
    ids.iter()
        .map(|id| {
            let id = id.as_ref();
            category(id).ok_or_else(|| CatalogError::unknown_category(id))
        })
        .collect()
}

/// Every entry in the catalog, in report order.
pub fn iter_methods() -> impl Iterator<Item = CatalogMatch> {
    CATALOG.iter().flat_map(|category| {
        category
            .methods
            .iter()
            .map(move |method| CatalogMatch { category, method })
    })
}

/// All entries carrying `selector`, compared ignoring ASCII case.
pub fn find_by_signature(selector: &str) -> Vec<CatalogMatch> {
    let selector = selector.trim();
    iter_methods()
        .filter(|m| {
            m.method
                .signature
                .is_some_and(|sig| sig.eq_ignore_ascii_case(selector))
        })
        .collect()
}

/// All entries with the symbolic name `name`. The same name (e.g. `MINT`)
/// recurs across categories as unrelated entries.
pub fn find_by_name(name: &str) -> Vec<CatalogMatch> {
    let name = name.trim();
    iter_methods()
        .filter(|m| m.method.name.eq_ignore_ascii_case(name))
        .collect()
}

/// Selectors used by more than one entry, ordered by selector, with owners in
/// catalog order.
pub fn shared_signatures() -> Vec<(&'static str, Vec<CatalogMatch>)> {
    iter_methods()
        .filter_map(|m| m.method.signature.map(|sig| (sig, m)))
        .into_group_map()
        .into_iter()
        .filter(|(_, owners)| owners.len() > 1)
        .sorted_by_key(|(sig, _)| *sig)
        .collect()
}

/// Entry counts per flow type across the whole catalog.
pub fn flow_totals() -> [(FlowType, usize); 3] {
    FlowType::ALL.map(|flow| {
        let count = CATALOG.iter().map(|c| c.count_flow(flow)).sum::<usize>();
        (flow, count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lookup_accepts_key_or_title() {
        assert_eq!(category("uniswap_v3").map(|c| c.title), Some("UNISWAP V3 METHODS"));
        assert_eq!(category("Uniswap V3 Methods").map(|c| c.key), Some("uniswap_v3"));
        assert!(category("uniswap_v5").is_none());
    }

    #[test]
    fn keys_are_unique() {
        let keys: Vec<_> = CATALOG.iter().map(|c| c.key).collect();
        assert_eq!(keys.iter().unique().count(), keys.len());
    }

    #[test]
    fn names_are_unique_within_each_category() {
        for c in &CATALOG {
            let unique = c.methods.iter().map(|m| m.name).unique().count();
            assert_eq!(unique, c.len(), "duplicate name in {}", c.title);
        }
    }

    #[test]
    fn resolve_categories_keeps_requested_order() {
        let picked = resolve_categories(&["curve", "transfer_types"]).unwrap();
        let keys: Vec<_> = picked.iter().map(|c| c.key).collect();
        assert_eq!(keys, ["curve", "transfer_types"]);
    }

    #[test]
    fn resolve_categories_rejects_unknown_key() {
        let err = resolve_categories(&["sushiswap"]).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(ref k) if k == "sushiswap"));
    }

    #[test]
    fn flow_totals_cover_every_entry() {
        let total: usize = flow_totals().iter().map(|(_, n)| n).sum();
        assert_eq!(total, iter_methods().count());
    }
}
