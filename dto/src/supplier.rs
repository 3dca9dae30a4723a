use derive_getters::Getters;
use serde::Serialize;

const FRITOLAY_ID: &str = "fritolay";
const KEHE_ID: &str = "kehe";
const COREMARK_ID: &str = "coremark";

/// An ordering platform the automation backend can fill a cart on.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Supplier {
    id: String,
    name: String,
    description: String,
}

impl Supplier {
    pub fn new(id: String, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
}

/// Every supplier the backend knows about, in display order.
pub fn known_suppliers() -> Vec<Supplier> {
    vec![
        Supplier::new(
            FRITOLAY_ID.to_owned(),
            "Frito Lay".to_owned(),
            "Use the username and password of your Frito Lay ordering portal. \
             Items from the CSV are added to your Frito Lay cart."
                .to_owned(),
        ),
        Supplier::new(
            KEHE_ID.to_owned(),
            "KeHe".to_owned(),
            "Use the username and password of your KeHe CONNECT account. \
             Items from the CSV are added to your KeHe cart."
                .to_owned(),
        ),
        Supplier::new(
            COREMARK_ID.to_owned(),
            "Core-Mark".to_owned(),
            "Use the username and password of your Core-Mark online ordering account. \
             Items from the CSV are added to your Core-Mark cart."
                .to_owned(),
        ),
    ]
}

/// The suppliers presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct SupplierCatalog {
    suppliers: Vec<Supplier>,
}

impl SupplierCatalog {
    pub fn new(suppliers: Vec<Supplier>) -> Self {
        Self { suppliers }
    }

    /// Build a catalog restricted to the given ids, keeping their order.
    /// Ids that match no known supplier are returned alongside the catalog.
    pub fn from_ids<'a, I>(ids: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let known = known_suppliers();
        let mut suppliers = vec![];
        let mut unknown_ids = vec![];
        for id in ids {
            let id = id.trim();
            if id.is_empty() || suppliers.iter().any(|supplier: &Supplier| supplier.id == id) {
                continue;
            }
            match known.iter().find(|supplier| supplier.id == id) {
                Some(supplier) => suppliers.push(supplier.clone()),
                None => unknown_ids.push(id.to_owned()),
            }
        }
        (Self::new(suppliers), unknown_ids)
    }

    pub fn find(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|supplier| supplier.id == id)
    }

    /// Help text for a supplier id. Unknown, empty or unset ids resolve to an empty string.
    pub fn resolve(&self, id: &str) -> &str {
        self.find(id)
            .map(|supplier| supplier.description.as_str())
            .unwrap_or_default()
    }
}

impl Default for SupplierCatalog {
    fn default() -> Self {
        Self::new(known_suppliers())
    }
}
