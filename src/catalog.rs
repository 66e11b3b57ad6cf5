//! Static catalog of the browsable upstream collections.
//!
//! Everything the rest of the crate needs to know about a collection lives
//! here: endpoint paths, the key the item list is nested under in response
//! bodies, which fields the filter bar exposes, which of those are numeric,
//! the category axis (products only), and the table columns.

use std::fmt;
use std::str::FromStr;

/// One of the two remote collections served by the upstream API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Resource {
    #[default]
    Users,
    Products,
}

/// A filterable field as shown in the filter bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
}

/// How a table cell renders the underlying JSON value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Plain string form of the value.
    Text,
    /// "Yes"/"No" depending on whether a value is present.
    Presence,
    /// Element count for array values.
    Count,
}

/// A table column definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: CellKind,
}

const fn col(key: &'static str, label: &'static str) -> Column {
    Column {
        key,
        label,
        kind: CellKind::Text,
    }
}

const USER_FILTERS: &[FieldDef] = &[
    FieldDef { key: "firstName", label: "First Name" },
    FieldDef { key: "lastName", label: "Last Name" },
    FieldDef { key: "age", label: "Age" },
    FieldDef { key: "email", label: "Email" },
];

const PRODUCT_FILTERS: &[FieldDef] = &[
    FieldDef { key: "title", label: "Title" },
    FieldDef { key: "brand", label: "Brand" },
    FieldDef { key: "category", label: "Category" },
];

const USER_COLUMNS: &[Column] = &[
    col("id", "ID"),
    col("firstName", "First Name"),
    col("lastName", "Last Name"),
    col("age", "Age"),
    col("email", "Email"),
    col("phone", "Phone"),
    col("username", "Username"),
    col("birthDate", "Birth Date"),
    col("bloodGroup", "Blood Group"),
    col("height", "Height"),
    col("weight", "Weight"),
    col("eyeColor", "Eye Color"),
];

const PRODUCT_COLUMNS: &[Column] = &[
    col("id", "ID"),
    col("title", "Title"),
    col("description", "Description"),
    col("price", "Price"),
    col("discountPercentage", "Discount %"),
    col("rating", "Rating"),
    col("stock", "Stock"),
    col("brand", "Brand"),
    col("category", "Category"),
    Column { key: "thumbnail", label: "Thumbnail", kind: CellKind::Presence },
    Column { key: "images", label: "Images", kind: CellKind::Count },
    col("availabilityStatus", "Availability"),
];

impl Resource {
    pub const ALL: [Resource; 2] = [Resource::Users, Resource::Products];

    pub fn title(&self) -> &'static str {
        match self {
            Resource::Users => "Users",
            Resource::Products => "Products",
        }
    }

    /// Key the item list is nested under in upstream response bodies.
    pub fn item_key(&self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Products => "products",
        }
    }

    pub fn listing_path(&self) -> &'static str {
        match self {
            Resource::Users => "/users",
            Resource::Products => "/products",
        }
    }

    pub fn search_path(&self) -> &'static str {
        match self {
            Resource::Users => "/users/search",
            Resource::Products => "/products/search",
        }
    }

    /// Fields the filter bar exposes for this collection.
    pub fn filter_fields(&self) -> &'static [FieldDef] {
        match self {
            Resource::Users => USER_FILTERS,
            Resource::Products => PRODUCT_FILTERS,
        }
    }

    /// Fields whose filter values are compared by exact numeric equality
    /// rather than routed to the search endpoint.
    pub fn numeric_fields(&self) -> &'static [&'static str] {
        match self {
            Resource::Users => &["age"],
            Resource::Products => &["price", "stock", "rating"],
        }
    }

    pub fn is_numeric_field(&self, field: &str) -> bool {
        self.numeric_fields().contains(&field)
    }

    /// The structural category axis, if this collection has one.
    pub fn category_axis(&self) -> Option<&'static str> {
        match self {
            Resource::Users => None,
            Resource::Products => Some("category"),
        }
    }

    /// Category-scoped listing path for a given slug.
    pub fn category_path(&self, slug: &str) -> Option<String> {
        self.category_axis()
            .map(|_| format!("{}/category/{}", self.listing_path(), slug))
    }

    pub fn columns(&self) -> &'static [Column] {
        match self {
            Resource::Users => USER_COLUMNS,
            Resource::Products => PRODUCT_COLUMNS,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.item_key())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "users" => Ok(Resource::Users),
            "products" => Ok(Resource::Products),
            other => Err(format!("unknown resource '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_path_is_products_only() {
        assert_eq!(
            Resource::Products.category_path("laptops").as_deref(),
            Some("/products/category/laptops")
        );
        assert_eq!(Resource::Users.category_path("laptops"), None);
    }

    #[test]
    fn twelve_columns_per_collection() {
        assert_eq!(Resource::Users.columns().len(), 12);
        assert_eq!(Resource::Products.columns().len(), 12);
    }

    #[test]
    fn resource_round_trips_through_str() {
        for resource in Resource::ALL {
            assert_eq!(resource.item_key().parse::<Resource>(), Ok(resource));
        }
    }
}
