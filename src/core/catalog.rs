//! # Item Catalog
//!
//! The static list of lost-and-found items shown by the app.
//!
//! The catalog is built once at startup from literal data and never
//! changes afterwards: no inserts, no updates, no deletes. Everything
//! downstream (navigation, rendering) receives it by reference, so the
//! whole UI is a function of this one immutable sequence.
//!
//! Items are addressed by [`ItemId`], assigned in sequence when the
//! catalog is constructed. The display name stays display data — it is
//! also available as a lookup key ([`Catalog::find_by_name`]) but it is
//! not what navigation routes on.

/// Stable identifier for an [`Item`], assigned at catalog construction.
///
/// Ids are opaque to callers; the only things you can do with one are
/// carry it through navigation state and hand it back to
/// [`Catalog::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u32);

impl ItemId {
    /// Rebuild an id from its raw value.
    ///
    /// Useful for exercising the dangling-id path (an id that no longer
    /// — or never did — resolve in the catalog is still a valid
    /// navigation target).
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Opaque reference to a bundled artwork asset.
///
/// The catalog only stores the name; turning it into something drawable
/// is the asset table's job (`tui::assets`). A ref that no asset
/// answers to simply renders as an empty image slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef(&'static str);

impl ImageRef {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(self) -> &'static str {
        self.0
    }
}

/// A single lost-and-found entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    /// Display name. Unique within the catalog.
    pub name: String,
    /// Free-text description, as reported.
    pub description: String,
    /// Bundled artwork reference.
    pub image: ImageRef,
}

/// Ordered, read-only sequence of [`Item`]s.
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from `(name, description, image)` records,
    /// assigning ids in record order.
    pub fn new<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, ImageRef)>,
    {
        let items: Vec<Item> = records
            .into_iter()
            .enumerate()
            .map(|(index, (name, description, image))| Item {
                id: ItemId(index as u32),
                name: name.to_string(),
                description: description.to_string(),
                image,
            })
            .collect();

        // Catalog data is authored in this crate; a duplicate name is a
        // programming error, not a runtime condition.
        debug_assert!(
            unique_names(&items),
            "catalog item names must be unique"
        );

        Self { items }
    }

    /// All items, in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id. Absent ids are `None`, never an error.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up an item by display name. Absent names are `None`, never
    /// an error.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }
}

fn unique_names(items: &[Item]) -> bool {
    let mut seen = std::collections::HashSet::new();
    items.iter().all(|item| seen.insert(item.name.as_str()))
}

/// The startup catalog: the five reports from the original board,
/// verbatim. Three of the descriptions were already cut short at the
/// source; that is how they are kept.
pub fn sample_catalog() -> Catalog {
    Catalog::new([
        (
            "Tumbler Hijau",
            "Terakhir kali saya memakai tumbler ini adalah sekitar jam 12.50 di FEB, \
             selepas sholat dhuhr dan hendak menuju kelas.",
            ImageRef::new("tumbler"),
        ),
        (
            "Kacamata Anti Radiasi",
            "Minggu ini kuliahkan di R...",
            ImageRef::new("kacamata"),
        ),
        (
            "Rolex Terbaru",
            "Kulitnya warna cokelat dan...",
            ImageRef::new("jam"),
        ),
        (
            "Converse Pink Muda",
            "Ukuran 38, ada coretan...",
            ImageRef::new("sepatu"),
        ),
        (
            "Tas Rajut Putih",
            "Buat valentine tapi putus...",
            ImageRef::new("tas"),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_catalog_order() {
        let catalog = sample_catalog();
        for (index, item) in catalog.items().iter().enumerate() {
            assert_eq!(item.id.raw(), index as u32);
        }
    }

    #[test]
    fn get_round_trips_every_item() {
        let catalog = sample_catalog();
        for item in catalog.items() {
            assert_eq!(catalog.get(item.id), Some(item));
        }
    }

    #[test]
    fn find_by_name_round_trips_every_item() {
        let catalog = sample_catalog();
        for item in catalog.items() {
            assert_eq!(catalog.find_by_name(&item.name), Some(item));
        }
    }

    #[test]
    fn lookup_misses_are_none_not_errors() {
        let catalog = sample_catalog();
        assert!(catalog.find_by_name("nonexistent").is_none());
        assert!(catalog.get(ItemId::from_raw(9_999)).is_none());
    }

    #[test]
    fn sample_catalog_has_five_items_in_source_order() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Tumbler Hijau",
                "Kacamata Anti Radiasi",
                "Rolex Terbaru",
                "Converse Pink Muda",
                "Tas Rajut Putih",
            ]
        );
    }

    #[test]
    fn sample_catalog_names_are_unique() {
        let catalog = sample_catalog();
        assert!(unique_names(catalog.items()));
    }

    #[test]
    fn empty_catalog_is_fine() {
        let catalog = Catalog::new([]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get(ItemId::from_raw(0)).is_none());
    }
}
