//! Shopping list operations.

use tracing::debug;

use super::{KeyValueStore, Store, StoreKey};
use crate::error::SofraResult;
use crate::model::{
    CategoryGroup, NewShoppingItem, ShoppingCategory, ShoppingItem, ShoppingItemPatch, new_id,
    parse_bulk, validate_name,
};

impl<B: KeyValueStore> Store<B> {
    pub fn add_shopping_item(&mut self, new: NewShoppingItem) -> SofraResult<ShoppingItem> {
        validate_name(&new.name, "Item")?;

        let item = new.into_item(new_id());
        self.shopping_items.push(item.clone());
        self.persist(StoreKey::ShoppingItems);

        Ok(item)
    }

    /// Parse `text` and append every item in input order with a single write.
    pub fn add_shopping_items_bulk(
        &mut self,
        text: &str,
        category: ShoppingCategory,
    ) -> Vec<ShoppingItem> {
        let items: Vec<ShoppingItem> = parse_bulk(text, category)
            .into_iter()
            .map(|new| new.into_item(new_id()))
            .collect();

        if items.is_empty() {
            return items;
        }

        debug!(count = items.len(), %category, "Adding shopping items");
        self.shopping_items.extend(items.iter().cloned());
        self.persist(StoreKey::ShoppingItems);

        items
    }

    pub fn update_shopping_item(
        &mut self,
        id: &str,
        patch: ShoppingItemPatch,
    ) -> SofraResult<Option<ShoppingItem>> {
        let Some(item) = self.shopping_items.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };

        let mut updated = item.clone();
        patch.apply(&mut updated);
        validate_name(&updated.name, "Item")?;
        *item = updated.clone();

        self.persist(StoreKey::ShoppingItems);
        Ok(Some(updated))
    }

    pub fn remove_shopping_item(&mut self, id: &str) -> bool {
        let before = self.shopping_items.len();
        self.shopping_items.retain(|i| i.id != id);
        let removed = self.shopping_items.len() != before;

        if removed {
            self.persist(StoreKey::ShoppingItems);
        }
        removed
    }

    pub fn shopping_item(&self, id: &str) -> Option<&ShoppingItem> {
        self.shopping_items.iter().find(|i| i.id == id)
    }

    pub fn toggle_completed(&mut self, id: &str) -> Option<ShoppingItem> {
        let item = self.shopping_items.iter_mut().find(|i| i.id == id)?;
        item.completed = !item.completed;
        let item = item.clone();

        self.persist(StoreKey::ShoppingItems);
        Some(item)
    }

    /// Remove every completed item. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.shopping_items.len();
        self.shopping_items.retain(|i| !i.completed);
        let removed = before - self.shopping_items.len();

        if removed > 0 {
            self.persist(StoreKey::ShoppingItems);
        }
        removed
    }

    /// Remove every item, completed or not.
    pub fn clear_shopping_list(&mut self) -> usize {
        let removed = self.shopping_items.len();
        self.shopping_items.clear();
        self.persist(StoreKey::ShoppingItems);
        removed
    }

    /// Non-empty groups in category order.
    pub fn shopping_by_category(&self) -> Vec<CategoryGroup<'_>> {
        ShoppingCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let items: Vec<&ShoppingItem> = self
                    .shopping_items
                    .iter()
                    .filter(|i| i.category == category)
                    .collect();

                if items.is_empty() {
                    return None;
                }

                let completed = items.iter().filter(|i| i.completed).count();
                Some(CategoryGroup {
                    category,
                    items,
                    completed,
                })
            })
            .collect()
    }

    /// `(completed, total)`
    pub fn shopping_progress(&self) -> (usize, usize) {
        let completed = self.shopping_items.iter().filter(|i| i.completed).count();
        (completed, self.shopping_items.len())
    }
}
