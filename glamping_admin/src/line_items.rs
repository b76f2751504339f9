//! Line-item composition for promotions and reservations.
//!
//! A composer keeps three independent ordered lists (glampings, products,
//! experiences). Each item snapshots the option's name and unit price at the
//! moment it is added; later price changes on the backend do not affect
//! items already in the list.

use glamping_api::types::{
    Experience, ExperienceItem, Glamping, GlampingItem, Product, ProductItem, Promotion, Reserve,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Glamping,
    Product,
    Experience,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 3] = [
        ItemCategory::Glamping,
        ItemCategory::Product,
        ItemCategory::Experience,
    ];

    fn index(self) -> usize {
        match self {
            ItemCategory::Glamping => 0,
            ItemCategory::Product => 1,
            ItemCategory::Experience => 2,
        }
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ItemCategory::Glamping => "glamping",
                ItemCategory::Product => "product",
                ItemCategory::Experience => "experience",
            }
        )
    }
}

/// A selectable option loaded from the catalog.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineOption {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl From<&Glamping> for LineOption {
    fn from(g: &Glamping) -> Self {
        Self {
            id: g.id,
            name: g.title.clone(),
            price: g.price,
        }
    }
}

impl From<&Product> for LineOption {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            price: p.price,
        }
    }
}

impl From<&Experience> for LineOption {
    fn from(e: &Experience) -> Self {
        Self {
            id: e.id,
            name: e.name.clone(),
            price: e.price,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub reference_id: i64,
    pub display_name: String,
    /// Nights for glampings, units for products and experiences. Always > 0.
    pub quantity: u32,
    pub unit_price: f64,
}

impl LineItem {
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Raw values of the option selector and quantity input for one category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineItemDraft {
    pub selected_id: Option<String>,
    pub quantity: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineItemError {
    #[error("no {0} options are loaded")]
    NoOptions(ItemCategory),
    #[error("no option selected")]
    MissingOption,
    #[error("'{0}' is not a valid option id")]
    InvalidOptionId(String),
    #[error("option {0} is not among the loaded options")]
    UnknownOption(i64),
    #[error("quantity must be a positive integer, got '{0}'")]
    InvalidQuantity(String),
}

/// Gross total, discount percentage and resulting net total.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub gross_import: f64,
    pub discount: f64,
    pub net_import: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineItemComposer {
    lists: [Vec<LineItem>; 3],
    drafts: [LineItemDraft; 3],
}

impl LineItemComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the items of an existing promotion, e.g. when opening it for edit.
    pub fn from_promotion(promotion: &Promotion) -> Self {
        Self::from_parts(
            &promotion.glampings,
            &promotion.products,
            &promotion.experiences,
        )
    }

    pub fn from_reserve(reserve: &Reserve) -> Self {
        Self::from_parts(&reserve.glampings, &reserve.products, &reserve.experiences)
    }

    fn from_parts(
        glampings: &[GlampingItem],
        products: &[ProductItem],
        experiences: &[ExperienceItem],
    ) -> Self {
        let mut composer = Self::default();
        composer.lists[0] = glampings
            .iter()
            .map(|g| LineItem {
                reference_id: g.id_glamping,
                display_name: g.name.clone(),
                quantity: g.nights,
                unit_price: g.price,
            })
            .collect();
        composer.lists[1] = products
            .iter()
            .map(|p| LineItem {
                reference_id: p.id_product,
                display_name: p.name.clone(),
                quantity: p.quantity,
                unit_price: p.price,
            })
            .collect();
        composer.lists[2] = experiences
            .iter()
            .map(|e| LineItem {
                reference_id: e.id_experience,
                display_name: e.name.clone(),
                quantity: e.quantity,
                unit_price: e.price,
            })
            .collect();
        composer
    }

    pub fn items(&self, category: ItemCategory) -> &[LineItem] {
        &self.lists[category.index()]
    }

    pub fn draft(&self, category: ItemCategory) -> &LineItemDraft {
        &self.drafts[category.index()]
    }

    pub fn draft_mut(&mut self, category: ItemCategory) -> &mut LineItemDraft {
        &mut self.drafts[category.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }

    /// Appends a line item for `selected_id` with `quantity`.
    ///
    /// Both values are raw control values. On success the category's draft
    /// inputs are cleared; on any error nothing is mutated.
    pub fn add(
        &mut self,
        category: ItemCategory,
        options: &[LineOption],
        selected_id: &str,
        quantity: &str,
    ) -> Result<&LineItem, LineItemError> {
        if options.is_empty() {
            return Err(LineItemError::NoOptions(category));
        }
        let selected_id = selected_id.trim();
        if selected_id.is_empty() {
            return Err(LineItemError::MissingOption);
        }
        let id = selected_id
            .parse::<i64>()
            .map_err(|_| LineItemError::InvalidOptionId(selected_id.to_string()))?;
        let quantity = match quantity.trim().parse::<u32>() {
            Ok(q) if q > 0 => q,
            _ => return Err(LineItemError::InvalidQuantity(quantity.trim().to_string())),
        };
        let option = options
            .iter()
            .find(|o| o.id == id)
            .ok_or(LineItemError::UnknownOption(id))?;

        self.drafts[category.index()] = LineItemDraft::default();
        let list = &mut self.lists[category.index()];
        list.push(LineItem {
            reference_id: option.id,
            display_name: option.name.clone(),
            quantity,
            unit_price: option.price,
        });
        tracing::debug!(
            "added {} {} x{} at {}",
            category,
            option.id,
            quantity,
            option.price
        );
        Ok(&list[list.len() - 1])
    }

    /// Adds from the category's draft inputs.
    pub fn add_from_draft(
        &mut self,
        category: ItemCategory,
        options: &[LineOption],
    ) -> Result<LineItem, LineItemError> {
        let draft = self.drafts[category.index()].clone();
        let selected = draft.selected_id.unwrap_or_default();
        let quantity = draft.quantity.unwrap_or_default();
        self.add(category, options, &selected, &quantity).cloned()
    }

    /// Removes the item at `index`. Indices come from the rendered list, so an
    /// out-of-range index is ignored.
    pub fn remove(&mut self, category: ItemCategory, index: usize) -> Option<LineItem> {
        let list = &mut self.lists[category.index()];
        if index < list.len() {
            Some(list.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Sum of quantity × unit price across all three lists.
    pub fn total(&self) -> f64 {
        self.lists.iter().flatten().map(LineItem::subtotal).sum()
    }

    pub fn breakdown(&self, discount_pct: f64) -> PriceBreakdown {
        let gross_import = self.total();
        PriceBreakdown {
            gross_import,
            discount: discount_pct,
            net_import: apply_discount(gross_import, discount_pct),
        }
    }

    pub fn glamping_items(&self) -> Vec<GlampingItem> {
        self.items(ItemCategory::Glamping)
            .iter()
            .map(|item| GlampingItem {
                id_glamping: item.reference_id,
                name: item.display_name.clone(),
                nights: item.quantity,
                price: item.unit_price,
                date_from: None,
                date_to: None,
            })
            .collect()
    }

    pub fn product_items(&self) -> Vec<ProductItem> {
        self.items(ItemCategory::Product)
            .iter()
            .map(|item| ProductItem {
                id_product: item.reference_id,
                name: item.display_name.clone(),
                quantity: item.quantity,
                price: item.unit_price,
            })
            .collect()
    }

    pub fn experience_items(&self) -> Vec<ExperienceItem> {
        self.items(ItemCategory::Experience)
            .iter()
            .map(|item| ExperienceItem {
                id_experience: item.reference_id,
                name: item.display_name.clone(),
                quantity: item.quantity,
                price: item.unit_price,
                day: None,
            })
            .collect()
    }
}

/// Applies a percentage discount to `base`.
///
/// `pct <= 0` leaves `base` unchanged and `pct > 100` yields 0. This is not a
/// symmetric clamp: 150% does not mean "100% off", it zeroes the total.
pub fn apply_discount(base: f64, pct: f64) -> f64 {
    if pct <= 0.0 {
        base
    } else if pct > 100.0 {
        0.0
    } else {
        base * (1.0 - pct / 100.0)
    }
}
