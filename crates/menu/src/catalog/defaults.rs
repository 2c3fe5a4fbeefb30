//! Built-in default menu.
//!
//! The catalog snapshot is rebuilt from this table whenever the persisted
//! snapshot is missing, unreadable or tagged with another version. Bump
//! [`CATALOG_VERSION`] whenever this table changes so existing installs pick
//! up the new menu.

use lacapke_core::{Category, MenuItem, Price, ProductId, Variant};

/// Version tag of the table below.
pub const CATALOG_VERSION: &str = "2024-01-15-002";

/// Static description of one default item.
struct DefaultItem {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: u64,
    image: &'static str,
    category: Category,
    is_vegetarian: bool,
    is_new: bool,
    variants: &'static [(&'static str, u64)],
}

impl DefaultItem {
    fn to_item(&self) -> Option<MenuItem> {
        let id = match ProductId::parse(self.id) {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(id = self.id, error = %e, "Skipping default item with invalid id");
                return None;
            }
        };

        let mut item = MenuItem::new(id, self.name, Price::new(self.price), self.category);
        item.description = self.description.to_string();
        item.image = Some(self.image.to_string());
        item.is_vegetarian = self.is_vegetarian;
        item.is_new = self.is_new;
        item.variants = self
            .variants
            .iter()
            .map(|(name, price)| Variant {
                name: (*name).to_string(),
                price: Price::new(*price),
            })
            .collect();
        Some(item)
    }
}

/// The default menu, in display order within each category.
#[must_use]
pub fn default_items() -> Vec<MenuItem> {
    DEFAULT_ITEMS.iter().filter_map(DefaultItem::to_item).collect()
}

#[rustfmt::skip]
const DEFAULT_ITEMS: &[DefaultItem] = &[
    DefaultItem {
        id: "sandwich-mediterraneo",
        name: "Sándwich Mediterráneo",
        description: "Ciabatta de pan de masa madre, cheesecream, queso pategrás, jamón crudo, tomates asados y rúcula.",
        price: 13300,
        image: "/sandwich-mediterraneo.jpg",
        category: Category::Brunch,
        is_vegetarian: false,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "club-sandwich",
        name: "Club Sándwich",
        description: "Pollo asado, rúcula, tomates asados, panceta, mostaneza, jamón natural, queso danbo y queso pategrás.",
        price: 13800,
        image: "/club-sandwich.jpg",
        category: Category::Brunch,
        is_vegetarian: false,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "tosti-madre",
        name: "Tosti Madre",
        description: "Sándwich en pan de masa madre relleno de jamón natural a la plancha, queso danbo y pategrás, con un toque de mostaza.",
        price: 8200,
        image: "/tosti-madre.jpg",
        category: Category::Brunch,
        is_vegetarian: false,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "toston-de-palta",
        name: "Tostón de Palta",
        description: "Tostada de pan de masa madre, hummus cremoso de garbanzo, champiñones salteados y palta.",
        price: 7900,
        image: "/toston-de-palta.jpg",
        category: Category::Brunch,
        is_vegetarian: true,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "el-benedictino",
        name: "El Benedictino",
        description: "Dos esponjosos muffins inglés, cheesecream, espinaca salteada, salmón ahumado, huevo media cocción y salsa holandesa cítrica.",
        price: 8700,
        image: "/el-benedictino.jpg",
        category: Category::Brunch,
        is_vegetarian: false,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "croissant-con-helado",
        name: "Croissant con Helado",
        description: "Croissant tibio y crujiente acompañado de una generosa porción de helado artesanal. Una combinación perfecta entre lo cálido y lo fresco.",
        price: 6900,
        image: "/croissant-con-helado-new.png",
        category: Category::Brunch,
        is_vegetarian: true,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "tosti-espinaca-champis",
        name: "Tosti de Espinaca y Champis",
        description: "Tostada de pan de masa madre con espinaca fresca salteada, champiñones dorados y queso derretido. Una opción saludable y deliciosa.",
        price: 8200,
        image: "/tosti-espinaca-champis-new.png",
        category: Category::Brunch,
        is_vegetarian: true,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "me-lo-merezco",
        name: "Me lo Merezco",
        description: "Torre de tres platos para compartir entre 2 personas. Incluye una porción de torta a elección, mafalda prensada de jamón natural y queso danbo, y muffin inglés con queso danbo, panceta, cheesecream y huevo frito.",
        price: 22000,
        image: "/me-lo-merezco.jpg",
        category: Category::Breakfast,
        is_vegetarian: false,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "querido-bowl",
        name: "Querido Bowl",
        description: "Bowl nutritivo con base de quinoa, vegetales frescos de estación, palta, semillas y aderezo casero. Una opción completa y saludable.",
        price: 9800,
        image: "/querido-bowl.jpg",
        category: Category::Breakfast,
        is_vegetarian: true,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "chipa-prensado",
        name: "Chipá Prensado",
        description: "Chipá tradicional cordobés prensado y tostado, relleno con jamón y queso. Servido caliente y crujiente.",
        price: 3500,
        image: "/chipa-prensado.jpg",
        category: Category::Breakfast,
        is_vegetarian: false,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "fosforito-la-capke",
        name: "Fosforito La Capke",
        description: "Nuestra versión especial del clásico fosforito cordobés, con ingredientes premium y el toque distintivo de La Capke.",
        price: 4200,
        image: "/fosforito-la-capke.png",
        category: Category::Breakfast,
        is_vegetarian: false,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "fosforito-clasico",
        name: "Fosforito Clásico",
        description: "El tradicional fosforito cordobés en su versión más auténtica. Simple, delicioso y nostálgico.",
        price: 3800,
        image: "/fosforito-clasico.png",
        category: Category::Breakfast,
        is_vegetarian: false,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "burrito-champis",
        name: "Burrito de Champiñones",
        description: "Tortilla de trigo rellena con champiñones salteados, arroz, frijoles negros, queso, palta y salsa criolla. Una explosión de sabores.",
        price: 11500,
        image: "/burrito-champis.png",
        category: Category::Lunch,
        is_vegetarian: true,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "chicken-pasta",
        name: "Pasta con Pollo",
        description: "Pasta fresca con trozos de pollo grillado, vegetales de estación y salsa cremosa. Acompañada con queso parmesano.",
        price: 13200,
        image: "/chicken-pasta.png",
        category: Category::Lunch,
        is_vegetarian: false,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "ensalada-salmon",
        name: "Ensalada de Salmón",
        description: "Mix de hojas verdes, salmón ahumado, palta, tomates cherry, pepino y aderezo cítrico. Fresca y nutritiva.",
        price: 14800,
        image: "/ensalada-salmon.png",
        category: Category::Lunch,
        is_vegetarian: false,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "fiery-noodle-feast",
        name: "Fideos Picantes",
        description: "Fideos asiáticos con vegetales salteados y salsa picante. Un plato con personalidad para los amantes del picante.",
        price: 10900,
        image: "/fiery-noodle-feast.png",
        category: Category::Lunch,
        is_vegetarian: true,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "savory-shrimp-pasta",
        name: "Pasta con Camarones",
        description: "Pasta con camarones frescos, ajo, perejil y aceite de oliva. Un clásico de la cocina mediterránea.",
        price: 16500,
        image: "/savory-shrimp-pasta.png",
        category: Category::Lunch,
        is_vegetarian: false,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "porcion-papas",
        name: "Porción de Papas",
        description: "Papas fritas caseras, doradas y crujientes. Perfectas como acompañamiento o para compartir.",
        price: 4500,
        image: "/porcion-papas.png",
        category: Category::Lunch,
        is_vegetarian: true,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "fried-plantain",
        name: "Plátano Frito",
        description: "Plátano maduro frito hasta lograr el punto perfecto de caramelización. Dulce y reconfortante.",
        price: 3800,
        image: "/fried-plantain.png",
        category: Category::Lunch,
        is_vegetarian: true,
        is_new: false,
        variants: &[],
    },
    DefaultItem {
        id: "milanesa-berenjena",
        name: "Milanesa de Berenjena",
        description: "Milanesa de berenjena empanada y dorada, acompañada con puré de papas casero y ensalada fresca.",
        price: 12800,
        image: "/milanesa-berenjena-new.jpg",
        category: Category::Lunch,
        is_vegetarian: true,
        is_new: false,
        variants: &[("Adulto", 12800), ("Niños", 8500)],
    },
    DefaultItem {
        id: "milanesa-papas",
        name: "Milanesa con Papas",
        description: "Clásica milanesa de carne empanada y frita, acompañada con papas fritas caseras y ensalada mixta.",
        price: 14200,
        image: "/milanesa-papas-new.jpg",
        category: Category::Lunch,
        is_vegetarian: false,
        is_new: false,
        variants: &[("Adulto", 14200), ("Niños", 9800)],
    },
    DefaultItem {
        id: "wrap-pollo",
        name: "Wrap de Pollo",
        description: "Tortilla de wrap con mix de verdes, pollo marinado horneado, champiñones, cilantro, panceta, tomates asados, queso danbo, queso pategrás y aderezo de yogurt y pepino.",
        price: 12500,
        image: "/wrap-pollo.png",
        category: Category::Lunch,
        is_vegetarian: false,
        is_new: true,
        variants: &[],
    },
    DefaultItem {
        id: "vegetable-curry",
        name: "Curry de Vegetales",
        description: "Curry aromático con brócoli, zanahorias, coliflor, arvejas y pimientos, servido con arroz basmati. Opción vegana disponible.",
        price: 11800,
        image: "/vegetable-curry.png",
        category: Category::Lunch,
        is_vegetarian: true,
        is_new: true,
        variants: &[],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::images::{DEFAULT_IMAGE, resolve_image};

    #[test]
    fn test_every_default_item_is_valid() {
        assert_eq!(default_items().len(), DEFAULT_ITEMS.len());
    }

    #[test]
    fn test_default_ids_are_unique() {
        let items = default_items();
        let ids: HashSet<_> = items.iter().map(|item| &item.id).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_default_images_are_known_assets() {
        for item in default_items() {
            let image = item.image.as_deref();
            assert_ne!(resolve_image(image), DEFAULT_IMAGE, "{}", item.id);
        }
    }

    #[test]
    fn test_default_items_are_orderable() {
        assert!(default_items().iter().all(MenuItem::is_orderable));
    }

    #[test]
    fn test_variant_items_match_base_price() {
        for item in default_items().iter().filter(|i| !i.variants.is_empty()) {
            assert_eq!(item.default_variant().map(|v| v.price), Some(item.price));
        }
    }
}
