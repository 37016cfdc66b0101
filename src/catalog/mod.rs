//! Fixed product catalog.
//!
//! The catalog is a static, ordered sequence of products built once at
//! startup; rendering order equals declaration order. Product `id`s are the
//! stable keys for selection and must be pairwise distinct.

use fake::Dummy;

/// Defines product data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub price: String,
    pub description: String,
    pub art: String,
    pub rating: Option<f32>,
}

/// Return the fixed catalog. Not loaded from any external source.
///
pub fn catalog() -> Vec<Product> {
    vec![
        Product {
            id: "casque-audio-pro".to_string(),
            title: "Casque Audio Pro".to_string(),
            price: "89,99 €".to_string(),
            description: "Casque circum-aural à réduction de bruit active, \
                          30 heures d'autonomie, coussinets à mémoire de forme \
                          et étui de transport rigide inclus."
                .to_string(),
            art: concat!(
                "  _______  \n",
                " /       \\ \n",
                "| |     | |\n",
                "|_|     |_|",
            )
            .to_string(),
            rating: Some(4.5),
        },
        Product {
            id: "montre-connectee".to_string(),
            title: "Montre Connectée".to_string(),
            price: "149,00 €".to_string(),
            description: "Suivi d'activité et de sommeil, cadran AMOLED \
                          toujours allumé, étanche 5 ATM, sept jours \
                          d'autonomie en usage courant."
                .to_string(),
            art: concat!(
                "  .----.  \n",
                " / 10:42\\ \n",
                " \\  **  / \n",
                "  '----'  ",
            )
            .to_string(),
            rating: Some(4.2),
        },
        Product {
            id: "sac-a-dos-urbain".to_string(),
            title: "Sac à Dos Urbain".to_string(),
            price: "59,50 €".to_string(),
            description: "Compartiment ordinateur 15\", tissu déperlant, port \
                          de chargement USB externe et poche antivol dans le \
                          dos."
                .to_string(),
            art: concat!(
                "   ____   \n",
                "  / __ \\  \n",
                " | |__| | \n",
                " |______| ",
            )
            .to_string(),
            rating: Some(4.8),
        },
        Product {
            id: "enceinte-nomade".to_string(),
            title: "Enceinte Nomade".to_string(),
            price: "39,99 €".to_string(),
            description: "Enceinte Bluetooth compacte, son à 360 degrés, \
                          douze heures d'écoute et résistance aux \
                          éclaboussures IPX5."
                .to_string(),
            art: concat!(
                "  ______  \n",
                " (o)(o)(o)\n",
                " (o)(o)(o)\n",
                "  ‾‾‾‾‾‾  ",
            )
            .to_string(),
            rating: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_four_products() {
        assert_eq!(catalog().len(), 4);
    }

    #[test]
    fn catalog_ids_are_pairwise_distinct() {
        let products = catalog();
        let ids: HashSet<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn catalog_order_is_stable() {
        let first = catalog();
        let second = catalog();
        assert_eq!(first, second);
        assert_eq!(first[0].id, "casque-audio-pro");
        assert_eq!(first[3].id, "enceinte-nomade");
    }

    #[test]
    fn catalog_rating_is_optional() {
        let products = catalog();
        assert!(products.iter().any(|p| p.rating.is_some()));
        assert!(products.iter().any(|p| p.rating.is_none()));
    }

    #[test]
    fn catalog_entries_are_complete() {
        for product in catalog() {
            assert!(!product.id.is_empty());
            assert!(!product.title.is_empty());
            assert!(!product.price.is_empty());
            assert!(!product.description.is_empty());
            assert!(!product.art.is_empty());
        }
    }
}
