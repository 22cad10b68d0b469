// ============================================================================
// CARRITO - Estado en memoria, sin persistencia
// ============================================================================
// Mapa id -> línea para lookup O(1), más un índice de orden de inserción.
// La proyección a lista ordenada solo se usa para renderizar y para el
// payload de checkout.
// ============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::menu::MenuItem;

/// Línea del carrito: el artículo más su cantidad.
/// Se serializa plano (campos del artículo + `quantity` al mismo nivel),
/// que es el formato que espera `POST /checkout`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartItem {
    /// Subtotal de la línea
    pub fn subtotal(&self) -> f64 {
        self.item.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: HashMap<u32, CartItem>,
    // Ids en orden de inserción, para que la lista renderizada sea estable
    order: Vec<u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade un artículo: si ya está, incrementa su cantidad en 1;
    /// si no, lo agrega al final con cantidad 1.
    pub fn add(&mut self, item: &MenuItem) {
        if let Some(line) = self.lines.get_mut(&item.id) {
            line.quantity += 1;
        } else {
            self.order.push(item.id);
            self.lines.insert(
                item.id,
                CartItem {
                    item: item.clone(),
                    quantity: 1,
                },
            );
        }
    }

    /// Elimina la línea completa, sea cual sea su cantidad.
    /// Un id que no está en el carrito es un no-op.
    pub fn remove(&mut self, id: u32) {
        if self.lines.remove(&id).is_some() {
            self.order.retain(|&other| other != id);
        }
    }

    pub fn quantity_of(&self, id: u32) -> Option<u32> {
        self.lines.get(&id).map(|line| line.quantity)
    }

    /// Proyección ordenada para renderizar y para el body de checkout
    pub fn items(&self) -> Vec<CartItem> {
        self.order
            .iter()
            .filter_map(|id| self.lines.get(id))
            .cloned()
            .collect()
    }

    /// Total = Σ precio × cantidad. Siempre recalculado, nunca cacheado.
    pub fn total(&self) -> f64 {
        self.lines.values().map(CartItem::subtotal).sum()
    }

    /// Número total de unidades (para el badge de la cabecera)
    pub fn count(&self) -> u32 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    /// Número de líneas distintas
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::menu::demo;

    #[test]
    fn test_agregar_repetido_incrementa_cantidad() {
        let pizza = demo::item(1, "Pizza", 20.0);
        let mut cart = Cart::new();

        for _ in 0..3 {
            cart.add(&pizza);
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(1), Some(3));
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_agregar_distintos_conserva_orden_de_insercion() {
        let mut cart = Cart::new();
        let carta = demo::carta();

        cart.add(&carta[2]); // Ensalada (id 3)
        cart.add(&carta[0]); // Pizza (id 1)
        cart.add(&carta[2]); // Ensalada otra vez: solo sube cantidad

        let items = cart.items();
        let ids: Vec<u32> = items.iter().map(|l| l.item.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[1].quantity, 1);
    }

    #[test]
    fn test_eliminar_borra_la_linea_completa() {
        let pizza = demo::item(1, "Pizza", 20.0);
        let mut cart = Cart::new();
        cart.add(&pizza);
        cart.add(&pizza);

        cart.remove(1);

        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of(1), None);
    }

    #[test]
    fn test_eliminar_id_ausente_es_noop() {
        let mut cart = Cart::new();
        cart.add(&demo::item(1, "Pizza", 20.0));

        cart.remove(99);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(1), Some(1));
    }

    #[test]
    fn test_total_es_suma_de_precio_por_cantidad() {
        let mut cart = Cart::new();
        let carta = demo::carta();

        assert_eq!(cart.total(), 0.0);

        cart.add(&carta[0]); // 20.0
        cart.add(&carta[0]); // 20.0
        cart.add(&carta[1]); // 12.5

        assert_eq!(cart.total(), 52.5);
        assert_eq!(cart.count(), 3);

        cart.remove(carta[0].id);
        assert_eq!(cart.total(), 12.5);
    }

    #[test]
    fn test_escenario_pizza_dos_veces() {
        // Menú con una pizza a 20 -> añadir dos veces -> una línea, total 40.00
        let pizza = demo::item(1, "Pizza", 20.0);
        let mut cart = Cart::new();
        cart.add(&pizza);
        cart.add(&pizza);

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item.id, 1);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(cart.total(), 40.0);
    }

    #[test]
    fn test_clear_vacia_todo() {
        let mut cart = Cart::new();
        for item in demo::carta() {
            cart.add(&item);
        }
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), 0.0);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_cart_item_se_serializa_plano() {
        let mut cart = Cart::new();
        cart.add(&demo::item(1, "Pizza", 20.0));

        let json = serde_json::to_value(&cart.items()).unwrap();
        let line = &json[0];

        // Campos del artículo y quantity al mismo nivel, como espera el backend
        assert_eq!(line["id"], 1);
        assert_eq!(line["name"], "Pizza");
        assert_eq!(line["quantity"], 1);
        assert!(line.get("item").is_none());
    }
}
