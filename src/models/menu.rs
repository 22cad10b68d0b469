use serde::{Deserialize, Serialize};

/// Artículo de la carta tal como lo entrega el backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

/// El endpoint `/menu` puede responder `{ "menu": [...] }` o el array a secas.
/// Aceptamos ambas formas y proyectamos siempre a `Vec<MenuItem>`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MenuPayload {
    Wrapped { menu: Vec<MenuItem> },
    Bare(Vec<MenuItem>),
}

impl MenuPayload {
    pub fn into_items(self) -> Vec<MenuItem> {
        match self {
            MenuPayload::Wrapped { menu } => menu,
            MenuPayload::Bare(items) => items,
        }
    }
}

/// Decodifica el body del endpoint de carta. Cualquier JSON que no encaje
/// en ninguna de las dos formas es un error (el caller decide qué hacer).
pub fn parse_menu_body(body: &str) -> Result<Vec<MenuItem>, String> {
    serde_json::from_str::<MenuPayload>(body)
        .map(MenuPayload::into_items)
        .map_err(|e| format!("Parse error: {}", e))
}

/// Datos de demo para testing
#[cfg(test)]
pub mod demo {
    use super::MenuItem;

    pub fn item(id: u32, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: format!("{} de la casa", name),
            price,
            image: format!("https://img.example.com/{}.jpg", id),
        }
    }

    pub fn carta() -> Vec<MenuItem> {
        vec![
            item(1, "Pizza", 20.0),
            item(2, "Hamburguesa", 12.5),
            item(3, "Ensalada", 8.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_envuelto() {
        let body = r#"{"menu":[{"id":1,"name":"Pizza","description":"Napolitana","price":20.0,"image":"https://img/p.jpg"}]}"#;
        let items = parse_menu_body(body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].name, "Pizza");
        assert_eq!(items[0].price, 20.0);
    }

    #[test]
    fn test_parse_menu_array_directo() {
        let body = r#"[{"id":7,"name":"Tarta","description":"De manzana","price":4.5,"image":"https://img/t.jpg"}]"#;
        let items = parse_menu_body(body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 7);
    }

    #[test]
    fn test_parse_menu_vacio() {
        assert!(parse_menu_body(r#"{"menu":[]}"#).unwrap().is_empty());
        assert!(parse_menu_body("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_menu_malformado() {
        assert!(parse_menu_body("not json").is_err());
        assert!(parse_menu_body(r#"{"otra_cosa":true}"#).is_err());
    }
}
