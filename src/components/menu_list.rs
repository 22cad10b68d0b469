use yew::prelude::*;

use crate::components::menu_card::MenuCard;
use crate::models::cart::Cart;
use crate::models::menu::MenuItem;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuListProps {
    pub items: Vec<MenuItem>,
    pub cart: Cart,
    pub loading: bool,
    pub on_add: Callback<MenuItem>,
}

#[function_component(MenuList)]
pub fn menu_list(props: &MenuListProps) -> Html {
    if props.loading {
        return html! {
            <div class="menu-loading">{"Cargando la carta..."}</div>
        };
    }

    if props.items.is_empty() {
        // fetch_menu devuelve lista vacía también ante errores de red
        return html! {
            <div class="menu-empty">{"La carta no está disponible en este momento."}</div>
        };
    }

    html! {
        <div class="menu-grid">
            { for props.items.iter().map(|item| {
                let in_cart = props.cart.quantity_of(item.id).unwrap_or(0);
                html! {
                    <MenuCard
                        key={item.id.to_string()}
                        item={item.clone()}
                        on_add={props.on_add.clone()}
                        in_cart={in_cart}
                    />
                }
            })}
        </div>
    }
}
