use yew::prelude::*;

use crate::models::menu::MenuItem;

/// Formato de precio para toda la UI
pub fn format_price(price: f64) -> String {
    format!("{:.2} €", price)
}

#[derive(Properties, PartialEq, Clone)]
pub struct MenuCardProps {
    pub item: MenuItem,
    pub on_add: Callback<MenuItem>,
    #[prop_or(0)]
    pub in_cart: u32, // cantidad ya en el carrito, para marcar el card
}

#[function_component(MenuCard)]
pub fn menu_card(props: &MenuCardProps) -> Html {
    let item = &props.item;

    let card_classes = classes!(
        "menu-card",
        (props.in_cart > 0).then_some("in-cart"),
    );

    let on_add_click = {
        let item = item.clone();
        let cb = props.on_add.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(item.clone());
        })
    };

    html! {
        <div class={card_classes} key={item.id.to_string()}>
            <img class="menu-card-image" src={item.image.clone()} alt={item.name.clone()} />
            <div class="menu-card-body">
                <h2 class="menu-card-name">{&item.name}</h2>
                <p class="menu-card-description">{&item.description}</p>
                <strong class="menu-card-price">{format_price(item.price)}</strong>
            </div>
            <button class="btn-add-to-cart" onclick={on_add_click}>
                {
                    if props.in_cart > 0 {
                        format!("Añadir otro ({})", props.in_cart)
                    } else {
                        "Añadir al carrito".to_string()
                    }
                }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_dos_decimales() {
        assert_eq!(format_price(20.0), "20.00 €");
        assert_eq!(format_price(12.5), "12.50 €");
        assert_eq!(format_price(0.0), "0.00 €");
    }
}
