use yew::prelude::*;

use crate::components::menu_card::format_price;
use crate::models::cart::CartItem;

#[derive(Properties, PartialEq, Clone)]
pub struct CartDrawerProps {
    pub open: bool,
    pub items: Vec<CartItem>,
    pub total: f64,
    #[prop_or(false)]
    pub checking_out: bool,
    pub on_close: Callback<()>,
    pub on_remove: Callback<u32>,
    pub on_checkout: Callback<()>,
}

#[function_component(CartDrawer)]
pub fn cart_drawer(props: &CartDrawerProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    let checkout_click = {
        let cb = props.on_checkout.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let checkout_disabled = props.items.is_empty() || props.checking_out;

    html! {
        <div class="cart-backdrop" onclick={close_click.clone()}>
            <aside class="cart-drawer" onclick={stop}>
                <div class="cart-header">
                    <h2>{"Carrito"}</h2>
                    <button class="btn-close" onclick={close_click}>{"✕"}</button>
                </div>

                <div class="cart-lines">
                    {
                        if props.items.is_empty() {
                            html! { <p class="cart-empty">{"Tu carrito está vacío."}</p> }
                        } else {
                            html! {
                                { for props.items.iter().map(|line| {
                                    let id = line.item.id;
                                    let remove_click = {
                                        let cb = props.on_remove.clone();
                                        Callback::from(move |e: MouseEvent| {
                                            e.stop_propagation();
                                            cb.emit(id);
                                        })
                                    };

                                    html! {
                                        <div class="cart-line" key={id.to_string()}>
                                            <img
                                                class="cart-line-image"
                                                src={line.item.image.clone()}
                                                alt={line.item.name.clone()}
                                            />
                                            <div class="cart-line-info">
                                                <div class="cart-line-name">{&line.item.name}</div>
                                                <div class="cart-line-qty">{format!("Cant: {}", line.quantity)}</div>
                                                <div class="cart-line-subtotal">{format_price(line.subtotal())}</div>
                                            </div>
                                            <button
                                                class="btn-remove-line"
                                                title="Quitar del carrito"
                                                onclick={remove_click}
                                            >
                                                {"🗑"}
                                            </button>
                                        </div>
                                    }
                                })}
                            }
                        }
                    }
                </div>

                <div class="cart-footer">
                    <div class="cart-total">
                        {format!("Total: {}", format_price(props.total))}
                    </div>
                    <button
                        class="btn-checkout"
                        disabled={checkout_disabled}
                        onclick={checkout_click}
                    >
                        { if props.checking_out { "Procesando..." } else { "Finalizar compra" } }
                    </button>
                </div>
            </aside>
        </div>
    }
}
