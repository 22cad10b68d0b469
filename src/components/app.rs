// ============================================================================
// APP - Página única de la carta
// ============================================================================
// Todo el estado de UI vive aquí como hooks use_state; los handlers
// disparan las llamadas al ApiClient con spawn_local y nunca se coordinan
// entre sí. Carrito y totales son derivados en cada render.
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::{CartDrawer, LoginModal, MenuList};
use crate::config::CONFIG;
use crate::models::cart::Cart;
use crate::models::menu::MenuItem;
use crate::services::ApiClient;

#[function_component(App)]
pub fn app() -> Html {
    // Carta
    let menu = use_state(Vec::<MenuItem>::new);
    let menu_loading = use_state(|| true);

    // Carrito
    let cart = use_state(Cart::new);
    let cart_open = use_state(|| false);

    // Checkout
    let checkout_msg = use_state(String::new);
    let checking_out = use_state(|| false);

    // Login
    let login_open = use_state(|| false);
    let login_loading = use_state(|| false);
    let login_error = use_state(String::new);
    let login_success = use_state(String::new);
    let user = use_state(|| None::<String>);

    // La URL base se inyecta una sola vez desde la config; el cliente es
    // solo esa String, clonarlo por handler es barato.
    let api = ApiClient::new(CONFIG.backend_url());

    // Cargar la carta al montar (one-shot, sin refresco ni reintentos)
    {
        let menu = menu.clone();
        let menu_loading = menu_loading.clone();
        let api = api.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let items = api.fetch_menu().await;
                menu.set(items);
                menu_loading.set(false);
            });
            || ()
        });
    }

    // Añadir un artículo al carrito
    let on_add = {
        let cart = cart.clone();
        Callback::from(move |item: MenuItem| {
            let mut updated = (*cart).clone();
            updated.add(&item);
            log::info!("➕ {} en el carrito (x{})", item.name, updated.quantity_of(item.id).unwrap_or(0));
            cart.set(updated);
        })
    };

    // Quitar una línea completa del carrito
    let on_remove = {
        let cart = cart.clone();
        Callback::from(move |id: u32| {
            let mut updated = (*cart).clone();
            updated.remove(id);
            cart.set(updated);
        })
    };

    // Abrir / cerrar el carrito
    let open_cart = {
        let cart_open = cart_open.clone();
        Callback::from(move |_: MouseEvent| cart_open.set(true))
    };
    let close_cart = {
        let cart_open = cart_open.clone();
        Callback::from(move |_| cart_open.set(false))
    };

    // Finalizar compra: fire-and-forget. El carrito se vacía con la
    // respuesta, haya ido bien o mal, y el toast se borra solo.
    let on_checkout = {
        let cart = cart.clone();
        let cart_open = cart_open.clone();
        let checkout_msg = checkout_msg.clone();
        let checking_out = checking_out.clone();
        let api = api.clone();

        Callback::from(move |_| {
            // Guard contra doble click mientras hay un checkout en vuelo
            if *checking_out || cart.is_empty() {
                return;
            }

            let items = cart.items();
            let cart = cart.clone();
            let cart_open = cart_open.clone();
            let checkout_msg = checkout_msg.clone();
            let checking_out = checking_out.clone();
            let api = api.clone();

            checking_out.set(true);
            checkout_msg.set("Procesando...".to_string());

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = api.checkout(&items).await;

                checkout_msg.set(outcome.message.clone());
                cart.set(Cart::new());
                cart_open.set(false);
                checking_out.set(false);

                let checkout_msg = checkout_msg.clone();
                Timeout::new(CONFIG.ui.toast_duration_ms, move || {
                    checkout_msg.set(String::new());
                })
                .forget();
            });
        })
    };

    // Abrir el modal de login limpiando mensajes anteriores
    let show_login = {
        let login_open = login_open.clone();
        let login_error = login_error.clone();
        let login_success = login_success.clone();
        Callback::from(move |_: MouseEvent| {
            login_error.set(String::new());
            login_success.set(String::new());
            login_open.set(true);
        })
    };

    let close_login = {
        let login_open = login_open.clone();
        Callback::from(move |_| login_open.set(false))
    };

    // Enviar credenciales
    let on_login_submit = {
        let login_open = login_open.clone();
        let login_loading = login_loading.clone();
        let login_error = login_error.clone();
        let login_success = login_success.clone();
        let user = user.clone();
        let api = api.clone();

        Callback::from(move |(email, password): (String, String)| {
            let login_open = login_open.clone();
            let login_loading = login_loading.clone();
            let login_error = login_error.clone();
            let login_success = login_success.clone();
            let user = user.clone();
            let api = api.clone();

            login_loading.set(true);
            login_error.set(String::new());
            login_success.set(String::new());

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = api.login(&email, &password).await;
                login_loading.set(false);

                if outcome.success {
                    // El token no se reenvía en llamadas posteriores:
                    // la sesión es solo cosmética
                    login_success.set(outcome.message);
                    user.set(Some(email));

                    let login_open = login_open.clone();
                    Timeout::new(CONFIG.ui.login_close_delay_ms, move || {
                        login_open.set(false);
                    })
                    .forget();
                } else {
                    login_error.set(outcome.message);
                }
            });
        })
    };

    let on_logout = {
        let user = user.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("👋 Logout");
            user.set(None);
        })
    };

    // Derivados, recalculados en cada render
    let cart_count = cart.count();
    let cart_total = cart.total();

    html! {
        <div class="page">
            <header class="app-header">
                <span class="app-title">{"La Carta"}</span>
                <div class="header-actions">
                    <button class="btn-cart" title="Ver carrito" onclick={open_cart}>
                        {"🛒"}
                        {
                            if cart_count > 0 {
                                html! { <span class="cart-badge">{cart_count}</span> }
                            } else {
                                html! {}
                            }
                        }
                    </button>
                    {
                        match (*user).clone() {
                            Some(email) => html! {
                                <>
                                    <span class="user-greeting">{format!("Hola, {}", email)}</span>
                                    <button class="btn-auth" onclick={on_logout}>{"Salir"}</button>
                                </>
                            },
                            None => html! {
                                <button class="btn-auth" onclick={show_login}>{"Login"}</button>
                            },
                        }
                    }
                </div>
            </header>

            <main class="content">
                <h1>{"Carta"}</h1>
                <MenuList
                    items={(*menu).clone()}
                    cart={(*cart).clone()}
                    loading={*menu_loading}
                    on_add={on_add}
                />
            </main>

            <CartDrawer
                open={*cart_open}
                items={cart.items()}
                total={cart_total}
                checking_out={*checking_out}
                on_close={close_cart}
                on_remove={on_remove}
                on_checkout={on_checkout}
            />

            <LoginModal
                open={*login_open}
                loading={*login_loading}
                error={(*login_error).clone()}
                success={(*login_success).clone()}
                on_close={close_login}
                on_submit={on_login_submit}
            />

            {
                if !checkout_msg.is_empty() {
                    html! { <div class="checkout-toast">{(*checkout_msg).clone()}</div> }
                } else {
                    html! {}
                }
            }

            <footer class="app-footer">
                {"© La Carta. Todos los derechos reservados."}
            </footer>
        </div>
    }
}
