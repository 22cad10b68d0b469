use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginModalProps {
    pub open: bool,
    pub loading: bool,
    #[prop_or_default]
    pub error: String,
    #[prop_or_default]
    pub success: String,
    pub on_close: Callback<()>,
    pub on_submit: Callback<(String, String)>,
}

#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    // Estados para los valores de los inputs
    let email = use_state(String::new);
    let password = use_state(String::new);

    if !props.open {
        return html! {};
    }

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let cb = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_val = (*email).clone();
            let password_val = (*password).clone();

            if email_val.is_empty() || password_val.is_empty() {
                return;
            }

            cb.emit((email_val, password_val));
        })
    };

    let close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal active" onclick={close_click.clone()}>
            <form class="modal-content login-form" onclick={stop} onsubmit={on_submit}>
                <div class="modal-header">
                    <h2>{"Login"}</h2>
                    <button type="button" class="btn-close" onclick={close_click}>{"✕"}</button>
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        placeholder="tu@email.com"
                        value={(*email).clone()}
                        oninput={on_email_change}
                        required=true
                    />
                </div>

                <div class="form-group">
                    <label for="password">{"Contraseña"}</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        placeholder="Ingresa tu contraseña"
                        value={(*password).clone()}
                        oninput={on_password_change}
                        required=true
                    />
                </div>

                <button type="submit" class="btn-login" disabled={props.loading}>
                    { if props.loading { "Entrando..." } else { "Entrar" } }
                </button>

                {
                    if !props.error.is_empty() {
                        html! { <div class="login-error">{&props.error}</div> }
                    } else {
                        html! {}
                    }
                }
                {
                    if !props.success.is_empty() {
                        html! { <div class="login-success">{&props.success}</div> }
                    } else {
                        html! {}
                    }
                }
            </form>
        </div>
    }
}
