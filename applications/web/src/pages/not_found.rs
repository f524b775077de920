use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{ "Episódio não encontrado" }</h1>
            <Link<Route> to={Route::Home}>{ "Voltar para o início" }</Link<Route>>
        </div>
    }
}
