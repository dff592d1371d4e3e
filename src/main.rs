use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod gallery;
mod service_areas;
mod smooth_scroll;
mod components {
    pub mod card_stack;
    pub mod carousel;
    pub mod contact_form;
    pub mod expanding_gallery;
    pub mod fallback_image;
    pub mod footer;
    pub mod hover_expand;
    pub mod marquee;
    pub mod rotating_text;
    pub mod showcase;
}
mod pages {
    pub mod about_us;
    pub mod home;
    pub mod our_services;
    pub mod pool_types;
}

use config::SmoothScrollConfig;
use pages::{about_us::AboutUs, home::Home, our_services::OurServices, pool_types::PoolTypes};
use smooth_scroll::{SmoothScroll, SmoothScrollHandle};

const SCROLLED_AFTER: f64 = 50.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/aboutus")]
    AboutUs,
    #[at("/ourserv")]
    OurServices,
    #[at("/top")]
    PoolTypes,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::AboutUs => {
            info!("Rendering About Us page");
            html! { <AboutUs /> }
        }
        Route::OurServices => {
            info!("Rendering Our Services page");
            html! { <OurServices /> }
        }
        Route::PoolTypes => {
            info!("Rendering Pool Types page");
            html! { <PoolTypes /> }
        }
        Route::NotFound => {
            info!("Unknown route, showing not found");
            html! {
                <div class="page not-found">
                    <header class="page-hero">
                        <h1>{"Page not found"}</h1>
                        <p><Link<Route> to={Route::Home}>{"Back to the pools"}</Link<Route>></p>
                    </header>
                </div>
            }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.clone().map(|window| {
                    let target = window.clone();
                    let callback = Closure::<dyn FnMut()>::new(move || {
                        let y = target.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(y > SCROLLED_AFTER);
                    });
                    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/logo.png" alt="" class="nav-logo-mark" />
                    {"Swim Designers"}
                </Link<Route>>

                <button class={classes!("burger-menu", (*menu_open).then_some("open"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then_some("mobile-menu-open"))}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::AboutUs} classes="nav-link">{"About Us"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::OurServices} classes="nav-link">{"Services"}</Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::PoolTypes} classes="nav-link">{"Pool Types"}</Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let scroll = use_state(|| None::<SmoothScrollHandle>);

    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                let handle = SmoothScroll::attach(SmoothScrollConfig::default()).map(SmoothScrollHandle::new);
                scroll.set(handle.clone());
                move || {
                    if let Some(handle) = handle {
                        handle.destroy();
                    }
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<Option<SmoothScrollHandle>> context={(*scroll).clone()}>
            <BrowserRouter>
                <style>
                    {r#"
                        body {
                            margin: 0;
                            font-family: 'Inter', system-ui, sans-serif;
                            background: #fff;
                        }
                        .top-nav {
                            position: fixed;
                            top: 0;
                            left: 0;
                            right: 0;
                            z-index: 50;
                            transition: background 0.3s ease, box-shadow 0.3s ease;
                        }
                        .top-nav.scrolled {
                            background: rgba(255, 255, 255, 0.92);
                            backdrop-filter: blur(12px);
                            box-shadow: 0 4px 20px rgba(15, 23, 42, 0.08);
                        }
                        .nav-content {
                            max-width: 1200px;
                            margin: 0 auto;
                            padding: 1rem 1.5rem;
                            display: flex;
                            align-items: center;
                            justify-content: space-between;
                        }
                        .nav-logo {
                            display: flex;
                            align-items: center;
                            gap: 0.5rem;
                            font-weight: 800;
                            font-size: 1.25rem;
                            color: #0c4a6e;
                            text-decoration: none;
                        }
                        .nav-logo-mark {
                            height: 2rem;
                        }
                        .nav-right {
                            display: flex;
                            gap: 2rem;
                        }
                        .nav-link {
                            color: #1f2937;
                            text-decoration: none;
                            font-weight: 500;
                        }
                        .nav-link:hover {
                            color: #0284c7;
                        }
                        .burger-menu {
                            display: none;
                            flex-direction: column;
                            gap: 5px;
                            background: none;
                            border: none;
                            cursor: pointer;
                        }
                        .burger-menu span {
                            width: 24px;
                            height: 2px;
                            background: #1f2937;
                        }
                        .page-hero {
                            padding: 9rem 1.5rem 3rem;
                            text-align: center;
                            background: linear-gradient(135deg, #f0f9ff, #ecfeff);
                        }
                        .page-hero h1 {
                            font-size: clamp(2.25rem, 5vw, 3.75rem);
                            color: #0f172a;
                            margin: 0 0 1rem;
                        }
                        .page-hero p {
                            color: #475569;
                            max-width: 42rem;
                            margin: 0 auto;
                        }
                        @media (max-width: 768px) {
                            .burger-menu {
                                display: flex;
                            }
                            .nav-right {
                                display: none;
                                position: absolute;
                                top: 100%;
                                left: 0;
                                right: 0;
                                flex-direction: column;
                                gap: 1rem;
                                padding: 1.5rem;
                                background: #fff;
                                box-shadow: 0 10px 20px rgba(15, 23, 42, 0.1);
                            }
                            .nav-right.mobile-menu-open {
                                display: flex;
                            }
                        }
                    "#}
                </style>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Option<SmoothScrollHandle>>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::warn!("logger already initialized");
    }

    info!("Starting Swim Designers");
    yew::Renderer::<App>::new().render();
}
