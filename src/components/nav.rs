use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::interaction::{use_media_query, MOBILE_BREAKPOINT};
use crate::Route;

const NAV_LINKS: [(&str, Route); 4] = [
    ("Home", Route::Home),
    ("About Us", Route::About),
    ("Services", Route::Services),
    ("Contact Us", Route::Contact),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let sidebar_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_mobile = use_media_query(MOBILE_BREAKPOINT);
    let is_scrolled = scroll_y > 10.0;

    let open_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            sidebar_open.set(true);
        })
    };

    let close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| {
            sidebar_open.set(false);
        })
    };

    let bar_style = format!(
        "position: fixed; top: 0; left: 0; width: 100%; z-index: 50; display: flex; \
         justify-content: space-between; align-items: center; padding: 16px {}; \
         color: #fff; font-weight: 500; transition: all 0.7s; overflow-x: hidden; \
         animation: fadeInUp 0.6s ease-out; {}",
        if is_mobile { "24px" } else { "64px" },
        if is_scrolled {
            "background: transparent; box-shadow: none;"
        } else {
            "background: #000; box-shadow: 0 4px 6px rgba(0,0,0,0.3);"
        },
    );

    let menu_style = if is_mobile {
        format!(
            "position: fixed; top: 0; bottom: 0; right: 0; display: flex; flex-direction: column; \
             gap: 20px; background: rgba(0,0,0,0.95); padding-top: 80px; overflow-y: auto; \
             transition: width 0.3s; {}",
            if *sidebar_open {
                "width: 14rem; padding-left: 32px;"
            } else {
                "width: 0; height: 0; overflow: hidden;"
            }
        )
    } else {
        "display: flex; align-items: center; gap: 20px;".to_string()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))} style={bar_style}>
            <Link<Route> to={Route::Home} classes="nav-logo">
                <img src="/assets/logo.svg" alt="logo" style="width: 90px; height: auto;" />
            </Link<Route>>

            <div class="nav-links" style={menu_style}>
                if is_mobile {
                    <button class="nav-close" onclick={close_sidebar.clone()}
                        style="position: absolute; right: 16px; top: 16px; background: none; border: none; color: #fff; font-size: 1.25rem;">
                        {"✕"}
                    </button>
                }
                { for NAV_LINKS.iter().map(|(label, route)| html! {
                    <div onclick={close_sidebar.clone()}>
                        <Link<Route> to={route.clone()} classes="nav-link">
                            {*label}
                        </Link<Route>>
                    </div>
                }) }
            </div>

            if is_mobile {
                <button class="burger-menu" onclick={open_sidebar}
                    style="width: 40px; height: 32px; display: flex; flex-direction: column; align-items: flex-end; gap: 6px; background: none; border: none;">
                    <span class="animate-gradient" style="height: 2.5px; width: 24px; border-radius: 9999px; background: linear-gradient(to right, #38b6ff, #000433);"></span>
                    <span class="animate-gradient" style="height: 2.5px; width: 100%; border-radius: 9999px; background: linear-gradient(to right, #38b6ff, #000433);"></span>
                    <span class="animate-gradient" style="height: 2.5px; width: 24px; border-radius: 9999px; background: linear-gradient(to right, #38b6ff, #000433);"></span>
                </button>
            } else {
                <Link<Route> to={Route::Contact} classes="nav-connect animate-gradient">
                    {"Connect ➜"}
                </Link<Route>>
            }
        </nav>
    }
}
