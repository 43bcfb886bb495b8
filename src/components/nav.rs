use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::scroll::nav_is_raised;

const LINKS: [(&str, &str); 5] = [
    ("#services", "Services"),
    ("#demo", "Try It"),
    ("#benefits", "Benefits"),
    ("#pricing", "Pricing"),
    ("#testimonials", "Reviews"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let active = (*menu_open).then_some("active");

    html! {
        <nav class={classes!("navbar", nav_is_raised(scroll_y).then_some("scrolled"))}>
            <div class="nav-content">
                <AnchorLink href="#home" classes={classes!("nav-logo")} on_navigate={close_menu.clone()}>
                    {"BookBot"}
                </AnchorLink>

                <button
                    class={classes!("mobile-menu-btn", active)}
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-links", active)}>
                    { for LINKS.iter().map(|(href, label)| html! {
                        <AnchorLink href={*href} on_navigate={close_menu.clone()}>
                            { *label }
                        </AnchorLink>
                    }) }
                    <AnchorLink href="#demo" classes={classes!("nav-cta")} on_navigate={close_menu.clone()}>
                        {"Book Now"}
                    </AnchorLink>
                </div>
            </div>
        </nav>
    }
}
